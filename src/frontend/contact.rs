use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::mailer::EmailJsMailer;
use crate::contact::{deliver, outcome_toast, ContactForm, Field, MailerConfig};
use crate::notify::Toast;

const CONTACT_EMAIL: &str = "zikrizulfa.z2@gmail.com";
const CONTACT_EMAIL_HREF: &str =
    "https://mail.google.com/mail/u/0/?fs=1&to=zikrizulfa.z2@gmail.com&tf=cm";
const CONTACT_PHONE: &str = "+62 89667730784";
const CONTACT_PHONE_HREF: &str = "tel:+6289667730784";
const CONTACT_LOCATION: &str = "North Jakarta, Indonesia";

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "#"),
    ("Instagram", "#"),
    ("GitHub", "#"),
];

fn contact_info() -> Html {
    html! {
        <div class="contact-info">
            <h3 class="rule-heading">{"Contact Information"}</h3>
            <ul class="contact-items">
                <li>
                    <h4>{"Email"}</h4>
                    <a href={CONTACT_EMAIL_HREF} class="muted">{CONTACT_EMAIL}</a>
                </li>
                <li>
                    <h4>{"Phone"}</h4>
                    <a href={CONTACT_PHONE_HREF} class="muted">{CONTACT_PHONE}</a>
                </li>
                <li>
                    <h4>{"Location"}</h4>
                    <p class="muted">{CONTACT_LOCATION}</p>
                </li>
            </ul>

            <h4 class="rule-heading">{"Connect With Me"}</h4>
            <div class="social-links">
                { for SOCIAL_LINKS.iter().map(|(label, url)| html! {
                    <a key={*label} href={*url} target="_blank" rel="noopener noreferrer" title={*label}>{*label}</a>
                }) }
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let refresh = use_force_update();
    let notify = use_context::<Callback<Toast>>().unwrap_or_default();

    let oninput = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: InputEvent| {
            let (name, value) = if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };

            if let Some(field) = Field::from_name(&name) {
                form.borrow_mut().edit(field, value);
                refresh.force_update();
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(draft) = form.borrow_mut().begin() else {
                return;
            };
            refresh.force_update();

            let form = form.clone();
            let refresh = refresh.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let outcome = deliver(&EmailJsMailer, MailerConfig::from_build_env(), &draft).await;
                form.borrow_mut().finish(&outcome);
                refresh.force_update();
                notify.emit(outcome_toast(&outcome));
            });
        })
    };

    let current = form.borrow().clone();
    let submitting = current.is_submitting();
    let draft = current.draft();

    html! {
        <section id="contact" class="section section-tinted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"Get In "}<span class="accent">{"Touch"}</span></h2>
                    <p class="section-lead muted">
                        {"Feel free to reach out. I'm open to discussing new opportunities, collaborations, or just a friendly chat."}
                    </p>
                </div>

                <div class="contact-grid">
                    { contact_info() }

                    <div class="card contact-card">
                        <h3 class="rule-heading">{"Send a Message"}</h3>
                        <form class="contact-form" onsubmit={onsubmit}>
                            <label for="name">{"Your Name"}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required={true}
                                placeholder="Zikri Zulfa..."
                                value={draft.name.clone()}
                                oninput={oninput.clone()}
                                disabled={submitting}
                            />

                            <label for="email">{"Your Email"}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required={true}
                                placeholder="example@gmail.com"
                                value={draft.email.clone()}
                                oninput={oninput.clone()}
                                disabled={submitting}
                            />

                            <label for="message">{"Your Message"}</label>
                            <textarea
                                id="message"
                                name="message"
                                required={true}
                                rows="5"
                                placeholder="Your message..."
                                value={draft.message.clone()}
                                oninput={oninput}
                                disabled={submitting}
                            />

                            <button
                                type="submit"
                                class={classes!("button", "button-block", submitting.then_some("is-busy"))}
                                disabled={submitting}
                            >
                                if submitting {
                                    <span class="spinner" aria-hidden="true"></span>
                                    {"Sending..."}
                                } else {
                                    {"Send Message"}
                                }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
