mod about;
mod background;
mod browser;
mod contact;
mod footer;
mod hero;
mod mailer;
mod navbar;
mod projects;
mod skills;
mod toaster;

use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use crate::notify::{Toast, ToastQueue};
use crate::telemetry::{log_event, LogLevel};
use crate::theme::{resolve_theme, toggle_theme, Theme};

use self::about::AboutSection;
use self::background::StarBackground;
use self::browser::{apply_theme, system_prefers_dark, BrowserStorage};
use self::contact::ContactSection;
use self::footer::Footer;
use self::hero::HeroSection;
use self::navbar::Navbar;
use self::projects::ProjectsSection;
use self::skills::SkillsSection;
use self::toaster::{ToastAction, Toaster};

const OWNER_NAME: &str = "Zikri Zulfa";
const OWNER_INITIALS: &str = "ZZ";
const RESUME_PATH: &str = "/cv.pdf";

fn initial_theme() -> Theme {
    let theme = resolve_theme(&BrowserStorage, system_prefers_dark());
    log_event(
        LogLevel::Debug,
        "theme_resolved",
        json!({ "theme": theme.as_str() }),
    );
    theme
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(initial_theme);
    let toasts = use_reducer(ToastQueue::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = toggle_theme(&BrowserStorage, *theme);
            apply_theme(next);
            log_event(LogLevel::Info, "theme_toggled", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |toast: Toast| toasts.dispatch(ToastAction::Push(toast)))
    };

    html! {
        <ContextProvider<Callback<Toast>> context={notify}>
            <div class="page">
                <StarBackground />
                <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <SkillsSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
            <Toaster queue={(*toasts).clone()} dispatcher={toasts.dispatcher()} />
        </ContextProvider<Callback<Toast>>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
