use yew::prelude::*;

use super::browser::scroll_to_section;
use super::OWNER_NAME;
use crate::sections::Section;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let view_work = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_section(Section::Projects);
    });

    html! {
        <section id="hero" class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">
                    {"Hi, I'm "}<span class="accent">{OWNER_NAME}</span>
                </h1>
                <p class="hero-lead muted">
                    {"Computer Engineering student building interactive web applications with an eye for security."}
                </p>
                <a class="button" href={Section::Projects.href()} onclick={view_work}>{"View My Work"}</a>
            </div>
            <span class="scroll-hint muted" aria-hidden="true">{"Scroll ↓"}</span>
        </section>
    }
}
