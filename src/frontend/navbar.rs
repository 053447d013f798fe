use yew::prelude::*;

use super::browser::{measure_sections, scroll_to_section, scroll_y, use_window_event};
use super::{OWNER_INITIALS, OWNER_NAME, RESUME_PATH};
use crate::sections::{active_section, nav_is_scrolled, Section, PROBE_OFFSET};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

fn nav_link(
    section: Section,
    active: Option<Section>,
    menu_open: &UseStateHandle<bool>,
    class: &'static str,
) -> Html {
    let onclick = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        })
    };
    let is_active = active == Some(section);

    html! {
        <a
            key={section.id()}
            class={classes!(class, is_active.then_some("is-active"))}
            href={section.href()}
            aria-current={is_active.then_some("true")}
            onclick={onclick}
        >
            {section.label()}
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<Section>);
    let menu_open = use_state_eq(|| false);

    let on_scroll = {
        let scrolled = scrolled.clone();
        let active = active.clone();
        Callback::from(move |_: ()| {
            scrolled.set(nav_is_scrolled(scroll_y()));
            active.set(active_section(measure_sections(), PROBE_OFFSET));
        })
    };

    {
        let on_scroll = on_scroll.clone();
        use_effect_with((), move |_| {
            on_scroll.emit(());
            || ()
        });
    }
    use_window_event("scroll", on_scroll);

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_home = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(false);
            scroll_to_section(Section::Hero);
        })
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("is-scrolled"))}>
            <div class="container navbar-inner">
                <a class="brand" href={Section::Hero.href()} onclick={go_home}>
                    <span class="brand-mark">{OWNER_INITIALS}</span>
                    <span class="brand-name">{OWNER_NAME}</span>
                </a>

                <div class="nav-links">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, *active, &menu_open, "nav-link")) }
                </div>

                <div class="nav-controls">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.is_dark().to_string()}
                        onclick={toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <a class="button resume-link" href={RESUME_PATH} download="">{"Resume"}</a>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={if *menu_open { "Close Menu" } else { "Open Menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>

                <div class={classes!("mobile-menu", (*menu_open).then_some("is-open"))}>
                    <div class="mobile-menu-links">
                        { for Section::ALL.into_iter().map(|section| nav_link(section, *active, &menu_open, "mobile-link")) }
                    </div>
                    <div class="mobile-menu-controls">
                        <button
                            class="theme-toggle"
                            type="button"
                            aria-label={props.theme.toggle_label()}
                            onclick={toggle_theme}
                        >
                            <span aria-hidden="true">{props.theme.icon()}</span>
                        </button>
                        <a class="button" href={RESUME_PATH} download="">{"Resume"}</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
