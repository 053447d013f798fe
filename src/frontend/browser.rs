use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Storage, Window};
use yew::prelude::*;

use crate::sections::{anchor_scroll_target, Section, SectionBounds};
use crate::theme::{PreferenceStore, Theme, DARK_CLASS};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed preferences.
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn measure_sections() -> Vec<(Section, SectionBounds)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = document
                .get_element_by_id(section.id())?
                .get_bounding_client_rect();
            Some((
                section,
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

fn smooth_scroll_to(win: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(section: Section) {
    let Some(win) = window() else {
        return;
    };
    let Some(element) = win
        .document()
        .and_then(|d| d.get_element_by_id(section.id()))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    smooth_scroll_to(&win, anchor_scroll_target(f64::from(element.offset_top())));
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        smooth_scroll_to(&win, 0.0);
    }
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn set_timeout(millis: i32, callback: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<Function>(),
        millis,
    );
}

/// Runs `handler` on every `event` fired at the window while mounted.
#[hook]
pub fn use_window_event(event: &'static str, handler: Callback<()>) {
    use_effect_with(event, move |event| {
        let event = *event;
        let listener = Closure::<dyn Fn()>::new(move || handler.emit(()));

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ = win
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    });
}

/// Emits `KeyboardEvent.key` for every window keydown while mounted.
#[hook]
pub fn use_window_keydown(handler: Callback<String>) {
    use_effect_with((), move |_| {
        let listener =
            Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| handler.emit(event.key()));

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ = win
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
        }
    });
}
