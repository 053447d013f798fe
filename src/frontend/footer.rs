use yew::prelude::*;

use super::browser::{current_year, scroll_to_top, scroll_y, use_window_event};
use super::OWNER_NAME;
use crate::sections::shows_scroll_to_top;

#[function_component(Footer)]
pub fn footer() -> Html {
    let show_scroll_top = use_state_eq(|| false);

    {
        let show_scroll_top = show_scroll_top.clone();
        use_window_event(
            "scroll",
            Callback::from(move |_: ()| show_scroll_top.set(shows_scroll_to_top(scroll_y()))),
        );
    }

    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <p class="muted">
                        {format!("© {} {OWNER_NAME}. All rights reserved. Built with Rust and Yew.", current_year())}
                    </p>
                    <p class="muted small">{"Computer Engineering Student, Universitas Indonesia"}</p>
                </div>
                <a class="social-link" href="https://github.com" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
            </div>

            if *show_scroll_top {
                <button type="button" class="scroll-top" aria-label="Back to top" onclick={back_to_top}>{"↑"}</button>
            }
        </footer>
    }
}
