use std::rc::Rc;
use yew::prelude::*;

use super::browser::set_timeout;
use crate::notify::{Toast, ToastQueue, TOAST_DISMISS_MS};

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.push(toast);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: ToastQueue,
    pub dispatcher: UseReducerDispatcher<ToastQueue>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    {
        let ids: Vec<u64> = props.queue.visible().iter().map(|queued| queued.id).collect();
        let dispatcher = props.dispatcher.clone();
        use_effect_with(ids, move |ids| {
            for &id in ids {
                let dispatcher = dispatcher.clone();
                set_timeout(TOAST_DISMISS_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id))
                });
            }
            || ()
        });
    }

    html! {
        <ol class="toaster" aria-live="polite">
            { for props.queue.visible().iter().map(|queued| {
                let id = queued.id;
                let dispatcher = props.dispatcher.clone();
                let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)));
                html! {
                    <li key={id} class={classes!("toast", queued.toast.variant.class())} role="status" onclick={onclick}>
                        <p class="toast-title">{queued.toast.title.clone()}</p>
                        <p class="toast-description">{queued.toast.description.clone()}</p>
                    </li>
                }
            }) }
        </ol>
    }
}
