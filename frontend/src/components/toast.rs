use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::notify::{Notice, Notifier, ToastAction, ToastStack};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub children: Children,
}

/// Provides the [`Notifier`] context and renders pushed notices in a corner
/// stack. Each notice dismisses itself after a few seconds.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let notifier = {
        let dispatcher = stack.dispatcher();
        use_state(move || {
            let next_id = Rc::new(Cell::new(0u64));
            Notifier::new(Callback::from(move |notice: Notice| {
                let id = next_id.get();
                next_id.set(id + 1);
                dispatcher.dispatch(ToastAction::Push(id, notice));

                let dispatcher = dispatcher.clone();
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                timeout.forget();
            }))
        })
    };

    let dismiss = {
        let dispatcher = stack.dispatcher();
        move |id: u64| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
        }
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        right: 1rem;
                        bottom: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        z-index: 100;
                        max-width: 360px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        background: #111111;
                        border: 1px solid #222222;
                        border-left: 4px solid #b91c1c;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                        animation: toastIn 0.3s ease-out forwards;
                        cursor: pointer;
                    }
                    .toast-success { border-left-color: #16a34a; }
                    .toast-error { border-left-color: #f97316; }
                    .toast-title { font-weight: bold; font-size: 0.95rem; }
                    .toast-body { color: #a1a1aa; font-size: 0.85rem; margin-top: 0.25rem; }
                "#}
            </style>
            { for props.children.iter() }
            <div class="toaster" role="status" aria-live="polite">
                { for stack.toasts.iter().map(|toast| html! {
                    <div key={toast.id} class={classes!("toast", toast.notice.kind.class())} onclick={dismiss(toast.id)}>
                        <div class="toast-title">{ &toast.notice.title }</div>
                        if let Some(body) = &toast.notice.body {
                            <div class="toast-body">{ body }</div>
                        }
                    </div>
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}
