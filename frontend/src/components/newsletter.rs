use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::notify::use_notifier;
use crate::state::newsletter::NewsletterForm;

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let form = use_state(NewsletterForm::default);
    let notifier = use_notifier();

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_email(input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if let Some(notice) = next.subscribe() {
                notifier.notify(notice);
            }
            form.set(next);
        })
    };

    let email = form.email().to_string();
    let error = form.error().map(str::to_string);

    html! {
        <section class="newsletter">
            <style>
                {r#"
                    .newsletter {
                        background: linear-gradient(to right, #7f1d1d, #b91c1c);
                        border-radius: 12px;
                        padding: 2rem;
                        margin-bottom: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                    }
                    .newsletter h2 { margin: 0 0 0.5rem; font-size: 1.5rem; }
                    .newsletter p { margin: 0; color: #e5e7eb; }
                    .newsletter-form { display: flex; gap: 0.5rem; }
                    .newsletter-form input {
                        flex: 1;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 6px;
                        padding: 0.5rem 0.75rem;
                        color: #fff;
                    }
                    .newsletter-form button {
                        background: #000;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                    }
                    .newsletter .fine-print { margin-top: 0.5rem; font-size: 0.75rem; color: #e5e7eb; }
                    .newsletter .field-error { color: #fecaca; font-size: 0.8rem; margin-top: 0.4rem; }
                    @media (max-width: 768px) {
                        .newsletter { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div>
                <h2>{"Stay Updated with Nepal's Latest News"}</h2>
                <p>{"Subscribe to our newsletter and never miss important updates from across Nepal."}</p>
            </div>
            <div>
                <form class="newsletter-form" novalidate=true onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={email}
                        oninput={oninput}
                    />
                    <button type="submit">{"Subscribe"}</button>
                </form>
                if let Some(error) = error {
                    <p class="field-error">{ error }</p>
                }
                <p class="fine-print">{"We respect your privacy. Unsubscribe at any time."}</p>
            </div>
        </section>
    }
}
