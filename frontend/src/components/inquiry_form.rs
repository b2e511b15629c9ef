use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::notify::use_notifier;
use crate::services::use_services;
use crate::state::inquiry::{InquiryField, InquiryForm, SubmissionPhase, SubmitDecision};
use crate::tasks::{spawn_cancellable, TaskHandle};

fn label(field: InquiryField) -> &'static str {
    match field {
        InquiryField::Name => "Name",
        InquiryField::Email => "Email",
        InquiryField::Subject => "Subject",
        InquiryField::Message => "Message",
    }
}

fn placeholder(field: InquiryField) -> &'static str {
    match field {
        InquiryField::Name => "Your name",
        InquiryField::Email => "your.email@example.com",
        InquiryField::Subject => "What is this regarding?",
        InquiryField::Message => "Please provide details about your inquiry...",
    }
}

#[function_component(InquiryFormCard)]
pub fn inquiry_form_card() -> Html {
    let form = use_mut_ref(InquiryForm::default);
    let delivery = use_mut_ref(|| None::<TaskHandle>);
    let update = use_update();
    let services = use_services();
    let notifier = use_notifier();

    {
        let delivery = delivery.clone();
        use_unmount(move || {
            if let Some(task) = delivery.borrow_mut().take() {
                task.cancel();
            }
        });
    }

    let set_field = {
        let form = form.clone();
        let update = update.clone();
        move |field: InquiryField, value: String| {
            form.borrow_mut().set_field(field, value);
            update();
        }
    };

    let oninput = |field: InquiryField| {
        let set_field = set_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field(field, input.value());
        })
    };

    let onmessage = {
        let set_field = set_field.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set_field(InquiryField::Message, area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let decision = form.borrow_mut().submit();
            let SubmitDecision::Accepted { ticket, inquiry } = decision else {
                update();
                return;
            };
            info!("Submitting inquiry from {}", inquiry.name);
            let request = services.mailer.deliver(inquiry);
            let form = form.clone();
            let notifier = notifier.clone();
            let done = update.clone();
            let handle = spawn_cancellable(async move {
                let outcome = request.await;
                let notice = form.borrow_mut().finish(ticket, outcome);
                if let Some(notice) = notice {
                    notifier.notify(notice);
                }
                done();
            });
            *delivery.borrow_mut() = Some(handle);
            update();
        })
    };

    let (fields, submitting, failed) = {
        let form = form.borrow();
        let fields = InquiryField::ALL
            .iter()
            .map(|&field| {
                (
                    field,
                    form.value(field).to_string(),
                    form.error(field).map(str::to_string),
                )
            })
            .collect::<Vec<_>>();
        (fields, form.is_submitting(), form.phase() == SubmissionPhase::Failed)
    };

    html! {
        <div class="inquiry-card">
            <style>
                {r#"
                    .inquiry-card {
                        width: 42%;
                        margin: 3rem auto;
                        background: #18181b;
                        border: 1px solid #991b1b;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
                    }
                    .inquiry-card h2 { color: #ef4444; margin: 0 0 0.5rem; }
                    .inquiry-card .card-description { color: #a1a1aa; margin: 0 0 1.5rem; }
                    .inquiry-form { display: grid; gap: 1.5rem; }
                    .form-item label { display: block; color: #d4d4d8; font-size: 0.875rem; margin-bottom: 0.5rem; }
                    .form-item input, .form-item textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: #27272a;
                        border: 1px solid #3f3f46;
                        border-radius: 6px;
                        color: #fff;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.9rem;
                    }
                    .form-item textarea { min-height: 120px; resize: vertical; }
                    .form-item input:focus, .form-item textarea:focus { outline: 2px solid #ef4444; }
                    .form-item .field-error { color: #ef4444; font-size: 0.8rem; margin: 0.4rem 0 0; }
                    .inquiry-submit {
                        width: 100%;
                        background: #dc2626;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.65rem 1rem;
                        font-size: 0.95rem;
                        cursor: pointer;
                    }
                    .inquiry-submit:hover { background: #b91c1c; }
                    .inquiry-submit:disabled { opacity: 0.6; cursor: not-allowed; }
                    .retry-hint { color: #f97316; font-size: 0.8rem; margin: 0; }
                    @media (max-width: 768px) {
                        .inquiry-card { width: auto; margin: 2rem 1rem; }
                    }
                "#}
            </style>
            <h2>{"Inquiry Form"}</h2>
            <p class="card-description">{"Fill out the form below and we'll get back to you shortly."}</p>
            <form class="inquiry-form" novalidate=true onsubmit={onsubmit}>
                { for fields.into_iter().map(|(field, value, error)| html! {
                    <div key={field.key()} class="form-item">
                        <label for={field.key()}>{ label(field) }</label>
                        {
                            match field {
                                InquiryField::Message => html! {
                                    <textarea
                                        id={field.key()}
                                        name={field.key()}
                                        placeholder={placeholder(field)}
                                        value={value}
                                        oninput={onmessage.clone()}
                                    />
                                },
                                _ => html! {
                                    <input
                                        id={field.key()}
                                        name={field.key()}
                                        type={if field == InquiryField::Email { "email" } else { "text" }}
                                        placeholder={placeholder(field)}
                                        value={value}
                                        oninput={oninput(field)}
                                    />
                                },
                            }
                        }
                        if let Some(error) = error {
                            <p class="field-error">{ error }</p>
                        }
                    </div>
                }) }
                if failed {
                    <p class="retry-hint">{"Your inquiry was not sent. Your message is still here, try again."}</p>
                }
                <button type="submit" class="inquiry-submit" disabled={submitting}>
                    { if submitting { "Submitting..." } else { "Submit Inquiry" } }
                </button>
            </form>
        </div>
    }
}
