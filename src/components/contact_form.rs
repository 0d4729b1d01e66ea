//! Contact Form Component
//!
//! Validates fields as the visitor types and on focus loss, then hands
//! the submit trigger to `fleetsite_core::submit_contact_form`.

use dioxus::prelude::*;
use fleetsite_core::{submit_contact_form, FieldState, PageController, SubmitReport};
use fleetsite_ui::{is_multiline, MessageField, SubmitButton, TextField};

use crate::context::{use_page, use_submitter, PageSignal};
use crate::notifier::DialogNotifier;

/// Field copy: (name, label, placeholder)
const FIELD_COPY: [(&str, &str, &str); 4] = [
    ("name", "Ваше имя", "Иван Петров"),
    ("email", "Email", "ivan@example.com"),
    ("phone", "Телефон", "+7 (999) 123-45-67"),
    ("message", "Сообщение", "Маршрут, даты и число пассажиров"),
];

#[component]
pub fn ContactForm() -> Element {
    let page = use_page();
    let submitter = use_submitter();

    let (fields, control, form_class, submit_class) = {
        let page = page.read();
        let classes = &page.config().classes;
        let fields: Vec<(FieldState, &str, &str)> = FIELD_COPY
            .iter()
            .filter_map(|(name, label, placeholder)| {
                page.form().field(name).cloned().map(|f| (f, *label, *placeholder))
            })
            .collect();
        (
            fields,
            page.submission().control().clone(),
            classes.form.clone(),
            classes.submit.clone(),
        )
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        let submitter = submitter.clone();
        spawn(async move {
            let mut handle = PageSignal(page);
            match submit_contact_form(&mut handle, &submitter, &DialogNotifier).await {
                SubmitReport::Blocked => tracing::debug!("Submission blocked by invalid fields"),
                SubmitReport::Busy => tracing::debug!("Submission already pending"),
                SubmitReport::Completed { phase, .. } => {
                    tracing::debug!(?phase, "Submission completed")
                }
            }
        });
    };

    rsx! {
        form {
            class: "{form_class}",
            "novalidate": "true",
            onsubmit: onsubmit,
            for (field, label, placeholder) in fields {
                {field_view(page, field, label, placeholder)}
            }
            SubmitButton { control, class: submit_class }
        }
    }
}

/// Render one field with handlers bound to its name.
fn field_view(
    page: Signal<PageController>,
    field: FieldState,
    label: &str,
    placeholder: &str,
) -> Element {
    let (error_class, message_class) = {
        let page = page.read();
        let classes = &page.config().classes;
        (classes.field_error.clone(), classes.error_message.clone())
    };
    let required = !field.kind().is_optional();
    let name = field.name().to_string();
    let input_name = name.clone();
    let blur_name = name.clone();
    let mut input_page = page;
    let mut blur_page = page;

    if is_multiline(field.kind()) {
        rsx! {
            MessageField {
                key: "{name}",
                field,
                oninput: move |value: String| {
                    input_page.write().field_input(&input_name, value);
                },
                onblur: move |_: ()| {
                    blur_page.write().field_blur(&blur_name);
                },
                label: label.to_string(),
                placeholder: placeholder.to_string(),
                error_class,
                message_class,
            }
        }
    } else {
        rsx! {
            TextField {
                key: "{name}",
                field,
                oninput: move |value: String| {
                    input_page.write().field_input(&input_name, value);
                },
                onblur: move |_: ()| {
                    blur_page.write().field_blur(&blur_name);
                },
                label: label.to_string(),
                placeholder: placeholder.to_string(),
                required,
                error_class,
                message_class,
            }
        }
    }
}
