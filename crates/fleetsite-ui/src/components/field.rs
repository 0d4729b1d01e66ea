//! Form Field Components
//!
//! Inputs and textareas paired with their error message node.
//! Features:
//! - Message node rendered directly after the control, always present
//! - `error` class on the control while the field is invalid
//! - Validation on every input and on focus loss

use dioxus::prelude::*;
use fleetsite_core::{FieldKind, FieldState};

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Field state from the page controller
    pub field: FieldState,
    /// Handler called with the new value on every input
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    pub onblur: EventHandler<()>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Whether the field is required
    #[props(default = false)]
    pub required: bool,
    /// Class added to the control while invalid
    #[props(default = "error".to_string())]
    pub error_class: String,
    /// Class of the message node
    #[props(default = "error-message".to_string())]
    pub message_class: String,
}

/// Single-line input for name, email and phone fields
///
/// # Example
///
/// ```rust,ignore
/// let mut page = use_page();
///
/// rsx! {
///     TextField {
///         field: page.read().form().field("email").cloned().unwrap(),
///         oninput: move |v| { page.write().field_input("email", v); },
///         onblur: move |_| { page.write().field_blur("email"); },
///         label: "Email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let field = &props.field;
    let id = field_id(field);
    let class = control_class("form-input", field, &props.error_class);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { class: "form-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                name: "{field.name()}",
                class: "{class}",
                r#type: "{field.kind().input_type()}",
                value: "{field.value()}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
            }
            ErrorMessage { field: props.field.clone(), class: props.message_class.clone() }
        }
    }
}

/// Properties for the MessageField component
#[derive(Clone, PartialEq, Props)]
pub struct MessageFieldProps {
    pub field: FieldState,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = "error".to_string())]
    pub error_class: String,
    #[props(default = "error-message".to_string())]
    pub message_class: String,
}

/// Multi-line message field
#[component]
pub fn MessageField(props: MessageFieldProps) -> Element {
    let field = &props.field;
    let id = field_id(field);
    let class = control_class("form-input form-textarea", field, &props.error_class);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { class: "form-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                name: "{field.name()}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{field.value()}",
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
            }
            ErrorMessage { field: props.field.clone(), class: props.message_class.clone() }
        }
    }
}

/// The message node following a field; hidden, not removed, when valid.
#[component]
fn ErrorMessage(field: FieldState, class: String) -> Element {
    let node = field.error_node();
    let display = if node.is_displayed() { "block" } else { "none" };

    rsx! {
        div {
            class: "{class}",
            style: "display: {display};",
            role: "alert",
            "{node.text()}"
        }
    }
}

fn field_id(field: &FieldState) -> String {
    format!("contact-{}", field.name())
}

/// Control class with the error marker appended while invalid.
pub fn control_class(base: &str, field: &FieldState, error_class: &str) -> String {
    if field.is_marked_invalid() {
        format!("{} {}", base, error_class)
    } else {
        base.to_string()
    }
}

/// Whether a field kind renders as a textarea.
pub fn is_multiline(kind: FieldKind) -> bool {
    kind == FieldKind::Message
}
