//! Submit Button Component

use dioxus::prelude::*;
use fleetsite_core::SubmitControl;

/// Properties for the SubmitButton component
#[derive(Clone, PartialEq, Props)]
pub struct SubmitButtonProps {
    /// Label and disabled state from the submission flow
    pub control: SubmitControl,
    #[props(default = "submit-button".to_string())]
    pub class: String,
}

/// Form submit button; shows the busy label and is disabled while a
/// submission is pending.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let control = &props.control;
    let class = if control.is_disabled() {
        format!("{} busy", props.class)
    } else {
        props.class.clone()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "submit",
            disabled: control.is_disabled(),
            "aria-busy": "{control.is_disabled()}",
            "{control.label()}"
        }
    }
}
