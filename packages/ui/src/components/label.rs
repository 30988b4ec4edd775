use dioxus::prelude::*;

#[component]
pub fn Label(#[props(into)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Validation message under a field. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
