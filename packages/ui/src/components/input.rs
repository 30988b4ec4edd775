use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into, default)] id: String,
    #[props(into, default)] class: String,
    #[props(into, default = "text".to_string())] r#type: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] value: String,
    #[props(default)] disabled: bool,
    /// Marks the field as failing validation.
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            "aria-invalid": invalid,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
