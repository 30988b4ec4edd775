use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Warning,
    Success,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Success => "success",
        }
    }

    /// Variant for an action tone such as `ActionKind::tone`.
    pub fn from_tone(tone: &str) -> Self {
        match tone {
            "warning" => ButtonVariant::Warning,
            "success" => ButtonVariant::Success,
            "danger" | "destructive" => ButtonVariant::Destructive,
            _ => ButtonVariant::Primary,
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] class: String,
    #[props(into, default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button button-{variant.class()} {class}",
            r#type: "{r#type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
