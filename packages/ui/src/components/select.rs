use dioxus::prelude::*;
use dioxus_primitives::select;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Single-choice list built on `dioxus_primitives::select`.
///
/// `value` is the picked option's value, empty for none; `placeholder` is
/// shown until something is picked. `onchange` receives the new value.
#[component]
pub fn Select(
    #[props(into, default)] id: String,
    #[props(into, default)] class: String,
    #[props(into, default)] value: String,
    #[props(into, default)] placeholder: String,
    options: Vec<SelectOption>,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    onchange: EventHandler<String>,
) -> Element {
    let current = Some(value).filter(|v| !v.is_empty());
    let state = if invalid { "select-invalid" } else { "" };

    rsx! {
        select::Select::<String> {
            class: "select {state} {class}",
            value: Some(current),
            placeholder: placeholder,
            disabled: disabled,
            on_value_change: move |picked: Option<String>| onchange.call(picked.unwrap_or_default()),
            select::SelectTrigger { class: "select-trigger", id: "{id}",
                select::SelectValue {}
            }
            select::SelectList { class: "select-list",
                for (index, option) in options.into_iter().enumerate() {
                    select::SelectOption::<String> {
                        key: "{option.value}",
                        class: "select-option",
                        index: index,
                        value: option.value.clone(),
                        text_value: "{option.label}",
                        "{option.label}"
                        select::SelectItemIndicator { class: "select-item-indicator", "✓" }
                    }
                }
            }
        }
    }
}
