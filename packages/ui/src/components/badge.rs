use dioxus::prelude::*;

/// Small pill. `variant` is one of `success`, `warning`, `destructive`,
/// `secondary` or `outline`.
#[component]
pub fn Badge(#[props(into, default = "secondary".to_string())] variant: String, children: Element) -> Element {
    rsx! {
        span { class: "badge", "data-style": "{variant}", {children} }
    }
}
