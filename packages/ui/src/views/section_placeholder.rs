use dioxus::prelude::*;

/// Stand-in for sections that have no content yet.
#[component]
pub fn SectionPlaceholder(#[props(into)] title: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-[50vh] text-neutral-500",
            h2 { class: "m-0 mb-2 text-lg font-medium text-neutral-800", "{title}" }
            p { class: "m-0 text-sm", "This section is not available yet." }
        }
    }
}

#[component]
pub fn NotFoundView(#[props(into)] path: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-[50vh] text-neutral-500",
            h2 { class: "m-0 mb-2 text-lg font-medium text-neutral-800", "Page not found" }
            p { class: "m-0 text-sm", "Nothing lives at {path}." }
        }
    }
}
