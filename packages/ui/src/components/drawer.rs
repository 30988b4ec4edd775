use dioxus::prelude::*;

/// Panel sliding in from the right edge over a dimmed backdrop.
/// Clicking the backdrop triggers `on_close`.
#[component]
pub fn Drawer(
    #[props(into)] title: String,
    on_close: EventHandler<()>,
    children: Element,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| on_close.call(()),
            aside {
                class: "drawer",
                role: "dialog",
                "aria-label": "{title}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                header { class: "drawer-header",
                    h2 { class: "drawer-title", "{title}" }
                }
                div { class: "drawer-body", {children} }
                if let Some(actions) = actions {
                    footer { class: "drawer-footer", {actions} }
                }
            }
        }
    }
}
