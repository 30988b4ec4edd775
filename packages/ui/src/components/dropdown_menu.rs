use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu;

/// A trigger button that opens a floating menu.
///
/// Keyboard navigation, focus return and dismissal come from
/// `dioxus_primitives::dropdown_menu`. Picking an item closes the menu.
#[component]
pub fn DropdownMenu(
    /// Accessible name of the trigger.
    #[props(into)]
    label: String,
    trigger: Element,
    children: Element,
) -> Element {
    rsx! {
        dropdown_menu::DropdownMenu { class: "dropdown-menu",
            dropdown_menu::DropdownMenuTrigger { class: "dropdown-menu-trigger",
                span { class: "sr-only", "{label}" }
                {trigger}
            }
            dropdown_menu::DropdownMenuContent { class: "dropdown-menu-content", {children} }
        }
    }
}

/// One entry of a [`DropdownMenu`]. `index` is the item's position in the
/// menu and drives arrow-key focus.
#[component]
pub fn DropdownMenuItem(
    index: usize,
    #[props(into, default)] class: String,
    on_select: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        dropdown_menu::DropdownMenuItem::<usize> {
            class: "dropdown-menu-item {class}",
            value: index,
            index: index,
            on_select: move |_| on_select.call(()),
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuLabel(children: Element) -> Element {
    rsx! {
        div { class: "dropdown-menu-label", {children} }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "dropdown-menu-separator", role: "separator" }
    }
}
