use dioxus::prelude::*;
use dioxus_primitives::alert_dialog;

/// Modal confirmation on top of `dioxus_primitives::alert_dialog`.
///
/// The dialog is open while it is mounted. Escape, Cancel and the action
/// buttons all close it, which calls `on_close`.
#[component]
pub fn AlertDialog(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogRoot {
            class: "alert-dialog-backdrop",
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            alert_dialog::AlertDialogContent { class: "alert-dialog", {children} }
        }
    }
}

#[component]
pub fn AlertDialogTitle(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogTitle { class: "alert-dialog-title", {children} }
    }
}

#[component]
pub fn AlertDialogDescription(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogDescription { class: "alert-dialog-description", {children} }
    }
}

#[component]
pub fn AlertDialogActions(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogActions { class: "alert-dialog-actions", {children} }
    }
}

#[component]
pub fn AlertDialogCancel(children: Element) -> Element {
    rsx! {
        alert_dialog::AlertDialogCancel { class: "button button-outline", {children} }
    }
}

/// The confirming button. `variant` is a [`ButtonVariant`](super::ButtonVariant)
/// style name such as `destructive`.
#[component]
pub fn AlertDialogAction(
    #[props(into)] variant: String,
    on_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        alert_dialog::AlertDialogAction {
            class: "button button-{variant}",
            on_click: move |evt| on_click.call(evt),
            {children}
        }
    }
}
