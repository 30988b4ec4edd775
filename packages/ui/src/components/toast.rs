//! Toasts come from `dioxus-primitives`; this module adds the stylesheet and
//! a hook that shows a [`Notice`](api::Notice).

use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

use dioxus_primitives::toast::{use_toast, ToastOptions};

const TOAST_CSS: Asset = asset!("/assets/toast.css");

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        dioxus_primitives::toast::ToastProvider { {children} }
    }
}

/// A callback that shows a notice as a success or error toast.
pub fn use_notify() -> Callback<Notice> {
    let toast = use_toast();
    use_callback(move |notice: Notice| {
        let options = ToastOptions::new().description(notice.description);
        match notice.level {
            NoticeLevel::Success => toast.success(notice.title, options),
            NoticeLevel::Error => toast.error(notice.title, options),
        };
    })
}
