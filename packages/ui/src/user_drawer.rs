use dioxus::prelude::*;
use store::{form::date_for_input, status_tone, Sex, UserRecord};

use crate::components::{Badge, Button, ButtonVariant, Drawer};

/// Read-only details of one user.
#[component]
pub fn UserDetailDrawer(user: UserRecord, on_close: EventHandler<()>) -> Element {
    let avatar = match user.sex {
        Some(Sex::Female) => "bg-pink-100 text-pink-800",
        Some(Sex::Male) => "bg-blue-100 text-blue-800",
        None => "bg-neutral-100",
    };
    let status = user.status.map(|s| s.label()).unwrap_or("Unknown");
    let birth = date_for_input(&user.date_of_birth);
    let rows = [
        ("User ID", user.user_id.map(|n| n.to_string())),
        ("Sex", user.sex.map(|s| s.label().to_string())),
        ("Role", Some(user.role.clone())),
        ("Date of Birth", Some(birth)),
        ("Email", user.email.clone()),
        ("Phone Number", user.phone_number.clone()),
    ];

    rsx! {
        Drawer {
            title: "User Details",
            on_close: on_close,
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            },
            div { class: "flex items-center gap-4 mb-6",
                div { class: "grid place-items-center w-14 h-14 rounded-full text-lg font-bold {avatar}", "{user.initials()}" }
                div {
                    h3 { class: "m-0 text-lg font-semibold", "{user.full_name()}" }
                    p { class: "mt-0.5 mb-1.5 text-neutral-500", "{user.code}" }
                    Badge { variant: status_tone(user.status), "{status}" }
                }
            }
            dl { class: "m-0",
                for (label, value) in rows {
                    div { key: "{label}", class: "grid grid-cols-[8rem_1fr] py-2 border-b border-neutral-200",
                        dt { class: "text-neutral-500", "{label}" }
                        dd { class: "m-0", {value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())} }
                    }
                }
            }
        }
    }
}
