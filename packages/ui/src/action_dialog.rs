use dioxus::prelude::*;
use store::{ActionKind, UserRecord};

use crate::components::{
    AlertDialog, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogDescription,
    AlertDialogTitle, ButtonVariant,
};

/// Asks before archiving, reactivating or deleting `user`.
///
/// Confirming hands the action and the user's identifier to `on_confirm`;
/// the dialog makes no request itself. Any way of closing it calls `on_close`.
#[component]
pub fn ConfirmActionDialog(
    kind: ActionKind,
    user: UserRecord,
    on_confirm: EventHandler<(ActionKind, String)>,
    on_close: EventHandler<()>,
) -> Element {
    let id = user.id.clone();
    let code = user.user_id.map(|n| n.to_string()).unwrap_or(user.code.clone());
    let name = user.short_name();
    let variant = ButtonVariant::from_tone(kind.tone()).class();

    rsx! {
        AlertDialog { on_close: on_close,
            AlertDialogTitle { "Are you sure?" }
            AlertDialogDescription {
                "Do you want to {kind.verb()} "
                strong { "\"{name}\"" }
                " "
                strong { "\"{code}\"" }
                "? {confirm_detail(kind)}"
            }
            AlertDialogActions {
                AlertDialogCancel { "Cancel" }
                AlertDialogAction {
                    variant: variant,
                    on_click: move |_| on_confirm.call((kind, id.clone())),
                    "{kind.label()}"
                }
            }
        }
    }
}

fn confirm_detail(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Delete => "This action cannot be undone.",
        ActionKind::Archive => "The user can be reactivated later.",
        ActionKind::Reactivate => "The user's status will be set back to Active.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_detail_describes_the_action() {
        assert_eq!(confirm_detail(ActionKind::Delete), "This action cannot be undone.");
        assert_eq!(confirm_detail(ActionKind::Archive), "The user can be reactivated later.");
        for kind in [ActionKind::Delete, ActionKind::Archive, ActionKind::Reactivate] {
            assert!(!confirm_detail(kind).contains("sign in"));
        }
    }
}
