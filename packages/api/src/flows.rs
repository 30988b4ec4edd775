//! What the users page does with each backend answer.
//!
//! These functions sit between the dialogs and a [`UsersService`]: they
//! validate, call, and turn the outcome into a [`Notice`] for a toast plus the
//! change the page should make. They hold no UI state, so the rules are
//! testable against [`MemoryUsersService`](crate::MemoryUsersService).

use store::{ActionKind, FieldErrors, UserForm, UserRecord, UsersConfig};

use crate::service::UsersService;
use crate::users::ListQuery;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fetch the working set with the configured page and limit.
///
/// The error is the message shown in place of the table.
pub async fn load_users<S: UsersService>(
    service: &S,
    config: &UsersConfig,
) -> Result<Vec<UserRecord>, String> {
    let query = ListQuery::page(config.page, config.limit);
    match service.list(&query).await {
        Ok(resp) if resp.success => Ok(resp.data.unwrap_or_default()),
        Ok(resp) => {
            let message = resp.message_or("Failed to load users");
            tracing::warn!("list rejected: {message}");
            Err(message)
        }
        Err(e) => {
            tracing::error!("error fetching users: {e}");
            Err(e.to_string())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notice: Notice,
    /// The list must be fetched again.
    pub reload: bool,
}

/// Run a confirmed archive, reactivate or delete.
///
/// Only a successful action asks for a reload; a rejected one leaves the
/// working set as it was and reports the backend message.
pub async fn run_action<S: UsersService>(service: &S, kind: ActionKind, id: &str) -> ActionOutcome {
    let resp = service.action(kind, id).await;
    if resp.success {
        tracing::info!(action = kind.verb(), %id, "user action succeeded");
        ActionOutcome {
            notice: Notice::success(kind.success_title(), kind.success_description()),
            reload: true,
        }
    } else {
        let message = resp.message_or(kind.failure_fallback());
        tracing::warn!(action = kind.verb(), %id, "user action rejected: {message}");
        ActionOutcome {
            notice: Notice::error("Error", message),
            reload: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend answered `success: false`. The dialog stays open.
    Rejected(Notice),
    /// The request itself failed. The dialog stays open.
    Failed(Notice),
    /// Saved. `user` is the record to put in the working set; `None` means
    /// the backend sent no data and the list should be reloaded.
    Saved {
        user: Option<UserRecord>,
        notice: Notice,
    },
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

pub async fn submit_create<S: UsersService>(service: &S, form: &UserForm) -> SubmitOutcome {
    let payload = match form.validate("") {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    match service.create(&payload).await {
        Ok(resp) if resp.success => {
            tracing::info!("user created");
            SubmitOutcome::Saved {
                user: resp.data,
                notice: Notice::success("User Created", "The user has been successfully created."),
            }
        }
        Ok(resp) => {
            let message = resp.message_or("Failed to create user");
            tracing::warn!("create rejected: {message}");
            SubmitOutcome::Rejected(Notice::error("Error", message))
        }
        Err(e) => {
            tracing::error!("error creating user: {e}");
            SubmitOutcome::Failed(Notice::error(
                "Error",
                "Something went wrong while creating the user.",
            ))
        }
    }
}

/// Validate and send an edit of `user`.
///
/// When the backend echoes no record, the payload is applied to `user` so the
/// working set can still be patched in place.
pub async fn submit_edit<S: UsersService>(
    service: &S,
    user: &UserRecord,
    form: &UserForm,
) -> SubmitOutcome {
    let payload = match form.validate(&user.code) {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    match service.update(&user.id, &payload).await {
        Ok(resp) if resp.success => {
            tracing::info!(id = %user.id, "user edited");
            let updated = resp.data.unwrap_or_else(|| {
                let mut local = user.clone();
                local.apply_payload(&payload);
                local
            });
            SubmitOutcome::Saved {
                user: Some(updated),
                notice: Notice::success("User Edited", "The user has been successfully edited."),
            }
        }
        Ok(resp) => {
            let message = resp.message_or("Failed to update user");
            tracing::warn!(id = %user.id, "update rejected: {message}");
            SubmitOutcome::Rejected(Notice::error("Error", message))
        }
        Err(e) => {
            tracing::error!(id = %user.id, "error updating user: {e}");
            SubmitOutcome::Failed(Notice::error(
                "Error",
                "Something went wrong while updating the user.",
            ))
        }
    }
}
