//! # API crate: users resource client for the admin console
//!
//! Everything the console knows about the backend lives here. The UI crates
//! never build requests themselves; they hold a [`Backend`] in context and go
//! through [`flows`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Shared `reqwest` client bound to the base address (`API_URL`) |
//! | [`users`] | One resource access function per `/users` endpoint |
//! | [`service`] | [`UsersService`] trait and the [`Backend`] enum the UI holds |
//! | [`memory`] | In-memory [`UsersService`] for tests and offline mode |
//! | [`flows`] | Validation, submission and action rules producing toasts |
//! | [`error`] | [`ApiError`] |
//!
//! ## Error handling
//!
//! List, create and update return `Result<_, ApiError>`. Archive, reactivate
//! and delete never fail: transport errors are folded into an
//! [`ActionResponse`] with `success: false`.

pub mod client;
pub mod error;
pub mod flows;
pub mod memory;
pub mod service;
pub mod users;

pub use client::{api_url_from_env, ApiClient, API_URL_VAR};
pub use error::ApiError;
pub use flows::{
    load_users, run_action, submit_create, submit_edit, ActionOutcome, Notice, NoticeLevel,
    SubmitOutcome,
};
pub use memory::{Call, MemoryUsersService};
pub use service::{Backend, UsersService};
pub use users::{
    archive_user, create_user, delete_user, list_users, reactivate_user, update_user, ListQuery,
    SortOrder,
};

pub use store::{ActionResponse, ApiResponse, UserPayload, UserRecord};
