//! The users page's working set.
//!
//! [`UserList`] holds the records of the last list fetch. A fetch replaces
//! it wholesale; create appends and edit patches in place by identifier.
//! There is no reconciliation with the backend beyond the next full reload.

use crate::filter::{filter_users, StatusFilter};
use crate::models::{UserRecord, UserStatus};
use crate::table::{SortKey, TableRow};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserList {
    users: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserList {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            loading: false,
            error: None,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the working set with a fresh fetch.
    pub fn replace(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn append(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Merge `updated` into the record with the same identifier.
    ///
    /// Returns `false` when no record matched; nothing changes in that case.
    pub fn patch(&mut self, updated: UserRecord) -> bool {
        match self.users.iter_mut().find(|u| u.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn filtered(&self, term: &str, status: StatusFilter) -> Vec<UserRecord> {
        filter_users(&self.users, term, status)
    }
}

/// A destructive row action gated by the confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Archive,
    Reactivate,
    Delete,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Archive => "Archive",
            ActionKind::Reactivate => "Reactivate",
            ActionKind::Delete => "Delete",
        }
    }

    /// Lowercase verb for the dialog prompt.
    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Archive => "archive",
            ActionKind::Reactivate => "reactivate",
            ActionKind::Delete => "delete",
        }
    }

    /// Class suffix selecting the confirm button color.
    pub fn tone(&self) -> &'static str {
        match self {
            ActionKind::Archive => "warning",
            ActionKind::Reactivate => "success",
            ActionKind::Delete => "danger",
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self {
            ActionKind::Archive => "Archived!",
            ActionKind::Reactivate => "Reactivated!",
            ActionKind::Delete => "Deleted!",
        }
    }

    pub fn success_description(&self) -> &'static str {
        match self {
            ActionKind::Archive => "The user has been successfully archived.",
            ActionKind::Reactivate => "The user has been successfully reactivated.",
            ActionKind::Delete => "The user has been successfully deleted.",
        }
    }

    /// Shown when the backend reports failure without a message.
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            ActionKind::Archive => "Failed to archive user",
            ActionKind::Reactivate => "Failed to reactivate user",
            ActionKind::Delete => "Failed to delete user",
        }
    }

    /// Archive and reactivate are offered exclusively, by archived flag.
    pub fn soft_action_for(user: &UserRecord) -> ActionKind {
        if user.archived {
            ActionKind::Reactivate
        } else {
            ActionKind::Archive
        }
    }
}

/// A column of the users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
}

pub const USER_COLUMNS: [ColumnDef; 9] = [
    ColumnDef { id: "UserId", header: "ID", sortable: true },
    ColumnDef { id: "UserCode", header: "Code", sortable: true },
    ColumnDef { id: "FullName", header: "Full Name", sortable: true },
    ColumnDef { id: "Sex", header: "Sex", sortable: true },
    ColumnDef { id: "Role", header: "Role", sortable: true },
    ColumnDef { id: "Email", header: "Email", sortable: true },
    ColumnDef { id: "PhoneNumber", header: "Phone", sortable: false },
    ColumnDef { id: "Status", header: "Status", sortable: true },
    ColumnDef { id: "actions", header: "", sortable: false },
];

impl TableRow for UserRecord {
    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "UserId" => self.user_id.map(SortKey::Number),
            "UserCode" => Some(SortKey::text(&self.code)),
            "FullName" => Some(SortKey::text(&self.full_name())),
            "Sex" => self.sex.map(|s| SortKey::text(s.label())),
            "Role" => Some(SortKey::text(&self.role)),
            "Email" => self.email.as_deref().map(SortKey::text),
            "PhoneNumber" => self.phone_number.as_deref().map(SortKey::text),
            "Status" => self.status.as_ref().map(|s| SortKey::text(s.label())),
            _ => None,
        }
    }
}

/// Badge tone for a status cell.
pub fn status_tone(status: Option<UserStatus>) -> &'static str {
    match status {
        Some(UserStatus::Active) => "success",
        Some(UserStatus::Inactive) | Some(UserStatus::Archived) => "warning",
        Some(UserStatus::Suspended) => "destructive",
        None => "outline",
    }
}
