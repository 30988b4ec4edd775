//! # Domain models for user records
//!
//! Defines the data structures exchanged with the users REST backend. These
//! types are `Serialize + Deserialize` and use the backend's PascalCase field
//! names, so a record fetched from `GET /users` can be handed straight to the
//! UI and sent back on update without a separate DTO layer.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | One user as returned by the backend. Identifier, display code, name parts, sex, role label, date of birth, contact details, lifecycle status and archive flags. |
//! | [`UserPayload`] | The mutable subset sent on create (`POST /users`) and update (`PATCH /users/{id}`). |
//! | [`ApiResponse`] | The `{success, data?, message?}` envelope every endpoint answers with. |
//! | [`UserStatus`] | Lifecycle status: `Active`, `Inactive`, `Archived`, `Suspended`. |
//! | [`Sex`] | The enumerated sex values accepted by the form schema. |
//! | [`RoleOption`] | A selectable role: backend role id plus the label stored on the record. |

use serde::{Deserialize, Serialize};

/// A user record as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend identifier, used in every `/users/{id}` path.
    #[serde(rename = "_id")]
    pub id: String,
    /// Numeric id shown in the table's ID column.
    #[serde(rename = "UserId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "UserCode", default)]
    pub code: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "MiddleName", default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Sex", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(rename = "Role", default)]
    pub role: String,
    /// ISO-8601 timestamp, e.g. `"1990-04-12T00:00:00.000Z"`.
    #[serde(rename = "DateOfBirth", default)]
    pub date_of_birth: String,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "PhoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(rename = "Archived", default)]
    pub archived: bool,
    #[serde(rename = "ArchivedAt", default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
}

impl UserRecord {
    /// First, middle and last name joined by single spaces.
    ///
    /// A missing middle name does not leave a double space behind.
    pub fn full_name(&self) -> String {
        let middle = self.middle_name.as_deref().unwrap_or("");
        format!("{} {} {}", self.first_name, middle, self.last_name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "First Last", used in dialogs and toasts.
    pub fn short_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Up to two uppercase initials for the avatar.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Overwrite the mutable fields with the values of `payload`.
    ///
    /// Identifier, code, status and archive flags are left untouched.
    pub fn apply_payload(&mut self, payload: &UserPayload) {
        self.first_name = payload.first_name.clone();
        self.middle_name = payload.middle_name.clone().filter(|m| !m.is_empty());
        self.last_name = payload.last_name.clone();
        self.sex = Some(payload.sex);
        self.role = payload.role.clone();
        self.date_of_birth = payload.date_of_birth.clone();
        self.email = Some(payload.email.clone());
        self.phone_number = Some(payload.phone_number.clone());
    }
}

/// The mutable fields of a user, sent on create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "UserCode", default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "MiddleName", default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
}

/// Response envelope shared by every users endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The backend message, or `fallback` when none was sent.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Response for archive, reactivate and delete. Any `data` the backend sends
/// along is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Lifecycle status of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Archived,
    Suspended,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Archived => "Archived",
            UserStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn parse(s: &str) -> Option<Sex> {
        Sex::ALL.into_iter().find(|sex| sex.label() == s)
    }
}

/// A role the form can assign. The record stores `label`; `id` is what the
/// navigation metadata filters on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleOption {
    pub id: u8,
    pub label: &'static str,
}

pub const ROLE_OPTIONS: [RoleOption; 4] = [
    RoleOption { id: 1, label: "System Admin" },
    RoleOption { id: 3, label: "Payroll Admin" },
    RoleOption { id: 4, label: "Payroll Staff" },
    RoleOption { id: 5, label: "Accounting Staff" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: "65f0a1".to_string(),
            user_id: Some(7),
            code: "EMP-007".to_string(),
            first_name: "Ada".to_string(),
            middle_name: None,
            last_name: "Lovelace".to_string(),
            sex: Some(Sex::Female),
            role: "System Admin".to_string(),
            date_of_birth: "1815-12-10T00:00:00.000Z".to_string(),
            email: Some("ada@example.com".to_string()),
            phone_number: Some("09171234567".to_string()),
            status: Some(UserStatus::Active),
            archived: false,
            archived_at: None,
        }
    }

    #[test]
    fn test_full_name_collapses_missing_middle_name() {
        let mut user = record();
        assert_eq!(user.full_name(), "Ada Lovelace");

        user.middle_name = Some("King".to_string());
        assert_eq!(user.full_name(), "Ada King Lovelace");
    }

    #[test]
    fn test_initials() {
        assert_eq!(record().initials(), "AL");
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "_id": "abc123",
            "UserId": 12,
            "UserCode": "U-12",
            "FirstName": "Grace",
            "MiddleName": "Brewster",
            "LastName": "Hopper",
            "Sex": "Female",
            "Role": "Payroll Admin",
            "DateOfBirth": "1906-12-09T00:00:00.000Z",
            "Email": "grace@example.com",
            "PhoneNumber": "0917000000",
            "Status": "Archived",
            "Archived": true,
            "ArchivedAt": "2024-01-01T10:00:00.000Z"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.user_id, Some(12));
        assert_eq!(user.status, Some(UserStatus::Archived));
        assert!(user.archived);
        assert_eq!(user.full_name(), "Grace Brewster Hopper");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"_id": "x", "FirstName": "A", "LastName": "B"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert!(user.status.is_none());
        assert!(!user.archived);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_action_response_ignores_data() {
        let json = r#"{"success": false, "message": "User not found", "data": {"x": 1}}"#;
        let resp: ActionResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message_or("fallback"), "User not found");
    }

    #[test]
    fn test_message_or_falls_back_on_blank_message() {
        let resp: ApiResponse<()> = ApiResponse {
            success: false,
            data: None,
            message: Some("  ".to_string()),
        };
        assert_eq!(resp.message_or("Failed to archive user"), "Failed to archive user");
    }

    #[test]
    fn test_apply_payload_keeps_identity_and_status() {
        let mut user = record();
        let payload = UserPayload {
            code: String::new(),
            first_name: "Augusta".to_string(),
            middle_name: Some(String::new()),
            last_name: "King".to_string(),
            sex: Sex::Female,
            role: "Payroll Staff".to_string(),
            date_of_birth: "1815-12-10T00:00:00.000Z".to_string(),
            email: "augusta@example.com".to_string(),
            phone_number: "0917123456".to_string(),
        };
        user.apply_payload(&payload);

        assert_eq!(user.id, "65f0a1");
        assert_eq!(user.code, "EMP-007");
        assert_eq!(user.status, Some(UserStatus::Active));
        assert_eq!(user.first_name, "Augusta");
        assert!(user.middle_name.is_none());
        assert_eq!(user.email.as_deref(), Some("augusta@example.com"));
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!(Sex::parse("Male"), Some(Sex::Male));
        assert_eq!(Sex::parse("male"), None);
        assert_eq!(Sex::parse(""), None);
    }
}
