//! Create/edit form state and its validation schema.
//!
//! [`UserForm`] mirrors the inputs of the user dialog as plain strings.
//! [`UserForm::validate`] checks every field and either produces the
//! [`UserPayload`] to submit or a [`FieldErrors`] map with one message per
//! failing field. Nothing is sent to the backend unless validation passes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::models::{Sex, UserPayload, UserRecord};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    MiddleName,
    LastName,
    Sex,
    Role,
    DateOfBirth,
    Email,
    PhoneNumber,
}

/// Validation messages keyed by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Raw dialog inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub sex: String,
    pub role: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
}

impl UserForm {
    /// Pre-fill the form from an existing record.
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone(),
            sex: user.sex.map(|s| s.label().to_string()).unwrap_or_default(),
            role: user.role.clone(),
            date_of_birth: date_for_input(&user.date_of_birth),
            email: user.email.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::MiddleName => self.middle_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Sex => self.sex = value,
            FormField::Role => self.role = value,
            FormField::DateOfBirth => self.date_of_birth = value,
            FormField::Email => self.email = value,
            FormField::PhoneNumber => self.phone_number = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::MiddleName => &self.middle_name,
            FormField::LastName => &self.last_name,
            FormField::Sex => &self.sex,
            FormField::Role => &self.role,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Email => &self.email,
            FormField::PhoneNumber => &self.phone_number,
        }
    }

    /// Check every field. On success returns the payload to submit.
    ///
    /// `code` is carried through unchanged (empty on create).
    pub fn validate(&self, code: &str) -> Result<UserPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.insert(FormField::FirstName, "First name is required");
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.insert(FormField::LastName, "Last name is required");
        }

        let sex = Sex::parse(self.sex.trim());
        if sex.is_none() {
            errors.insert(FormField::Sex, "Please select a sex");
        }

        let role = self.role.trim();
        if role.is_empty() {
            errors.insert(FormField::Role, "Please select a role");
        }

        let date_of_birth = self.date_of_birth.trim();
        let iso_date = if date_of_birth.is_empty() {
            errors.insert(FormField::DateOfBirth, "Date of Birth is required");
            None
        } else {
            let iso = date_to_iso(date_of_birth);
            if iso.is_none() {
                errors.insert(FormField::DateOfBirth, "Invalid date");
            }
            iso
        };

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.insert(FormField::Email, "Invalid email");
        }

        let phone = self.phone_number.trim();
        let phone_len = phone.chars().count();
        if phone_len < PHONE_MIN_LEN {
            errors.insert(FormField::PhoneNumber, "Phone number must be at least 10 digits");
        } else if phone_len > PHONE_MAX_LEN {
            errors.insert(FormField::PhoneNumber, "Phone number cannot exceed 11 digits");
        }

        match (sex, iso_date) {
            (Some(sex), Some(date_of_birth)) if errors.is_empty() => {
                let middle = self.middle_name.trim();
                Ok(UserPayload {
                    code: code.to_string(),
                    first_name: first_name.to_string(),
                    middle_name: (!middle.is_empty()).then(|| middle.to_string()),
                    last_name: last_name.to_string(),
                    sex,
                    role: role.to_string(),
                    date_of_birth,
                    email: email.to_string(),
                    phone_number: phone.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Reduce a backend timestamp to the `YYYY-MM-DD` a date input expects.
///
/// Returns an empty string for values that cannot be read as a date.
pub fn date_for_input(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// `YYYY-MM-DD` to midnight UTC in ISO-8601 with milliseconds.
pub fn date_to_iso(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            first_name: "Jose".to_string(),
            middle_name: String::new(),
            last_name: "Rizal".to_string(),
            sex: "Male".to_string(),
            role: "Payroll Staff".to_string(),
            date_of_birth: "1861-06-19".to_string(),
            email: "jose@example.com".to_string(),
            phone_number: "09171234567".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = valid_form().validate("EMP-9").unwrap();
        assert_eq!(payload.code, "EMP-9");
        assert_eq!(payload.first_name, "Jose");
        assert_eq!(payload.middle_name, None);
        assert_eq!(payload.sex, Sex::Male);
        assert_eq!(payload.date_of_birth, "1861-06-19T00:00:00.000Z");
    }

    #[test]
    fn test_required_names() {
        let mut form = valid_form();
        form.first_name = "  ".to_string();
        form.last_name = String::new();
        let errors = form.validate("").unwrap_err();
        assert_eq!(errors.get(FormField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(FormField::LastName), Some("Last name is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_email_rules() {
        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(
            form.validate("").unwrap_err().get(FormField::Email),
            Some("Email is required")
        );

        for bad in ["jose", "jose@", "jose@example", "jo se@example.com", "@example.com"] {
            form.email = bad.to_string();
            assert_eq!(
                form.validate("").unwrap_err().get(FormField::Email),
                Some("Invalid email"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        let mut form = valid_form();
        form.phone_number = "123456789".to_string();
        assert_eq!(
            form.validate("").unwrap_err().get(FormField::PhoneNumber),
            Some("Phone number must be at least 10 digits")
        );

        form.phone_number = "123456789012".to_string();
        assert_eq!(
            form.validate("").unwrap_err().get(FormField::PhoneNumber),
            Some("Phone number cannot exceed 11 digits")
        );

        for ok in ["1234567890", "12345678901"] {
            form.phone_number = ok.to_string();
            assert!(form.validate("").is_ok());
        }
    }

    #[test]
    fn test_sex_role_and_date_required() {
        let mut form = valid_form();
        form.sex = "Other".to_string();
        form.role = String::new();
        form.date_of_birth = String::new();
        let errors = form.validate("").unwrap_err();
        assert_eq!(errors.get(FormField::Sex), Some("Please select a sex"));
        assert_eq!(errors.get(FormField::Role), Some("Please select a role"));
        assert_eq!(errors.get(FormField::DateOfBirth), Some("Date of Birth is required"));

        form = valid_form();
        form.date_of_birth = "19-06-1861".to_string();
        assert_eq!(
            form.validate("").unwrap_err().get(FormField::DateOfBirth),
            Some("Invalid date")
        );
    }

    #[test]
    fn test_from_record_formats_date_for_input() {
        let user = UserRecord {
            id: "1".to_string(),
            first_name: "Jose".to_string(),
            last_name: "Rizal".to_string(),
            sex: Some(Sex::Male),
            date_of_birth: "1861-06-19T00:00:00.000Z".to_string(),
            ..Default::default()
        };
        let form = UserForm::from_record(&user);
        assert_eq!(form.date_of_birth, "1861-06-19");
        assert_eq!(form.sex, "Male");
        assert_eq!(form.email, "");
    }

    #[test]
    fn test_date_for_input_variants() {
        assert_eq!(date_for_input("2001-02-03"), "2001-02-03");
        assert_eq!(date_for_input("2001-02-03T10:11:12+08:00"), "2001-02-03");
        assert_eq!(date_for_input("not a date"), "");
        assert_eq!(date_for_input(""), "");
    }

    #[test]
    fn test_set_and_get_round_through_fields() {
        let mut form = UserForm::default();
        form.set(FormField::Email, "a@b.co".to_string());
        assert_eq!(form.get(FormField::Email), "a@b.co");
    }
}
