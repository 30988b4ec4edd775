//! Client-side search over the loaded users.
//!
//! The search term is matched literally and case-insensitively against a
//! user's full name and against their code. Regex metacharacters in the term
//! are escaped, so typing `(` or `.*` searches for those characters instead of
//! changing the match.

use regex::{Regex, RegexBuilder};

use crate::models::{UserRecord, UserStatus};

/// A compiled search term.
#[derive(Clone, Debug)]
pub struct SearchFilter {
    pattern: Option<Regex>,
}

impl SearchFilter {
    /// Build a filter from the raw term typed by the user.
    ///
    /// Only an empty term matches every user. Whitespace is part of the term.
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self { pattern: None };
        }
        // Only the regex size limit can fail here; treat that as "match all".
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        let Some(ref pattern) = self.pattern else {
            return true;
        };
        pattern.is_match(&user.full_name()) || pattern.is_match(&user.code)
    }
}

/// The status dropdown next to the search box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Archived];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All users",
            StatusFilter::Active => "Active",
            StatusFilter::Archived => "Archived",
        }
    }

    /// Value used in the `<select>` element.
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Archived => "archived",
        }
    }

    pub fn from_value(value: &str) -> Self {
        StatusFilter::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => {
                !user.archived && matches!(user.status, Some(UserStatus::Active) | None)
            }
            StatusFilter::Archived => {
                user.archived || user.status == Some(UserStatus::Archived)
            }
        }
    }
}

/// Apply both filters, preserving the input order.
pub fn filter_users(users: &[UserRecord], term: &str, status: StatusFilter) -> Vec<UserRecord> {
    let search = SearchFilter::new(term);
    users
        .iter()
        .filter(|u| search.matches(u) && status.matches(u))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, first: &str, middle: Option<&str>, last: &str, code: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            code: code.to_string(),
            first_name: first.to_string(),
            middle_name: middle.map(str::to_string),
            last_name: last.to_string(),
            status: Some(UserStatus::Active),
            ..Default::default()
        }
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user("1", "Maria", Some("Clara"), "Santos", "EMP-001"),
            user("2", "Jose", None, "Rizal", "EMP-002"),
            user("3", "Andres", None, "Bonifacio (Jr)", "ADM-100"),
        ]
    }

    fn ids(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_empty_term_matches_all() {
        let users = sample();
        assert_eq!(filter_users(&users, "", StatusFilter::All).len(), 3);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_term() {
        let users = vec![
            user("1", "Jose", None, "Rizal", "EMP-001"),
            user("2", "Rita", None, "Cruz", "EMP-002"),
        ];
        assert_eq!(ids(&filter_users(&users, " ri", StatusFilter::All)), vec!["1"]);
        assert_eq!(ids(&filter_users(&users, "ri", StatusFilter::All)), vec!["1", "2"]);
        assert!(filter_users(&users, "  ", StatusFilter::All).is_empty());
        assert!(filter_users(&users, "cruz ", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_case_insensitive_substring_over_full_name() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "maria", StatusFilter::All)), vec!["1"]);
        assert_eq!(ids(&filter_users(&users, "CLARA SAN", StatusFilter::All)), vec!["1"]);
        assert_eq!(ids(&filter_users(&users, "se ri", StatusFilter::All)), vec!["2"]);
    }

    #[test]
    fn test_matches_code() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "emp-00", StatusFilter::All)), vec!["1", "2"]);
        assert_eq!(ids(&filter_users(&users, "adm", StatusFilter::All)), vec!["3"]);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "(jr", StatusFilter::All)), vec!["3"]);
        assert!(filter_users(&users, ".*", StatusFilter::All).is_empty());
        assert!(filter_users(&users, "[", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_missing_middle_name_does_not_break_adjacent_match() {
        let users = sample();
        // "Jose Rizal", not "Jose  Rizal"
        assert_eq!(ids(&filter_users(&users, "jose rizal", StatusFilter::All)), vec!["2"]);
    }

    #[test]
    fn test_status_filter() {
        let mut users = sample();
        users[1].archived = true;
        users[1].status = Some(UserStatus::Archived);
        users[2].status = None;

        assert_eq!(ids(&filter_users(&users, "", StatusFilter::Active)), vec!["1", "3"]);
        assert_eq!(ids(&filter_users(&users, "", StatusFilter::Archived)), vec!["2"]);
    }

    #[test]
    fn test_status_filter_from_value() {
        assert_eq!(StatusFilter::from_value("archived"), StatusFilter::Archived);
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
    }
}
