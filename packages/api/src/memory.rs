use std::sync::{Arc, Mutex, MutexGuard};

use store::{
    ActionKind, ActionResponse, ApiResponse, Sex, TableRow, UserPayload, UserRecord, UserStatus,
};

use crate::service::UsersService;
use crate::users::{ListQuery, SortOrder};
use crate::ApiError;

/// A request the in-memory backend received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(String),
    Action(ActionKind, String),
}

#[derive(Debug, Default)]
struct State {
    users: Vec<UserRecord>,
    next_id: i64,
    calls: Vec<Call>,
    /// Answer the next create/update/action with `success: false`.
    reject_next: Option<Option<String>>,
    offline: bool,
}

/// In-memory users backend for testing and offline mode.
#[derive(Clone, Debug, Default)]
pub struct MemoryUsersService {
    state: Arc<Mutex<State>>,
}

impl MemoryUsersService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let next_id = users.iter().filter_map(|u| u.user_id).max().unwrap_or(0);
        Self {
            state: Arc::new(Mutex::new(State {
                users,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// A handful of records so offline mode has something to show.
    pub fn seeded() -> Self {
        let seed = [
            ("Maria", Some("Clara"), "Santos", Sex::Female, "System Admin", false),
            ("Jose", None, "Rizal", Sex::Male, "Payroll Admin", false),
            ("Andres", None, "Bonifacio", Sex::Male, "Payroll Staff", true),
            ("Gabriela", None, "Silang", Sex::Female, "Accounting Staff", false),
        ];
        let users = seed
            .into_iter()
            .enumerate()
            .map(|(i, (first, middle, last, sex, role, archived))| {
                let n = i as i64 + 1;
                UserRecord {
                    id: format!("mem-{n}"),
                    user_id: Some(n),
                    code: format!("USR-{n:04}"),
                    first_name: first.to_string(),
                    middle_name: middle.map(str::to_string),
                    last_name: last.to_string(),
                    sex: Some(sex),
                    role: role.to_string(),
                    date_of_birth: "1990-01-01T00:00:00.000Z".to_string(),
                    email: Some(format!("{}@example.com", first.to_lowercase())),
                    phone_number: Some(format!("0917000000{n}")),
                    status: Some(if archived { UserStatus::Archived } else { UserStatus::Active }),
                    archived,
                    archived_at: None,
                }
            })
            .collect();
        Self::with_users(users)
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-call.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether `other` is a handle to the same records.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.state().users.clone()
    }

    /// Make the next mutating call answer `success: false` with `message`.
    pub fn reject_next(&self, message: Option<&str>) {
        self.state().reject_next = Some(message.map(str::to_string));
    }

    /// While offline every call fails as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    fn begin(&self, call: Call) -> Result<Option<Option<String>>, ApiError> {
        let mut state = self.state();
        state.calls.push(call.clone());
        if state.offline {
            return Err(ApiError::Unavailable("Network Error".to_string()));
        }
        if call == Call::List {
            return Ok(None);
        }
        Ok(state.reject_next.take())
    }
}

impl UsersService for MemoryUsersService {
    async fn list(&self, query: &ListQuery) -> Result<ApiResponse<Vec<UserRecord>>, ApiError> {
        self.begin(Call::List)?;
        let mut users = self.state().users.clone();
        if let Some(ref field) = query.sort_by {
            users.sort_by(|a, b| a.sort_key(field).cmp(&b.sort_key(field)));
            if query.sort_order == Some(SortOrder::Desc) {
                users.reverse();
            }
        }
        let limit = query.limit.max(1) as usize;
        let skip = (query.page.saturating_sub(1) as usize).saturating_mul(limit);
        Ok(ApiResponse::ok(users.into_iter().skip(skip).take(limit).collect()))
    }

    async fn create(&self, payload: &UserPayload) -> Result<ApiResponse<UserRecord>, ApiError> {
        if let Some(message) = self.begin(Call::Create)? {
            return Ok(rejected(message));
        }
        let mut state = self.state();
        state.next_id += 1;
        let n = state.next_id;
        let mut user = UserRecord {
            id: format!("mem-{n}"),
            user_id: Some(n),
            code: if payload.code.is_empty() {
                format!("USR-{n:04}")
            } else {
                payload.code.clone()
            },
            status: Some(UserStatus::Active),
            ..Default::default()
        };
        user.apply_payload(payload);
        state.users.push(user.clone());
        Ok(ApiResponse::ok(user))
    }

    async fn update(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<ApiResponse<UserRecord>, ApiError> {
        if let Some(message) = self.begin(Call::Update(id.to_string()))? {
            return Ok(rejected(message));
        }
        let mut state = self.state();
        match state.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.apply_payload(payload);
                Ok(ApiResponse::ok(user.clone()))
            }
            None => Ok(ApiResponse::failure("User not found")),
        }
    }

    async fn action(&self, kind: ActionKind, id: &str) -> ActionResponse {
        match self.begin(Call::Action(kind, id.to_string())) {
            Err(e) => {
                return ActionResponse::failure(
                    e.backend_message().unwrap_or(kind.failure_fallback()),
                )
            }
            Ok(Some(message)) => {
                return ActionResponse {
                    success: false,
                    message,
                }
            }
            Ok(None) => {}
        }

        let mut state = self.state();
        let Some(pos) = state.users.iter().position(|u| u.id == id) else {
            return ActionResponse::failure("User not found");
        };
        match kind {
            ActionKind::Archive => {
                let user = &mut state.users[pos];
                user.archived = true;
                user.status = Some(UserStatus::Archived);
            }
            ActionKind::Reactivate => {
                let user = &mut state.users[pos];
                user.archived = false;
                user.archived_at = None;
                user.status = Some(UserStatus::Active);
            }
            ActionKind::Delete => {
                state.users.remove(pos);
            }
        }
        ActionResponse::ok()
    }
}

fn rejected<T>(message: Option<String>) -> ApiResponse<T> {
    ApiResponse {
        success: false,
        data: None,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_paginates_and_sorts() {
        let service = MemoryUsersService::seeded();
        let page = service.list(&ListQuery::page(1, 3)).await.unwrap();
        assert_eq!(page.data.unwrap().len(), 3);

        let page = service.list(&ListQuery::page(2, 3)).await.unwrap();
        assert_eq!(page.data.unwrap().len(), 1);

        let sorted = service
            .list(&ListQuery::page(1, 50).sorted("FullName", SortOrder::Desc))
            .await
            .unwrap()
            .data
            .unwrap();
        assert_eq!(sorted[0].first_name, "Maria");
    }

    #[tokio::test]
    async fn test_list_far_page_is_empty() {
        let service = MemoryUsersService::seeded();
        let page = service.list(&ListQuery::page(u32::MAX, u32::MAX)).await.unwrap();
        assert!(page.success);
        assert_eq!(page.data.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let service = MemoryUsersService::seeded();
        let payload = UserPayload {
            code: String::new(),
            first_name: "Apolinario".to_string(),
            middle_name: None,
            last_name: "Mabini".to_string(),
            sex: Sex::Male,
            role: "System Admin".to_string(),
            date_of_birth: "1864-07-23T00:00:00.000Z".to_string(),
            email: "apolinario@example.com".to_string(),
            phone_number: "09170000005".to_string(),
        };
        let created = service.create(&payload).await.unwrap().data.unwrap();
        assert_eq!(created.id, "mem-5");
        assert_eq!(created.code, "USR-0005");
        assert_eq!(created.status, Some(UserStatus::Active));
        assert_eq!(service.users().len(), 5);
    }

    #[tokio::test]
    async fn test_archive_then_reactivate() {
        let service = MemoryUsersService::seeded();
        assert!(service.action(ActionKind::Archive, "mem-1").await.success);
        assert!(service.users()[0].archived);

        assert!(service.action(ActionKind::Reactivate, "mem-1").await.success);
        assert_eq!(service.users()[0].status, Some(UserStatus::Active));
    }

    #[tokio::test]
    async fn test_reject_next_applies_once() {
        let service = MemoryUsersService::seeded();
        service.reject_next(Some("Cannot archive an admin"));
        let resp = service.action(ActionKind::Archive, "mem-1").await;
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Cannot archive an admin"));
        assert!(!service.users()[0].archived);

        assert!(service.action(ActionKind::Archive, "mem-1").await.success);
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let service = MemoryUsersService::seeded();
        service.set_offline(true);
        assert!(matches!(
            service.list(&ListQuery::page(1, 50)).await,
            Err(ApiError::Unavailable(_))
        ));
        let resp = service.action(ActionKind::Delete, "mem-2").await;
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Failed to delete user"));
        assert_eq!(service.users().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let service = MemoryUsersService::new();
        let resp = service.action(ActionKind::Delete, "nope").await;
        assert_eq!(resp.message.as_deref(), Some("User not found"));
        assert_eq!(service.calls(), vec![Call::Action(ActionKind::Delete, "nope".to_string())]);
    }
}
