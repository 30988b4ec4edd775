//! The seam between the users page and whatever serves `/users`.
//!
//! [`UsersService`] is implemented by [`ApiClient`] (the REST backend) and by
//! [`MemoryUsersService`] (tests and offline mode). [`Backend`] picks one at
//! startup so the UI can hold a single concrete type in context.

use std::future::Future;

use store::{ActionKind, ActionResponse, AdminConfig, ApiResponse, UserPayload, UserRecord};

use crate::users::{self, ListQuery};
use crate::{ApiClient, ApiError, MemoryUsersService};

/// Async interface over the users resource.
///
/// Archive, reactivate and delete never fail: errors are folded into the
/// returned [`ActionResponse`].
pub trait UsersService {
    fn list(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ApiResponse<Vec<UserRecord>>, ApiError>>;
    fn create(
        &self,
        payload: &UserPayload,
    ) -> impl Future<Output = Result<ApiResponse<UserRecord>, ApiError>>;
    fn update(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> impl Future<Output = Result<ApiResponse<UserRecord>, ApiError>>;
    fn action(&self, kind: ActionKind, id: &str) -> impl Future<Output = ActionResponse>;
}

impl UsersService for ApiClient {
    async fn list(&self, query: &ListQuery) -> Result<ApiResponse<Vec<UserRecord>>, ApiError> {
        users::list_users(self, query).await
    }

    async fn create(&self, payload: &UserPayload) -> Result<ApiResponse<UserRecord>, ApiError> {
        users::create_user(self, payload).await
    }

    async fn update(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<ApiResponse<UserRecord>, ApiError> {
        users::update_user(self, id, payload).await
    }

    async fn action(&self, kind: ActionKind, id: &str) -> ActionResponse {
        users::user_action(self, kind, id).await
    }
}

#[derive(Clone, Debug)]
pub enum Backend {
    Http(ApiClient),
    Memory(MemoryUsersService),
}

/// Two backends are equal when they talk to the same base address or share
/// the same in-memory store.
impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Backend::Http(a), Backend::Http(b)) => a.base_url() == b.base_url(),
            (Backend::Memory(a), Backend::Memory(b)) => a.same_store(b),
            _ => false,
        }
    }
}

impl Backend {
    /// Pick the backend described by `config`.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ApiError> {
        if config.api.offline {
            tracing::info!("using in-memory users backend");
            return Ok(Backend::Memory(MemoryUsersService::seeded()));
        }
        tracing::info!(base_url = %config.api.base_url, "using users backend");
        Ok(Backend::Http(ApiClient::new(&config.api.base_url)?))
    }
}

impl UsersService for Backend {
    async fn list(&self, query: &ListQuery) -> Result<ApiResponse<Vec<UserRecord>>, ApiError> {
        match self {
            Backend::Http(client) => client.list(query).await,
            Backend::Memory(memory) => memory.list(query).await,
        }
    }

    async fn create(&self, payload: &UserPayload) -> Result<ApiResponse<UserRecord>, ApiError> {
        match self {
            Backend::Http(client) => client.create(payload).await,
            Backend::Memory(memory) => memory.create(payload).await,
        }
    }

    async fn update(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> Result<ApiResponse<UserRecord>, ApiError> {
        match self {
            Backend::Http(client) => client.update(id, payload).await,
            Backend::Memory(memory) => memory.update(id, payload).await,
        }
    }

    async fn action(&self, kind: ActionKind, id: &str) -> ActionResponse {
        match self {
            Backend::Http(client) => client.action(kind, id).await,
            Backend::Memory(memory) => memory.action(kind, id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_config() {
        let config = AdminConfig::default();
        assert!(matches!(Backend::from_config(&config), Ok(Backend::Http(_))));

        let mut offline = AdminConfig::default();
        offline.api.offline = true;
        assert!(matches!(Backend::from_config(&offline), Ok(Backend::Memory(_))));
    }

    #[test]
    fn test_backend_equality() {
        let memory = MemoryUsersService::seeded();
        assert_eq!(Backend::Memory(memory.clone()), Backend::Memory(memory));
        assert_ne!(
            Backend::Memory(MemoryUsersService::seeded()),
            Backend::Memory(MemoryUsersService::seeded())
        );

        let a = Backend::Http(ApiClient::new("http://localhost:3000/api").unwrap());
        let b = Backend::Http(ApiClient::new("http://localhost:3000/api/").unwrap());
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_memory_backend_dispatch() {
        let backend = Backend::Memory(MemoryUsersService::seeded());
        let resp = backend.list(&ListQuery::page(1, 50)).await.unwrap();
        assert_eq!(resp.data.map(|d| d.len()), Some(4));
        assert!(backend.action(ActionKind::Archive, "mem-2").await.success);
    }
}
