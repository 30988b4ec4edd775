//! Resource access functions for `/users`.
//!
//! One function per backend operation, each issuing exactly one request.
//!
//! | Function | Request | Errors |
//! |----------|---------|--------|
//! | [`list_users`] | `GET /users?page&limit&sortBy&sortOrder` | propagated |
//! | [`create_user`] | `POST /users` | propagated |
//! | [`update_user`] | `PATCH /users/{id}` | propagated |
//! | [`archive_user`] | `PATCH /users/archive/{id}` | normalized |
//! | [`reactivate_user`] | `PATCH /users/reactivate/{id}` | normalized |
//! | [`delete_user`] | `DELETE /users/hard/{id}` | normalized |
//!
//! "Normalized" means any failure is folded into an [`ActionResponse`] with
//! `success: false` and a message, so callers only ever inspect the flag.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{ActionKind, ActionResponse, ApiResponse, UserPayload, UserRecord};

use crate::{ApiClient, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters of a list request.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            sort_by: None,
            sort_order: None,
        }
    }

    pub fn sorted(mut self, field: &str, order: SortOrder) -> Self {
        self.sort_by = Some(field.to_string());
        self.sort_order = Some(order);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(ref field) = self.sort_by {
            params.push(("sortBy", field.clone()));
        }
        if let Some(order) = self.sort_order {
            params.push(("sortOrder", order.as_str().to_string()));
        }
        params
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub(crate) fn list_request(client: &ApiClient, query: &ListQuery) -> RequestBuilder {
    client.request(Method::GET, "/users").query(&query.params())
}

pub(crate) fn create_request(client: &ApiClient, payload: &UserPayload) -> RequestBuilder {
    client.request(Method::POST, "/users").json(payload)
}

pub(crate) fn update_request(client: &ApiClient, id: &str, payload: &UserPayload) -> RequestBuilder {
    client.request(Method::PATCH, &format!("/users/{id}")).json(payload)
}

pub(crate) fn action_request(client: &ApiClient, kind: ActionKind, id: &str) -> RequestBuilder {
    match kind {
        ActionKind::Archive => client.request(Method::PATCH, &format!("/users/archive/{id}")),
        ActionKind::Reactivate => client.request(Method::PATCH, &format!("/users/reactivate/{id}")),
        ActionKind::Delete => client.request(Method::DELETE, &format!("/users/hard/{id}")),
    }
}

/// Fetch one page of users.
pub async fn list_users(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<ApiResponse<Vec<UserRecord>>, ApiError> {
    let response = list_request(client, query).send().await?;
    let body: ApiResponse<Vec<UserRecord>> = decode(response).await?;
    tracing::info!(
        count = body.data.as_ref().map_or(0, Vec::len),
        success = body.success,
        "listed users"
    );
    Ok(body)
}

pub async fn create_user(
    client: &ApiClient,
    payload: &UserPayload,
) -> Result<ApiResponse<UserRecord>, ApiError> {
    let response = create_request(client, payload).send().await?;
    decode(response).await
}

/// Send the editable fields of user `id`.
pub async fn update_user(
    client: &ApiClient,
    id: &str,
    payload: &UserPayload,
) -> Result<ApiResponse<UserRecord>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingId);
    }
    let response = update_request(client, id, payload).send().await?;
    decode(response).await
}

pub async fn archive_user(client: &ApiClient, id: &str) -> ActionResponse {
    user_action(client, ActionKind::Archive, id).await
}

pub async fn reactivate_user(client: &ApiClient, id: &str) -> ActionResponse {
    user_action(client, ActionKind::Reactivate, id).await
}

pub async fn delete_user(client: &ApiClient, id: &str) -> ActionResponse {
    user_action(client, ActionKind::Delete, id).await
}

/// Issue one archive/reactivate/delete call and fold every failure into the
/// response shape.
pub async fn user_action(client: &ApiClient, kind: ActionKind, id: &str) -> ActionResponse {
    if id.trim().is_empty() {
        return ActionResponse::failure("User id is required.");
    }
    let result: Result<ActionResponse, ApiError> = async {
        let response = action_request(client, kind, id).send().await?;
        decode::<ActionResponse>(response).await
    }
    .await;

    match result {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(action = kind.verb(), %id, "error on user action: {e}");
            ActionResponse::failure(
                e.backend_message()
                    .unwrap_or(kind.failure_fallback())
                    .to_string(),
            )
        }
    }
}

/// Turn a non-2xx status into [`ApiError::Status`], otherwise decode the body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Sex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> ApiClient {
        ApiClient::new("http://backend.test/api").unwrap()
    }

    /// Nothing listens on port 1.
    fn unreachable_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:1/api").unwrap()
    }

    /// Serve a single canned response on a local port and return a client for it.
    async fn one_shot_backend(status: &'static str, body: &'static str) -> ApiClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        ApiClient::new(&format!("http://{addr}/api")).unwrap()
    }

    fn payload() -> UserPayload {
        UserPayload {
            code: "EMP-1".to_string(),
            first_name: "Ana".to_string(),
            middle_name: None,
            last_name: "Cruz".to_string(),
            sex: Sex::Female,
            role: "Payroll Admin".to_string(),
            date_of_birth: "1990-01-01T00:00:00.000Z".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "09171234567".to_string(),
        }
    }

    #[test]
    fn test_list_request_query() {
        let query = ListQuery::page(1, 50).sorted("LastName", SortOrder::Desc);
        let request = list_request(&client(), &query).build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://backend.test/api/users?page=1&limit=50&sortBy=LastName&sortOrder=desc"
        );
    }

    #[test]
    fn test_list_request_without_sort() {
        let request = list_request(&client(), &ListQuery::page(2, 10)).build().unwrap();
        assert_eq!(request.url().query(), Some("page=2&limit=10"));
    }

    #[test]
    fn test_create_request_body() {
        let request = create_request(&client(), &payload()).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/users");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["FirstName"], "Ana");
        assert_eq!(json["Sex"], "Female");
        assert!(json.get("MiddleName").is_none());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_update_request_path() {
        let request = update_request(&client(), "65f0", &payload()).build().unwrap();
        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().path(), "/api/users/65f0");
    }

    #[test]
    fn test_action_request_paths() {
        let c = client();
        let archive = action_request(&c, ActionKind::Archive, "42").build().unwrap();
        assert_eq!((archive.method().clone(), archive.url().path()), (Method::PATCH, "/api/users/archive/42"));

        let reactivate = action_request(&c, ActionKind::Reactivate, "42").build().unwrap();
        assert_eq!(reactivate.url().path(), "/api/users/reactivate/42");

        let delete = action_request(&c, ActionKind::Delete, "42").build().unwrap();
        assert_eq!((delete.method().clone(), delete.url().path()), (Method::DELETE, "/api/users/hard/42"));
    }

    #[tokio::test]
    async fn test_action_with_blank_id_is_normalized() {
        let response = delete_user(&client(), " ").await;
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("User id is required."));
    }

    #[tokio::test]
    async fn test_update_with_blank_id_errors() {
        let err = update_user(&client(), "", &payload()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }

    #[tokio::test]
    async fn test_unreachable_backend_uses_action_fallback() {
        let c = unreachable_client();

        let archived = archive_user(&c, "42").await;
        assert!(!archived.success);
        assert_eq!(archived.message.as_deref(), Some("Failed to archive user"));

        let reactivated = reactivate_user(&c, "42").await;
        assert_eq!(reactivated.message.as_deref(), Some("Failed to reactivate user"));

        let deleted = delete_user(&c, "42").await;
        assert_eq!(deleted.message.as_deref(), Some("Failed to delete user"));
    }

    #[tokio::test]
    async fn test_error_status_keeps_backend_message() {
        let c = one_shot_backend("404 Not Found", r#"{"message":"User not found"}"#).await;
        let response = archive_user(&c, "42").await;
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_error_status_without_message_uses_fallback() {
        let c = one_shot_backend("500 Internal Server Error", "oops").await;
        let response = delete_user(&c, "42").await;
        assert_eq!(response.message.as_deref(), Some("Failed to delete user"));
    }

    #[tokio::test]
    async fn test_action_success_body_is_returned() {
        let c = one_shot_backend("200 OK", r#"{"success":true,"message":"Archived"}"#).await;
        let response = archive_user(&c, "42").await;
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Archived"));
    }

    #[tokio::test]
    async fn test_list_propagates_transport_error() {
        let result = list_users(&unreachable_client(), &ListQuery::page(1, 50)).await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }

    #[tokio::test]
    async fn test_list_propagates_error_status() {
        let c = one_shot_backend("503 Service Unavailable", r#"{"message":"down"}"#).await;
        let err = list_users(&c, &ListQuery::page(1, 50)).await.unwrap_err();
        assert_eq!(err.backend_message(), Some("down"));
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }
}
