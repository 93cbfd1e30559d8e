//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The round-trip in between belongs to a `Transport`, keeping this type
//! deterministic and free of I/O dependencies.
//!
//! Any 2xx status counts as success, since backends differ on whether create
//! answers 200 or 201 and whether update/delete answer 200 or 204. Only 404
//! gets its own error. Update and delete never look at the body; the other
//! three decode it through one shared `decode` helper.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateUser, UpdateUser, User, UserId};

/// Synchronous, stateless client for the `/users` resource.
///
/// Identifiers are interpolated into paths with their `Display` form, so
/// numeric and string ids produce `/users/7` and `/users/ab-12`.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_user(&self, id: &UserId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/users", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_user(&self, id: &UserId, input: &UpdateUser) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/users/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_user(&self, id: &UserId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/users/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Decode the full list; order is kept as the server sent it.
    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The update response body is not consumed; only the status matters.
    pub fn parse_update_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Deserialize a success body, reporting failures as `DeserializationError`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn nil() -> UserId {
        Uuid::nil().into()
    }

    fn client() -> UserClient {
        UserClient::new("http://localhost:8000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const ADA: &str = r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Ada","email":"ada@example.com","dob":"1815-12-10"}"#;

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/users");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_user_produces_correct_request() {
        let req = client().build_get_user(&nil());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:8000/api/users/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_user_produces_correct_request() {
        let input = CreateUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            dob: "1815-12-10".to_string(),
            password: "hunter2".to_string(),
        };
        let req = client().build_create_user(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/users");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["dob"], "1815-12-10");
        assert_eq!(body["password"], "hunter2");
    }

    #[test]
    fn build_update_user_without_password_omits_it() {
        let input = UpdateUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            dob: "1815-12-10".to_string(),
            password: None,
        };
        let req = client().build_update_user(&nil(), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:8000/api/users/00000000-0000-0000-0000-000000000000"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ada");
        assert!(body.get("password").is_none());
    }

    #[test]
    fn numeric_ids_appear_bare_in_paths() {
        let req = client().build_delete_user(&UserId::Num(42));
        assert_eq!(req.path, "http://localhost:8000/api/users/42");
        let req = client().build_get_user(&UserId::Num(42));
        assert_eq!(req.path, "http://localhost:8000/api/users/42");
    }

    #[test]
    fn parse_list_users_accepts_integer_ids() {
        let body = r#"[{"id":1,"name":"Ada","email":"ada@example.com","dob":"1815-12-10"}]"#;
        let users = client().parse_list_users(response(200, body)).unwrap();
        assert_eq!(users[0].id, UserId::Num(1));
    }

    #[test]
    fn build_delete_user_produces_correct_request() {
        let req = client().build_delete_user(&nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_users_success() {
        let users = client().parse_list_users(response(200, &format!("[{ADA}]"))).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");
        assert!(users[0].password.is_none());
    }

    #[test]
    fn parse_get_user_not_found() {
        let err = client().parse_get_user(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_user_accepts_any_2xx() {
        let user = client().parse_create_user(response(201, ADA)).unwrap();
        assert_eq!(user.name, "Ada");
        let user = client().parse_create_user(response(200, ADA)).unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn parse_create_user_wrong_status() {
        let err = client().parse_create_user(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_user_ignores_body() {
        assert!(client().parse_update_user(response(200, "not json")).is_ok());
        assert!(client().parse_update_user(response(204, "")).is_ok());
    }

    #[test]
    fn parse_update_user_rejected() {
        let err = client().parse_update_user(response(422, "bad email")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
    }

    #[test]
    fn parse_delete_user_success() {
        assert!(client().parse_delete_user(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_user_not_found() {
        let err = client().parse_delete_user(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = UserClient::new("http://localhost:8000/api/");
        let req = client.build_list_users();
        assert_eq!(req.path, "http://localhost:8000/api/users");
    }

    #[test]
    fn parse_list_users_bad_json() {
        let err = client().parse_list_users(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
