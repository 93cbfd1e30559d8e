//! One-call operations over a `Transport`.
//!
//! Each method is `build_*` → `Transport::execute` → `parse_*` with nothing
//! in between: no retry, no timeout policy, no transformation of the decoded
//! body. Errors reach the caller unchanged.

use tracing::debug;

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{CreateUser, UpdateUser, User, UserId};

/// The users API bound to a base URL and a transport.
#[derive(Debug, Clone)]
pub struct UsersApi<T> {
    client: UserClient,
    transport: T,
}

impl<T: Transport> UsersApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: UserClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &UserClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.send(self.client.build_list_users())?;
        self.client.parse_list_users(response)
    }

    pub fn create_user(&self, input: &CreateUser) -> Result<User, ApiError> {
        let response = self.send(self.client.build_create_user(input)?)?;
        self.client.parse_create_user(response)
    }

    pub fn get_user(&self, id: &UserId) -> Result<User, ApiError> {
        let response = self.send(self.client.build_get_user(id))?;
        self.client.parse_get_user(response)
    }

    pub fn update_user(&self, id: &UserId, input: &UpdateUser) -> Result<(), ApiError> {
        let response = self.send(self.client.build_update_user(id, input)?)?;
        self.client.parse_update_user(response)
    }

    pub fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_user(id))?;
        self.client.parse_delete_user(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
