//! Error types for the users API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `Transport` covers failures before a
//! response exists at all (connection refused, DNS, broken pipe).

/// Errors returned by `UserClient` parse methods and `Transport` impls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the requested user does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
}
