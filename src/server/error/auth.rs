use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned to every caller without a valid session.
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Authentication credentials were not provided.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks the group membership the action requires.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Message returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an unknown username or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with the endpoint's message
/// - `InvalidCredentials` → 400 Bad Request
///
/// All errors are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    message: NOT_AUTHENTICATED_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, message) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { message })).into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: "Unable to log in with provided credentials.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
