//! Identity handed over by the upstream authentication gateway.
//!
//! Credential checks and sessions happen before a request reaches this service; handlers only
//! see the opaque user identifier the gateway forwards in a trusted header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::assessment::UserId;
use crate::config::IdentityConfig;

/// Extractor yielding the caller's user id. Reads the header named by an
/// `Extension<IdentityConfig>` layer, or `x-user-id` when none is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("authentication required")]
    Missing,
    #[error("user identity header is not valid text")]
    Malformed,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .extensions
            .get::<IdentityConfig>()
            .map(|config| config.user_header.clone())
            .unwrap_or_else(|| IdentityConfig::default().user_header);

        let value = parts
            .headers
            .get(&header)
            .ok_or(IdentityRejection::Missing)?
            .to_str()
            .map_err(|_| IdentityRejection::Malformed)?
            .trim();

        if value.is_empty() {
            return Err(IdentityRejection::Missing);
        }

        Ok(Self(UserId(value.to_string())))
    }
}
