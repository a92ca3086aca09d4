//! Authentication middleware
//!
//! Extracts the acting user from the JWT and hands it to handlers as an
//! explicit request extension. Core operations receive this actor context as
//! an argument; there is no ambient current-user state anywhere.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Role,
    services::AuthService,
    state::AppState,
};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Gate an action on the actor's role. The error carries the actor's
    /// role so the response can redirect them to their own dashboard.
    pub fn require_role(&self, required: Role) -> AppResult<()> {
        if self.role == required {
            Ok(())
        } else {
            Err(AppError::AccessDenied(self.role))
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let uri = request.uri().clone();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %uri.path(), "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    if !auth_header.starts_with("Bearer ") {
        debug!(path = %uri.path(), "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    }

    let token = &auth_header[7..];

    let claims = match AuthService::verify_token(token, &state.config().jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(path = %uri.path(), error = ?e, "Auth failed: Token verification failed");
            return Err(e);
        }
    };

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        debug!(path = %uri.path(), sub = %claims.sub, error = ?e, "Auth failed: Invalid user ID in token");
        AppError::InvalidToken
    })?;

    let user = AuthenticatedUser {
        id: user_id,
        name: claims.name.clone(),
        role: claims.role,
    };

    debug!(path = %uri.path(), user_id = %user_id, name = %user.name, role = %user.role, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
