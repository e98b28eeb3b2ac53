// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token middleware.
//!
//! The frontend forwards the athlete's Strava access token on every request.
//! This middleware only checks that one is present and hands it to the
//! handlers; Strava itself decides whether it is valid.

use crate::error::AppError;
use axum::{extract::Request, http::header, middleware::Next, response::Response};
use std::fmt;

/// Strava access token taken from the `Authorization` header.
#[derive(Clone)]
pub struct StravaToken(String);

impl StravaToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StravaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StravaToken(<redacted>)")
    }
}

/// Extract a non-empty bearer token from an `Authorization` header value.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware that requires a bearer token.
pub async fn require_strava_token(mut request: Request, next: Next) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_bearer)
        .map(|t| StravaToken(t.to_string()))
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(token);

    Ok(next.run(request).await)
}
