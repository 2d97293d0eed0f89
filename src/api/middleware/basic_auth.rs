//! Basic credentials extraction from the Authorization header

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::domain::account::Credentials;

/// Extractor for `Authorization: <scheme> <base64(user_id:password)>`
///
/// Never rejects. A missing or unreadable header yields `None`, leaving the
/// handler to report it after its own earlier checks.
#[derive(Debug, Clone)]
pub struct BasicAuth(pub Option<Credentials>);

impl<S> FromRequestParts<S> for BasicAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credentials = extract_basic_credentials(&parts.headers);

        if credentials.is_none() {
            debug!("No usable credentials in Authorization header");
        }

        Ok(BasicAuth(credentials))
    }
}

/// Decode credentials from the Authorization header.
///
/// The header is split once on the first space. The scheme token is not
/// inspected; the remainder must be standard padded base64 of valid UTF-8
/// holding exactly one colon.
pub fn extract_basic_credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    if value.is_empty() {
        return None;
    }

    let (_scheme, encoded) = value.split_once(' ')?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let payload = String::from_utf8(decoded).ok()?;

    Credentials::parse(&payload)
}
