//! Origin-identifier extractor.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use portal_core::origin::client_origin;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// The caller's origin identifier (see [`portal_core::origin::client_origin`]).
///
/// Reads `X-Forwarded-For` and the peer address recorded by
/// `into_make_service_with_connect_info`. Never rejects: with neither source
/// the identifier is `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrigin(pub String);

impl<S> FromRequestParts<S> for ClientOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded_for = parts
            .headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok());
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientOrigin(client_origin(forwarded_for, peer)))
    }
}
