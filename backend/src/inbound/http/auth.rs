//! Bearer-token authentication extractor.
//!
//! Handlers take a [`RequestPrincipal`] argument; extraction reads the
//! `Authorization` header, hands the token to the configured
//! [`PrincipalResolver`](crate::domain::ports::PrincipalResolver) and yields
//! the resolved [`Principal`]. Missing or unverifiable tokens fail the
//! request before the handler body runs.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Principal};
use crate::inbound::http::state::HttpState;

/// The authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct RequestPrincipal(Principal);

impl RequestPrincipal {
    /// The resolved principal.
    pub const fn principal(&self) -> Principal {
        self.0
    }
}

impl Deref for RequestPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing authorization header"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("malformed authorization header"))?;
    value
        .strip_prefix("Bearer ")
        .map(str::to_owned)
        .ok_or_else(|| Error::unauthorized("authorization header must use the Bearer scheme"))
}

impl FromRequest for RequestPrincipal {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = token?;
            let state = state
                .ok_or_else(|| Error::unknown("http state missing from app data"))?;
            let principal = state
                .principal_resolver
                .resolve(&token)
                .await
                .map_err(|err| Error::unknown(format!("token verification failed: {err}")))?
                .ok_or_else(|| Error::unauthorized("invalid or expired token"))?;
            Ok(Self(principal))
        })
    }
}
