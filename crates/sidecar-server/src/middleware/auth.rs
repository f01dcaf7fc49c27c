//! Bearer-token authentication middleware.
//!
//! Requests to protected routes must carry `Authorization: Bearer <token>`
//! with a token from the configured set; otherwise a 401 envelope is
//! returned before any handler runs. Authenticated requests get a
//! [`Principal`] extension, and handlers check their operation's permission
//! against it as their first step.

use crate::{error::ServerError, middleware::request_id::RequestId};
use axum::{
    http::{header, Request},
    response::{IntoResponse, Response},
};
use sidecar_core::permissions;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use uuid::Uuid;

/// An authenticated caller and the permissions its token grants.
#[derive(Debug, Clone)]
pub struct Principal {
    name: String,
    permissions: HashSet<String>,
}

impl Principal {
    pub fn new(
        name: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_permitted(&self, permission: &str) -> bool {
        self.permissions.contains(permissions::WILDCARD) || self.permissions.contains(permission)
    }

    pub fn require(&self, permission: &str) -> Result<(), ServerError> {
        if self.is_permitted(permission) {
            Ok(())
        } else {
            Err(ServerError::Forbidden(format!("missing permission: {}", permission)))
        }
    }
}

/// Token-to-principal mapping for the auth layer.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    tokens: HashMap<String, Principal>,
}

/// A `--token` value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid token spec '{spec}': {reason}")]
pub struct InvalidTokenSpec {
    pub spec: String,
    pub reason: &'static str,
}

impl AuthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(
        mut self,
        name: impl Into<String>,
        token: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.tokens.insert(token.into(), Principal::new(name, permissions));
        self
    }

    /// Parse `name:token:perm[,perm...]` specs, as passed on the CLI.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, InvalidTokenSpec> {
        let mut config = Self::new();
        for spec in specs {
            let spec = spec.as_ref();
            let invalid = |reason| InvalidTokenSpec { spec: spec.to_string(), reason };

            let mut parts = spec.splitn(3, ':');
            let name = parts.next().unwrap_or("").trim();
            let token = parts.next().unwrap_or("").trim();
            let perms = parts.next().unwrap_or("").trim();

            if name.is_empty() {
                return Err(invalid("missing principal name"));
            }
            if token.is_empty() {
                return Err(invalid("missing token"));
            }
            let permissions: Vec<String> = perms
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
                .collect();
            if permissions.is_empty() {
                return Err(invalid("missing permissions"));
            }

            config.tokens.insert(token.to_string(), Principal::new(name, permissions));
        }
        Ok(config)
    }

    pub fn principal_for(&self, token: &str) -> Option<Principal> {
        self.tokens.get(token).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Layer that authenticates bearer tokens
#[derive(Clone)]
pub struct AuthLayer {
    config: Arc<AuthConfig>,
}

impl AuthLayer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService { inner, config: self.config.clone() }
    }
}

/// Service that authenticates bearer tokens
#[derive(Clone)]
pub struct AuthService<S> {
    inner: S,
    config: Arc<AuthConfig>,
}

impl<S, B> Service<Request<B>> for AuthService<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        let principal = token.and_then(|t| self.config.principal_for(t));

        match principal {
            Some(principal) => {
                req.extensions_mut().insert(principal);
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            None => {
                let request_id = req
                    .extensions()
                    .get::<RequestId>()
                    .map(|r| r.0.clone())
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let message = if token.is_none() {
                    "missing bearer token"
                } else {
                    "unknown bearer token"
                };
                let resp = ServerError::Unauthorized(message.to_string())
                    .to_http_response(request_id)
                    .into_response();
                Box::pin(async move { Ok(resp) })
            }
        }
    }
}
