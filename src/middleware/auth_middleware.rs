/// Bearer-token authentication and role-guard middleware.
///
/// Applied per route/scope with that route's allowed-role set; the wiring in
/// `startup.rs` is the declarative (route, allowed roles) table. A missing,
/// malformed, badly signed, or expired token yields 401; a valid token whose
/// role is outside the allowed set yields 403. On success the decoded claims
/// are injected into request extensions for handlers to pick up via
/// `web::ReqData<Claims>`.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::auth::{authorize, verify_token, Role};
use crate::configuration::JwtSettings;
use crate::error::AuthError;

pub struct AuthMiddleware {
    jwt_config: JwtSettings,
    allowed_roles: &'static [Role],
}

impl AuthMiddleware {
    /// Guard a route with an allowed-role set (see the named sets in
    /// `auth::role`).
    pub fn allow(jwt_config: JwtSettings, allowed_roles: &'static [Role]) -> Self {
        Self {
            jwt_config,
            allowed_roles,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            jwt_config: self.jwt_config.clone(),
            allowed_roles: self.allowed_roles,
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    jwt_config: JwtSettings,
    allowed_roles: &'static [Role],
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let bearer = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = match bearer {
            Some(token) => token,
            None => {
                tracing::warn!(path = %req.path(), "Missing or invalid Authorization header");
                return reject_unauthenticated(AuthError::MissingToken);
            }
        };

        let claims = match verify_token(&token, &self.jwt_config) {
            Ok(claims) => claims,
            Err(reason) => {
                // The precise rejection reason stays in the logs; clients
                // get one opaque 401.
                tracing::warn!(path = %req.path(), reason = %reason, "Token rejected");
                return reject_unauthenticated(reason);
            }
        };

        if !authorize(&claims, self.allowed_roles) {
            tracing::warn!(
                path = %req.path(),
                role = %claims.role,
                "Role not permitted for this route"
            );
            let response = HttpResponse::Forbidden().json(serde_json::json!({
                "error": "Access denied",
                "code": "FORBIDDEN"
            }));
            return Box::pin(async move {
                Err(actix_web::error::InternalError::from_response("Forbidden", response).into())
            });
        }

        tracing::debug!(user_id = %claims.sub, role = %claims.role, "Request authenticated");
        req.extensions_mut().insert(claims);

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}

fn reject_unauthenticated<R>(reason: AuthError) -> LocalBoxFuture<'static, Result<R, Error>> {
    let (message, code) = match reason {
        AuthError::MissingToken => ("Missing authentication token", "MISSING_TOKEN"),
        _ => ("Invalid or expired token", "TOKEN_INVALID"),
    };
    let response = HttpResponse::Unauthorized().json(serde_json::json!({
        "error": message,
        "code": code
    }));
    Box::pin(async move {
        Err(actix_web::error::InternalError::from_response("Unauthorized", response).into())
    })
}
