//! Role-based guard for protected routes.
//!
//! A route declares the roles it accepts once, when the router is built:
//!
//! ```ignore
//! let admin = Router::new().route("/administrators", get(administrators));
//! let admin = roles::protect(admin, &state, &[Role::Superadmin])?;
//! ```
//!
//! `protect` layers authentication (access middleware) in front of the role
//! check, so a request without a valid token is rejected with 401 before any
//! role is looked at. Callers with a valid token but none of the listed roles
//! get 403.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Extensions, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::auth::access;
use crate::services::authz::{PolicyError, Role, RolePolicy, authorize};
use crate::state::AppState;

/// Gate consulted before a protected handler runs.
#[derive(Debug, Clone)]
pub struct RolesGuard {
    policy: RolePolicy,
}

impl RolesGuard {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, PolicyError> {
        Ok(Self {
            policy: RolePolicy::new(roles)?,
        })
    }

    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    /// Reads the caller placed in `extensions` by the access middleware.
    pub fn decide(&self, extensions: &Extensions) -> bool {
        authorize(&self.policy, extensions.get::<AuthCtx>())
    }
}

/// Layer only the role check. Requests that reach it without an `AuthCtx`
/// are forbidden.
pub fn apply<S>(router: Router<S>, guard: RolesGuard) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        Arc::new(guard),
        roles_middleware,
    ))
}

/// Authenticate, then require one of `roles`.
///
/// Returns `PolicyError::Empty` when `roles` is empty. Routers are built once
/// at startup, so a misdeclared route aborts the process there.
pub fn protect<S>(
    router: Router<S>,
    state: &AppState,
    roles: &[Role],
) -> Result<Router<S>, PolicyError>
where
    S: Clone + Send + Sync + 'static,
{
    let guard = RolesGuard::new(roles.iter().copied())?;
    tracing::debug!(roles = ?guard.policy().allowed().collect::<Vec<_>>(), "protecting routes");

    // The layer added last runs first.
    let router = apply(router, guard);
    Ok(access::apply(router, state.clone()))
}

async fn roles_middleware(
    State(guard): State<Arc<RolesGuard>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !guard.decide(req.extensions()) {
        match req.extensions().get::<AuthCtx>() {
            Some(ctx) => tracing::warn!(
                user_id = %ctx.user_id,
                jti = ?ctx.jti,
                roles = ?ctx.roles,
                path = %req.uri().path(),
                "insufficient role"
            ),
            None => tracing::warn!(
                path = %req.uri().path(),
                "role check without authenticated caller"
            ),
        }
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::services::auth::{AccessJwtError, Authenticator, VerifiedAccessToken};
    use crate::test_support::{self, TestClaims};

    async fn ok() -> &'static str {
        "ok"
    }

    fn protected(roles: &[Role]) -> Router {
        let state = test_support::app_state();
        let router = Router::new().route("/guarded", get(ok));
        protect(router, &state, roles).unwrap().with_state(state)
    }

    fn request(token: Option<String>) -> Request<Body> {
        let mut builder = Request::get("/guarded");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn token_with(roles: &[&str]) -> Option<String> {
        Some(test_support::mint(&TestClaims::new(Uuid::new_v4(), roles)))
    }

    fn extensions_with(ctx: Option<AuthCtx>) -> Extensions {
        let mut ext = Extensions::new();
        if let Some(ctx) = ctx {
            ext.insert(ctx);
        }
        ext
    }

    #[test]
    fn empty_role_list_is_a_configuration_error() {
        assert_eq!(RolesGuard::new(Vec::<Role>::new()).unwrap_err(), PolicyError::Empty);

        let state = test_support::app_state();
        let router: Router<AppState> = Router::new().route("/guarded", get(ok));
        assert!(protect(router, &state, &[]).is_err());
    }

    #[test]
    fn decide_reads_identity_from_extensions() {
        let guard = RolesGuard::new([Role::Superadmin]).unwrap();

        let admin = AuthCtx::new(Uuid::new_v4(), vec![Role::Superadmin, Role::Editor]);
        let editor = AuthCtx::new(Uuid::new_v4(), vec![Role::Editor]);

        assert!(guard.decide(&extensions_with(Some(admin))));
        assert!(!guard.decide(&extensions_with(Some(editor))));
        assert!(!guard.decide(&extensions_with(None)));
    }

    #[tokio::test]
    async fn unauthenticated_request_is_401() {
        let res = protected(&[Role::Superadmin])
            .oneshot(request(None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_role_is_403() {
        let res = protected(&[Role::Superadmin])
            .oneshot(request(token_with(&["Editor"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn no_roles_at_all_is_403() {
        let res = protected(&Role::ALL)
            .oneshot(request(token_with(&[])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_role_names_grant_nothing() {
        let res = protected(&[Role::Superadmin])
            .oneshot(request(token_with(&["superadmin", "root"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn any_listed_role_is_enough() {
        let app = protected(&[Role::Superadmin, Role::Editor]);

        let res = app
            .clone()
            .oneshot(request(token_with(&["Editor"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .oneshot(request(token_with(&["Customer", "Superadmin"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_is_404_not_401() {
        let res = protected(&[Role::Superadmin])
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn guard_alone_rejects_without_identity() {
        let guard = RolesGuard::new([Role::Customer]).unwrap();
        let app: Router = apply(Router::new().route("/guarded", get(ok)), guard);

        let res = app.oneshot(request(None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    // Authenticator that always fails; the role stage must never see the request.
    struct Rejecting;

    impl Authenticator for Rejecting {
        fn authenticate(&self, _token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
            Err(AccessJwtError::InvalidSubUuid)
        }
    }

    #[tokio::test]
    async fn authentication_failure_short_circuits_role_check() {
        let state = AppState::new(Arc::new(Rejecting));
        let router = Router::new().route("/guarded", get(ok));
        let app = protect(router, &state, &Role::ALL)
            .unwrap()
            .with_state(state);

        let res = app
            .oneshot(request(token_with(&["Superadmin"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
