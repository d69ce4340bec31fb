/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - route ごとに許可する Role をここで宣言する (起動時に一度だけ評価)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    health::health,
    identity::{administrators, catalog_drafts, me},
};
use crate::middleware::auth::protect;
use crate::services::authz::{PolicyError, Role};
use crate::state::AppState;

pub fn routes(state: &AppState) -> Result<Router<AppState>, PolicyError> {
    let public = Router::new().route("/health", get(health));

    let me_routes = protect(Router::new().route("/me", get(me)), state, &Role::ALL)?;

    let admin_routes = protect(
        Router::new().route("/administrators", get(administrators)),
        state,
        &[Role::Superadmin],
    )?;

    let catalog_routes = protect(
        Router::new().route("/catalog/drafts", get(catalog_drafts)),
        state,
        &[Role::Superadmin, Role::Editor],
    )?;

    Ok(public
        .merge(me_routes)
        .merge(admin_routes)
        .merge(catalog_routes))
}
