/*
 * Responsibility
 * - role guard の後ろに置く handler 群
 * - ここに来た時点で認証・認可は済んでいる。AuthCtx を読むだけ
 */
use axum::Json;

use crate::api::v1::{dto::identity::IdentityResponse, extractors::AuthCtxExtractor};

/// GET /me: any role
pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    Json(IdentityResponse::new(ctx, None))
}

/// GET /administrators: Superadmin only
pub async fn administrators(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    Json(IdentityResponse::new(ctx, Some("administrators")))
}

/// GET /catalog/drafts: Superadmin or Editor
pub async fn catalog_drafts(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    Json(IdentityResponse::new(ctx, Some("catalog:drafts")))
}
