use serde::Serialize;

use crate::api::v1::extractors::AuthCtx;
use crate::services::authz::Role;

/// The caller as seen by a protected handler.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub user_id: String,
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<&'static str>,
}

impl IdentityResponse {
    pub fn new(ctx: AuthCtx, scope: Option<&'static str>) -> Self {
        Self {
            user_id: ctx.user_id.to_string(),
            roles: ctx.roles,
            scope,
        }
    }
}
