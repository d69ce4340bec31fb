/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - access middleware が検証して request extensions に格納し、roles guard と handler はこの型だけを読む
 *
 * Notes
 * - JWT の検証ロジックは services/auth 側の責務
 * - ここは「型（契約）」として固定化する
 */

use uuid::Uuid;

use crate::services::auth::VerifiedAccessToken;
use crate::services::authz::{Role, RoleBearer};

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は token の `sub`
/// - `roles` は token 上の順序のまま (重複もそのまま)。認可は集合として扱う
/// - `jti` は監査/相関用 (認可拒否のログに出す)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: Uuid,
    pub roles: Vec<Role>,
    pub jti: Option<String>,
}

impl AuthCtx {
    #[cfg(test)]
    pub fn new(user_id: Uuid, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            roles,
            jti: None,
        }
    }
}

impl From<VerifiedAccessToken> for AuthCtx {
    fn from(token: VerifiedAccessToken) -> Self {
        Self {
            user_id: token.user_id,
            roles: token.roles,
            jti: token.jti,
        }
    }
}

impl RoleBearer for AuthCtx {
    fn roles(&self) -> &[Role] {
        &self.roles
    }
}
