/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: the authentication delegate used by the access middleware
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::Authenticator;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(auth: Arc<dyn Authenticator>) -> Self {
        Self { auth }
    }
}
