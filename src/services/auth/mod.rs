/*
 * Responsibility
 * - Authentication delegate: bearer token -> verified caller
 * - The access middleware only sees the `Authenticator` trait, so the
 *   verification strategy can be swapped without touching the guards
 */
pub mod access_jwt;
pub mod factory;

pub use access_jwt::{AccessJwtError, AuthService, VerifiedAccessToken};
pub use factory::build_auth_service;

/// Resolves a caller from a bearer token.
///
/// Implementations must fail closed: any doubt about the token is an `Err`.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError>;
}
