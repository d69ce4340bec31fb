/*
 * Responsibility
 * - access: bearer token の検証 (authentication)
 * - roles: route ごとの role 制限 (authorization)。protect() で両方を正しい順に掛ける
 */
pub mod access;
pub mod roles;

pub use roles::protect;
