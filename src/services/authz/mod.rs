/*
 * Responsibility
 * - Role enumeration and per-route role policies
 * - The authorization predicate (pure; no HTTP, no logging)
 */
pub mod policy;
pub mod role;

pub use policy::{PolicyError, RoleBearer, RolePolicy, authorize};
pub use role::Role;
