use std::collections::BTreeSet;

use thiserror::Error;

use super::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("route policy must name at least one role")]
    Empty,
}

/// Anything that carries the roles of an authenticated caller.
pub trait RoleBearer {
    fn roles(&self) -> &[Role];
}

/// The roles a protected route accepts.
///
/// Built once when the router is assembled and never changed afterwards.
/// Always non-empty; duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    allowed: BTreeSet<Role>,
}

impl RolePolicy {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, PolicyError> {
        let allowed: BTreeSet<Role> = roles.into_iter().collect();
        if allowed.is_empty() {
            return Err(PolicyError::Empty);
        }
        Ok(Self { allowed })
    }

    /// True when at least one of `roles` is allowed by this policy.
    pub fn permits(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.allowed.contains(role))
    }

    pub fn allowed(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }
}

/// Decide whether `identity` may pass `policy`.
///
/// An absent identity is never authorized.
pub fn authorize<I>(policy: &RolePolicy, identity: Option<&I>) -> bool
where
    I: RoleBearer + ?Sized,
{
    identity.is_some_and(|identity| policy.permits(identity.roles()))
}
