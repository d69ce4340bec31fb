use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission tier carried by an authenticated caller.
///
/// The set is closed: tokens may only grant what is listed here, and route
/// policies can only be written in terms of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Superadmin,
    Editor,
    Customer,
    Authenticated,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Superadmin,
        Role::Editor,
        Role::Customer,
        Role::Authenticated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "Superadmin",
            Role::Editor => "Editor",
            Role::Customer => "Customer",
            Role::Authenticated => "Authenticated",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    // Wire names are matched exactly; "superadmin" is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
