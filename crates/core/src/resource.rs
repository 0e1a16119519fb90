//! The six resource collections and their load ordering.
//!
//! Each collection is served at `/{path}` by the source API and stored in a
//! table of the same name. Children always load after their parent so that
//! foreign keys resolve against rows that already exist.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Posts,
    Comments,
    Albums,
    Photos,
    Todos,
}

impl Resource {
    /// Foreign-key dependency order: every parent precedes its children.
    pub const LOAD_ORDER: [Resource; 6] = [
        Resource::Users,
        Resource::Posts,
        Resource::Comments,
        Resource::Albums,
        Resource::Photos,
        Resource::Todos,
    ];

    /// Path segment of the collection on the source API.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Albums => "albums",
            Resource::Photos => "photos",
            Resource::Todos => "todos",
        }
    }

    /// Destination table.
    pub fn table(self) -> &'static str {
        self.path()
    }

    /// The resource this one references through its foreign key, if any.
    pub fn parent(self) -> Option<Resource> {
        match self {
            Resource::Users => None,
            Resource::Posts | Resource::Albums | Resource::Todos => Some(Resource::Users),
            Resource::Comments => Some(Resource::Posts),
            Resource::Photos => Some(Resource::Albums),
        }
    }

    /// The resource loaded right after this one, or `None` for the last.
    pub fn next(self) -> Option<Resource> {
        let position = Self::LOAD_ORDER.iter().position(|r| *r == self)?;
        Self::LOAD_ORDER.get(position + 1).copied()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resource `{0}`")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LOAD_ORDER
            .into_iter()
            .find(|r| r.path() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}
