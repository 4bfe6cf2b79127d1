//! Error taxonomy shared by every catalog operation.

use std::fmt;
use thiserror::Error;

/// The three entity kinds the catalog manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Character,
    Movie,
    Franchise,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Character => "Character",
            Self::Movie => "Movie",
            Self::Franchise => "Franchise",
        };
        f.write_str(name)
    }
}

/// Domain errors for catalog operations.
///
/// `Conflict` and `Forbidden` are recognized by the API layer but never
/// produced by the catalog itself.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i32 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    #[must_use]
    pub const fn not_found(entity: EntityKind, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found(EntityKind::Franchise, 9);
        assert_eq!(err.to_string(), "Franchise 9 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_persistence_failure_is_not_not_found() {
        let err: CatalogError = anyhow::anyhow!("disk I/O error").into();
        assert!(!err.is_not_found());
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
