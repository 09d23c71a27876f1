use thiserror::Error;

/// Failures surfaced by the engine's public operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    #[error("repository error: {0}")]
    Repository(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl EngineError {
    pub fn employee_not_found(id: impl Into<u64>) -> Self {
        Self::NotFound {
            entity: "employee",
            id: id.into(),
        }
    }

    pub fn recommendation_not_found(id: impl Into<u64>) -> Self {
        Self::NotFound {
            entity: "recommendation",
            id: id.into(),
        }
    }

    /// Whether this is a missing-entity error (mapped to 404 by web callers).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = EngineError::employee_not_found(12u64);
        assert_eq!(err.to_string(), "employee not found: 12");
        assert!(err.is_not_found());
        assert!(!EngineError::Cancelled.is_not_found());
    }
}
