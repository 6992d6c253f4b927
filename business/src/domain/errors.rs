/// Boxed backend cause carried by repository errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError(#[source] BoxError),
    #[error("repository.constraint_violation")]
    ConstraintViolation(#[source] BoxError),
    #[error("repository.timeout")]
    Timeout,
}

impl RepositoryError {
    pub fn database_error(cause: impl Into<BoxError>) -> Self {
        RepositoryError::DatabaseError(cause.into())
    }
    pub fn constraint_violation(cause: impl Into<BoxError>) -> Self {
        RepositoryError::ConstraintViolation(cause.into())
    }
    pub fn timeout() -> Self {
        RepositoryError::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset by peer")]
    struct ConnectionReset;

    #[test]
    fn should_keep_backend_cause_as_source() {
        let err = RepositoryError::database_error(ConnectionReset);

        let source = err.source().expect("cause should be kept");
        assert!(source.downcast_ref::<ConnectionReset>().is_some());
        assert_eq!(err.to_string(), "repository.database_error");
    }

    #[test]
    fn should_have_no_source_on_timeout() {
        let err = RepositoryError::timeout();

        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "repository.timeout");
    }
}
