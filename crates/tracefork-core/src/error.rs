pub type EngineResult<T> = Result<T, EngineError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    #[error("invalid easing curve: {0:?}")]
    InvalidEasing(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("session has been disposed")]
    SessionDisposed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        assert!(EngineError::UnknownMode("calm".into())
            .to_string()
            .contains("\"calm\""));
        assert!(EngineError::InvalidColor("#zz".into())
            .to_string()
            .starts_with("invalid color"));
    }
}
