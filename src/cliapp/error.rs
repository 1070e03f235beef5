use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not find cmd: '{0}' for execution")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("cmd '{0}' has no function to execute")]
    MissingHandler(String),

    /// Error raised by a command handler that is not itself a `CliError`.
    #[error(transparent)]
    Handler(Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Wraps any foreign error so a handler can return it with `?`-style ergonomics.
    pub fn handler<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        CliError::Handler(err.into())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_command() {
        let err = CliError::NotFound("deploy".into());
        assert_eq!(err.to_string(), "Could not find cmd: 'deploy' for execution");
    }

    #[test]
    fn handler_error_is_transparent() {
        let err = CliError::handler("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert!(matches!(err, CliError::Handler(_)));
    }
}
