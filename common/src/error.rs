use thiserror::Error;

#[derive(Debug, Error)]
pub enum KennelError {
    #[error("voice failed to emit a line: {0}")]
    Voice(#[from] std::io::Error),

    #[error("unknown species '{0}' (expected 'animal' or 'dog')")]
    UnknownSpecies(String),

    #[error("missing species keyword in '{0}'")]
    EmptySpecies(String),
}

pub type Result<T> = std::result::Result<T, KennelError>;
