use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("at least one character class must be enabled")]
    NoClassEnabled,

    #[error("length {length} is outside {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    #[error("no acceptable password after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
