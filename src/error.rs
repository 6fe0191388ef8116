use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
