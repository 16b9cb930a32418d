use crate::foundation::core::PartName;

pub type CatResult<T> = Result<T, CatError>;

#[derive(thiserror::Error, Debug)]
pub enum CatError {
    #[error("missing resource: {0}")]
    MissingResource(String),

    #[error("missing sprite part: {0}")]
    MissingPart(PartName),

    #[error("layout error: grid (or its first row) is empty")]
    EmptyLayout,

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatError {
    pub fn missing_resource(msg: impl Into<String>) -> Self {
        Self::MissingResource(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors caused by absent input files or folders.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, Self::MissingResource(_))
    }
}
