use thiserror::Error;

/// Failure of the inference → declaration pipeline.
///
/// Classification is total and rendering can't fail, so the only way to get
/// here is a document whose root isn't an object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Root type must be an object (found {found})")]
    InvalidRootShape { found: &'static str },
}
