//! Render boundary error types

/// Errors produced while recording or presenting draw output
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A drawable referenced a mesh the backend does not know
    #[error("unknown mesh id {0}")]
    UnknownMesh(u64),

    /// A drawable referenced a material the backend does not know
    #[error("unknown material id {0}")]
    UnknownMaterial(u64),
}
