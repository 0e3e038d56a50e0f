use thiserror::Error;

use crate::render::RenderError;
use crate::variable::VariableError;

#[derive(Error, Debug)]
pub enum TexforgeError {
    // Config errors
    #[error("CONFIG_INVALID: failed to parse texforge.toml: {0}")]
    ConfigInvalid(String),

    // Variable errors
    #[error(transparent)]
    Variable(#[from] VariableError),

    // Render errors
    #[error("RENDER_FAILED: {0}")]
    Render(#[from] RenderError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TexforgeError>;
