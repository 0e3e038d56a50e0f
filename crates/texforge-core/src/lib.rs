// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod render;
pub mod variable;

// Re-export commonly used types
pub use document::{detect_document_type, DocumentType};
pub use error::{Result, TexforgeError};
pub use render::{Delimiters, LatexRenderStrategy, RenderContext, RenderError, RenderStrategy};
pub use variable::{Variable, VariableCollection, VariableError, VariableKind};
