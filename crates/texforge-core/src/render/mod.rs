//! Render module - strategy-dispatched placeholder substitution
//!
//! A [`RenderContext`] maps document-type tags (`"latex"`, `"beamer"`, ...) to
//! [`RenderStrategy`] implementations and falls back to a default strategy for
//! unknown tags. The registry is an ordinary owned value; there is no global
//! strategy table.
//!
//! ## Placeholder syntax
//!
//! - `{{.key}}` for a top-level variable (delimiters configurable)
//! - Unknown placeholders are left in the output verbatim
//! - Substitution is a single pass; inserted values are never re-expanded

mod delimiters;
mod error;
mod format;
mod latex;
mod scan;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::document::{detect_document_type, DocumentType};
use crate::variable::VariableCollection;

pub use delimiters::Delimiters;
pub use error::RenderError;
pub use latex::LatexRenderStrategy;

/// Formats a variable collection into a template
pub trait RenderStrategy: Send + Sync {
    fn render(&self, template: &str, variables: &VariableCollection)
        -> Result<String, RenderError>;
}

/// Registry of render strategies keyed by document-type tag
pub struct RenderContext {
    strategies: BTreeMap<String, Arc<dyn RenderStrategy>>,
    default: Arc<dyn RenderStrategy>,
}

impl RenderContext {
    /// Create an empty registry that renders everything with `default`
    pub fn new(default: Arc<dyn RenderStrategy>) -> Self {
        Self {
            strategies: BTreeMap::new(),
            default,
        }
    }

    /// Registry with the LaTeX strategy for `latex` and `beamer`, also used as default
    pub fn with_defaults(delimiters: Delimiters) -> Self {
        let latex: Arc<dyn RenderStrategy> = Arc::new(LatexRenderStrategy::new(delimiters));
        let mut context = Self::new(Arc::clone(&latex));
        context.register_strategy(DocumentType::Latex.tag(), Arc::clone(&latex));
        context.register_strategy(DocumentType::Beamer.tag(), latex);
        context
    }

    /// Register a strategy for a tag, returning the one it replaced
    pub fn register_strategy(
        &mut self,
        tag: impl Into<String>,
        strategy: Arc<dyn RenderStrategy>,
    ) -> Option<Arc<dyn RenderStrategy>> {
        self.strategies.insert(tag.into(), strategy)
    }

    pub fn has_strategy(&self, tag: &str) -> bool {
        self.strategies.contains_key(tag)
    }

    /// Registered tags in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    /// Strategy for a tag, or the default when none is registered
    pub fn strategy_for(&self, tag: &str) -> &dyn RenderStrategy {
        match self.strategies.get(tag) {
            Some(strategy) => strategy.as_ref(),
            None => {
                tracing::debug!(tag, "no strategy registered, using default");
                self.default.as_ref()
            }
        }
    }

    /// Render a template with the strategy registered for `tag`
    pub fn render(
        &self,
        tag: &str,
        template: &str,
        variables: &VariableCollection,
    ) -> Result<String, RenderError> {
        self.strategy_for(tag).render(template, variables)
    }

    /// Detect the document type from the template, then render
    pub fn render_detected(
        &self,
        template: &str,
        variables: &VariableCollection,
    ) -> Result<String, RenderError> {
        let document_type = detect_document_type(template);
        tracing::trace!(tag = document_type.tag(), "detected document type");
        self.render(document_type.tag(), template, variables)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::with_defaults(Delimiters::default())
    }
}

/// Convenience function to render a template with the default LaTeX strategy
pub fn render(template: &str, variables: &VariableCollection) -> Result<String, RenderError> {
    LatexRenderStrategy::default().render(template, variables)
}

#[cfg(test)]
mod tests;
