//! LaTeX render strategy

use super::delimiters::Delimiters;
use super::error::RenderError;
use super::format::format_variable;
use super::scan::{substitute, Substitution, SubstitutionTable};
use super::RenderStrategy;
use crate::variable::VariableCollection;

/// Substitutes `{{.key}}` placeholders for top-level variables
///
/// Only top-level keys are matched. Nested objects render as JSON under their
/// own key; flatten the collection first
/// ([`VariableCollection::flatten`]) to address `{{.user.name}}`.
#[derive(Debug, Clone, Default)]
pub struct LatexRenderStrategy {
    delimiters: Delimiters,
}

impl LatexRenderStrategy {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn substitution_table(&self, variables: &VariableCollection) -> SubstitutionTable {
        SubstitutionTable::new(
            variables
                .iter()
                .map(|(key, value)| Substitution {
                    token: self.delimiters.placeholder(key),
                    replacement: format_variable(value),
                })
                .collect(),
        )
    }
}

impl RenderStrategy for LatexRenderStrategy {
    fn render(
        &self,
        template: &str,
        variables: &VariableCollection,
    ) -> Result<String, RenderError> {
        let table = self.substitution_table(variables);
        let output = substitute(template, self.delimiters.left(), &table);

        tracing::debug!(
            replaced = output.replaced,
            variables = variables.len(),
            "rendered latex template"
        );

        Ok(output.text)
    }
}
