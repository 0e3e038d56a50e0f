//! Render command - substitute variables into a template

use crate::cli::RenderArgs;
use crate::context::Context;
use crate::output::print_raw;
use crate::vars_file::load_variables;
use anyhow::{Context as _, Result};
use colored::Colorize;
use std::fs;
use texforge_core::{Delimiters, DocumentType, RenderContext, detect_document_type};

/// Render a template file with a variables file
///
/// Command-line flags take precedence over texforge.toml. Without `--type`
/// or a configured `default_type`, the document type is detected from the
/// template content.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let template = fs::read_to_string(&args.template)
        .with_context(|| format!("Failed to read template {}", args.template.display()))?;

    let vars = load_variables(&args.vars)?;

    let mut var_config = ctx.config.variables.clone();
    var_config.strict |= args.strict;
    if args.no_flatten {
        var_config.flatten = false;
    }
    let vars = var_config
        .prepare(vars)
        .with_context(|| format!("Invalid variables in {}", args.vars.display()))?;

    let render_config = &ctx.config.render;
    let delimiters = Delimiters::new(
        args.left
            .unwrap_or_else(|| render_config.left_delimiter.clone()),
        args.right
            .unwrap_or_else(|| render_config.right_delimiter.clone()),
    )?;

    let tag = args
        .doc_type
        .or_else(|| render_config.default_type.clone())
        .unwrap_or_else(|| detect_document_type(&template).tag().to_string());

    if let Err(reason) = tag.parse::<DocumentType>() {
        tracing::warn!("{}; using the default strategy", reason);
    }

    if ctx.verbose {
        eprintln!(
            "{} Rendering {} as '{}' with {} variable(s)",
            "→".cyan(),
            args.template.display(),
            tag,
            vars.len()
        );
    }

    let context = RenderContext::with_defaults(delimiters);
    let rendered = context.render(&tag, &template, &vars)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Rendered {}", "✓".green().bold(), path.display());
        }
        None => print_raw(&rendered)?,
    }

    Ok(())
}
