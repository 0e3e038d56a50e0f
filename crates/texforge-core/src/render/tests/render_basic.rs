//! Basic rendering tests for the LaTeX strategy

use super::helpers::{greeting_vars, paper_vars};
use super::*;
use crate::variable::Variable;

#[test]
fn test_render_greeting() {
    let result = render("Hello {{.name}}, you are {{.age}}.", &greeting_vars()).unwrap();
    assert_eq!(result, "Hello Ana, you are 30.00.");
}

#[test]
fn test_render_array_joined() {
    let result = render("{{.tags}}", &paper_vars()).unwrap();
    assert_eq!(result, "a, b, c");
}

#[test]
fn test_render_boolean_and_null() {
    let result = render("draft={{.draft}} note=[{{.note}}]", &paper_vars()).unwrap();
    assert_eq!(result, "draft=false note=[]");
}

#[test]
fn test_render_object_as_json() {
    let result = render("{{.author}}", &paper_vars()).unwrap();
    assert_eq!(
        result,
        r#"{"affiliation":{"short":"MIT"},"name":"John Doe"}"#
    );
}

#[test]
fn test_render_latex_document() {
    let template = "\\documentclass{article}\n\\title{{{.title}}}\n\\begin{document}\\maketitle\\end{document}";
    let result = render(template, &paper_vars()).unwrap();
    assert_eq!(
        result,
        "\\documentclass{article}\n\\title{Research Paper}\n\\begin{document}\\maketitle\\end{document}"
    );
}

#[test]
fn test_render_repeated_placeholder() {
    let result = render("{{.name}}/{{.name}}/{{.name}}", &greeting_vars()).unwrap();
    assert_eq!(result, "Ana/Ana/Ana");
}

#[test]
fn test_render_custom_delimiters() {
    let strategy = LatexRenderStrategy::new(Delimiters::new("<<", ">>").unwrap());
    let result = strategy
        .render("<<.name>> vs {{.name}}", &greeting_vars())
        .unwrap();
    assert_eq!(result, "Ana vs {{.name}}");
}

#[test]
fn test_render_flattened_nested_paths() {
    let flat = paper_vars().flatten();
    let result = render(
        "{{.author.name}} ({{.author.affiliation.short}})",
        &flat,
    )
    .unwrap();
    assert_eq!(result, "John Doe (MIT)");
}

#[test]
fn test_render_value_containing_placeholder_not_expanded() {
    let mut vars = greeting_vars();
    vars.set("name", Variable::new_string("{{.age}}").unwrap());
    let result = render("{{.name}} {{.age}}", &vars).unwrap();
    assert_eq!(result, "{{.age}} 30.00");
}
