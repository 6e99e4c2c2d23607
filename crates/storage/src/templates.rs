use anyhow::Context;
use spotter_domain as domain;

use crate::json;

const BUILTIN_TEMPLATES: &str = include_str!("../data/templates.json");

/// The base templates shipped with the application.
pub fn builtin() -> anyhow::Result<Vec<domain::Template>> {
    parse(BUILTIN_TEMPLATES).context("failed to load built-in templates")
}

/// Parses a template document of the form `{"templates": [...]}`.
pub fn parse(document: &str) -> anyhow::Result<Vec<domain::Template>> {
    let templates: json::Templates =
        serde_json::from_str(document).context("invalid template document")?;
    templates
        .templates
        .into_iter()
        .map(|template| {
            let id = template.id.clone();
            domain::Template::try_from(template).with_context(|| format!("invalid template {id}"))
        })
        .collect()
}
