//! Rendering of argument error message templates.

use minijinja::Environment;
use serde_json::{Map, Value};

use super::{ErrorKind, Rules};

/// Values a message template can refer to.
pub(crate) struct MessageContext<'a> {
    pub(crate) name: &'a str,
    pub(crate) position: usize,
    pub(crate) kind: ErrorKind,
    pub(crate) value: Option<String>,
    pub(crate) rules: &'a Rules,
}

/// Renders `template`, falling back to the generic message on failure.
pub(crate) fn render(template: &str, context: &MessageContext<'_>) -> String {
    let environment = Environment::new();
    environment
        .render_str(template, build_template_context(context))
        .unwrap_or_else(|error| {
            tracing::warn!(
                slot = context.name,
                position = context.position,
                %error,
                "argument message template failed to render"
            );
            generic_message(context.kind, context.position, context.name)
        })
}

/// Message used when neither the slot nor the argument type supplies one.
pub(crate) fn generic_message(kind: ErrorKind, position: usize, name: &str) -> String {
    format!("Argument #{} (`{name}`): {kind}.", position.saturating_add(1))
}

/// Checks that `template` compiles.
pub(crate) fn check_template(template: &str) -> Result<(), String> {
    Environment::new()
        .template_from_str(template)
        .map(drop)
        .map_err(|error| error.to_string())
}

fn build_template_context(context: &MessageContext<'_>) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert("name".to_owned(), Value::from(context.name));
    values.insert("position".to_owned(), Value::from(context.position));
    values.insert(
        "ordinal".to_owned(),
        Value::from(context.position.saturating_add(1)),
    );
    values.insert("kind".to_owned(), Value::from(context.kind.label()));
    values.insert(
        "value".to_owned(),
        context.value.clone().map_or(Value::Null, Value::String),
    );
    values.insert(
        "min".to_owned(),
        context.rules.min().map_or(Value::Null, Value::from),
    );
    values.insert(
        "max".to_owned(),
        context.rules.max().map_or(Value::Null, Value::from),
    );
    values.insert(
        "choices".to_owned(),
        Value::from(context.rules.choices().unwrap_or_default().to_vec()),
    );
    values
}
