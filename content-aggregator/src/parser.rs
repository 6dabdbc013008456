use crate::types::{AggregatorError, FrontMatter, ParsedDocument, Result};
use serde_json::{Map, Number, Value};
use tracing::debug;

const YAML_FENCE: &str = "---";
const YAML_END: &str = "...";
const TOML_FENCE: &str = "+++";

enum Format {
    Yaml,
    Toml,
}

/// Split a metadata document into its front matter and body.
///
/// `---` opens a YAML block and `+++` a TOML block; a document that starts
/// with neither has no front matter and is all body.
pub fn parse_document(content: &str) -> Result<ParsedDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.lines();
    let format = match lines.next().map(str::trim_end) {
        Some(YAML_FENCE) => Format::Yaml,
        Some(TOML_FENCE) => Format::Toml,
        _ => {
            return Ok(ParsedDocument {
                front_matter: FrontMatter::new(),
                body: content.trim().to_string(),
            })
        }
    };

    let mut block = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        let fence = line.trim_end();
        let is_end = match format {
            Format::Yaml => fence == YAML_FENCE || fence == YAML_END,
            Format::Toml => fence == TOML_FENCE,
        };
        if is_end {
            closed = true;
            break;
        }
        block.push(line);
    }

    if !closed {
        return Err(AggregatorError::front_matter(
            "front matter block is never closed",
        ));
    }

    let block = block.join("\n");
    let front_matter = match format {
        Format::Yaml => parse_yaml(&block)?,
        Format::Toml => parse_toml(&block)?,
    };
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    debug!(
        "Parsed front matter with {} keys and {} bytes of body",
        front_matter.len(),
        body.len()
    );

    Ok(ParsedDocument { front_matter, body })
}

fn parse_yaml(block: &str) -> Result<FrontMatter> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(block)
        .map_err(|e| AggregatorError::front_matter(format!("invalid YAML: {}", e)))?;

    match yaml_to_json(value) {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(FrontMatter::new()),
        _ => Err(AggregatorError::front_matter(
            "YAML front matter is not a mapping",
        )),
    }
}

fn parse_toml(block: &str) -> Result<FrontMatter> {
    let table: toml::Table = block
        .parse()
        .map_err(|e| AggregatorError::front_matter(format!("invalid TOML: {}", e)))?;

    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

// Non-string keys such as `2023:` are kept under their textual form.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
