//! Declarative field resolution.
//!
//! Every output field is described by a chain of [`Candidate`]s evaluated in
//! order; the first one that yields a non-empty value wins. Collections
//! declare their chains as constants so each rule can be read, and tested,
//! on its own.

use crate::source::SourceDocument;
use crate::types::{AggregatorError, Result};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// A front-matter key.
    Key(&'static str),
    /// The first element of a list-valued front-matter key.
    First(&'static str),
    /// A front-matter key holding a link. Any other shape (such as an
    /// image settings mapping) counts as absent.
    Url(&'static str),
    /// The document body.
    Body,
    /// Public path of the first matching sidecar file.
    Sidecar(&'static [&'static str]),
}

pub type Chain = &'static [Candidate];

/// Evaluates chains against one document.
pub struct Resolver<'a> {
    doc: &'a SourceDocument,
}

impl<'a> Resolver<'a> {
    pub fn new(doc: &'a SourceDocument) -> Self {
        Self { doc }
    }

    /// Front-matter value under `key`, treating `null` as absent.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.doc.front_matter.get(key).filter(|v| !v.is_null())
    }

    /// First non-empty text produced by `chain`.
    pub fn text(&self, chain: &[Candidate]) -> Result<Option<String>> {
        for candidate in chain {
            let found = match *candidate {
                Candidate::Key(key) => match self.value(key) {
                    Some(value) => scalar_text(key, value)?,
                    None => None,
                },
                Candidate::First(key) => match self.value(key) {
                    Some(Value::Array(items)) => match items.first() {
                        Some(first) => scalar_text(key, first)?,
                        None => None,
                    },
                    Some(value) => scalar_text(key, value)?,
                    None => None,
                },
                Candidate::Url(key) => match self.value(key) {
                    Some(Value::Array(_) | Value::Object(_)) => {
                        debug!("Ignoring non-link `{}` in {}", key, self.doc.folder);
                        None
                    }
                    Some(value) => scalar_text(key, value)?,
                    None => None,
                },
                Candidate::Body => non_empty(&self.doc.body),
                Candidate::Sidecar(names) => self.doc.sidecar_url(names),
            };
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    pub fn text_or_default(&self, chain: &[Candidate]) -> Result<String> {
        Ok(self.text(chain)?.unwrap_or_default())
    }

    /// First non-empty list produced by `chain`. Scalar candidates count as
    /// one-element lists.
    pub fn list(&self, chain: &[Candidate]) -> Result<Vec<String>> {
        for candidate in chain {
            let found = match *candidate {
                Candidate::Key(key) => match self.value(key) {
                    Some(value) => string_list(key, value)?,
                    None => Vec::new(),
                },
                other => self.text(&[other])?.into_iter().collect(),
            };
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }
}

/// Text form of a scalar front-matter value. Empty strings and `null` are
/// absent; lists and mappings are a shape error for `field`.
pub fn scalar_text(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(non_empty(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => {
            Err(AggregatorError::field_shape(field, "a text value"))
        }
    }
}

/// List of scalar values, skipping empty entries. A lone scalar becomes a
/// one-element list.
pub fn string_list(field: &str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        return Err(AggregatorError::field_shape(field, "a list of text values"))
                    }
                    scalar => out.extend(scalar_text(field, scalar)?),
                }
            }
            Ok(out)
        }
        Value::Object(_) => Err(AggregatorError::field_shape(field, "a list of text values")),
        scalar => Ok(scalar_text(field, scalar)?.into_iter().collect()),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
