//! Declarative property-bag validation.
//!
//! A schema names the recognized fields and their rules; [`validate`] checks
//! an incoming bag against it and returns a sanitized bag containing only
//! recognized fields. Pure functions, no side effects.

use regex_lite::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Validation mode for a property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Validate only the fields present in the input (partial updates).
    Partial,
    /// Additionally fail if any required field is absent.
    Full,
}

/// Rules for a single recognized field.
///
/// `requirement` is the human-readable description quoted verbatim in every
/// failure for this field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub requirement: &'static str,
}

impl FieldSpec {
    /// Check a present value against this field's rules.
    ///
    /// Checks run in a fixed order: min-length, max-length, pattern. The
    /// first failing check wins.
    pub fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(ValidationError::invalid(field, "too short", self.requirement));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::invalid(field, "too long", self.requirement));
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(ValidationError::invalid(field, "format", self.requirement));
            }
        }
        Ok(())
    }
}

/// The recognized fields of an entity, in declaration order.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    fields: Vec<(&'static str, FieldSpec)>,
}

impl FieldSchema {
    pub fn new(fields: Vec<(&'static str, FieldSpec)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (*name, spec))
    }
}

/// Validate a property bag against a schema.
///
/// Returns a sanitized bag containing only recognized fields. A null or
/// empty value counts as absent; in `Full` mode an absent required field
/// fails as missing. Values must be strings; anything else fails the
/// field's format check.
pub fn validate(
    props: &Map<String, Value>,
    schema: &FieldSchema,
    mode: Mode,
) -> Result<Map<String, Value>, ValidationError> {
    let mut safe = Map::new();

    for (field, spec) in schema.fields() {
        match props.get(field) {
            None | Some(Value::Null) => {
                if spec.required && mode == Mode::Full {
                    return Err(ValidationError::missing(field));
                }
            }
            Some(Value::String(value)) if value.is_empty() => {
                if spec.required && mode == Mode::Full {
                    return Err(ValidationError::missing(field));
                }
            }
            Some(Value::String(value)) => {
                spec.check(field, value)?;
                safe.insert(field.to_string(), Value::String(value.clone()));
            }
            Some(_) => {
                return Err(ValidationError::invalid(field, "format", spec.requirement));
            }
        }
    }

    Ok(safe)
}
