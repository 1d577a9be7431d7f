use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::errors::AppError;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+$";
/// E.164-style: leading `+`, then 8-15 digits, first digit non-zero.
const PHONE_PATTERN: &str = r"^\+[1-9][0-9]{7,14}$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
}

impl FieldFormat {
    pub fn matches(self, value: &str) -> bool {
        match self {
            FieldFormat::Email => email_regex().is_match(value),
            FieldFormat::Phone => phone_regex().is_match(value),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Field layout of one entity type: which keys it accepts (all of them required
/// on create) and which of those carry a format rule.
#[derive(Debug)]
pub struct Schema {
    pub fields: &'static [&'static str],
    pub formats: &'static [(&'static str, FieldFormat)],
}

impl Schema {
    fn format_of(&self, field: &str) -> Option<FieldFormat> {
        self.formats
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, format)| *format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NotAString(&'static str),
    Empty(&'static str),
    Format(&'static str, FieldFormat),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAString(field) => write!(f, "Field '{field}' must be a string"),
            Violation::Empty(field) => write!(f, "Field '{field}' must not be empty"),
            Violation::Format(_, FieldFormat::Email) => write!(f, "Invalid email format"),
            Violation::Format(_, FieldFormat::Phone) => {
                write!(f, "Invalid phone format. (e.g., +1234567890)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{}", join_violations(.0))]
    Invalid(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Missing(fields) => {
                AppError::MissingFields(fields.into_iter().map(str::to_string).collect())
            }
            invalid @ ValidationError::Invalid(_) => AppError::InvalidField(invalid.to_string()),
        }
    }
}

/// Validated string values keyed by schema field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldSet(BTreeMap<&'static str, String>);

impl FieldSet {
    /// Removes and returns a field. Absent fields yield an empty string; after
    /// `validate_create` every schema field is present.
    pub fn take(&mut self, field: &str) -> String {
        self.0.remove(field).unwrap_or_default()
    }

    /// Overwrites `target` only when the field was supplied.
    pub fn assign(&mut self, field: &str, target: &mut String) {
        if let Some(value) = self.0.remove(field) {
            *target = value;
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.keys().copied().collect()
    }
}

/// Accepts a parsed request body only when it is a JSON object.
/// Anything else (absent, unparseable, `null`, array, scalar) is "no data".
pub fn require_object(body: Option<Value>) -> Result<Map<String, Value>, AppError> {
    match body {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(AppError::NoData),
    }
}

/// Create-time validation: every schema field must be a non-empty string,
/// then format rules apply. Absent, `null` and `""` are all reported as missing.
pub fn validate_create(
    schema: &Schema,
    body: &Map<String, Value>,
) -> Result<FieldSet, ValidationError> {
    let missing: Vec<&'static str> = schema
        .fields
        .iter()
        .copied()
        .filter(|field| is_blank(body.get(*field)))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::Missing(missing));
    }

    collect_fields(schema, body)
}

/// Update-time validation: only supplied fields are checked. `null` counts as
/// not supplied; an empty string is a violation rather than a clear.
pub fn validate_update(
    schema: &Schema,
    body: &Map<String, Value>,
) -> Result<FieldSet, ValidationError> {
    collect_fields(schema, body)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn collect_fields(
    schema: &Schema,
    body: &Map<String, Value>,
) -> Result<FieldSet, ValidationError> {
    let mut fields = FieldSet::default();
    let mut violations = Vec::new();

    for &field in schema.fields {
        match body.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => violations.push(Violation::Empty(field)),
            Some(Value::String(s)) => {
                match schema.format_of(field) {
                    Some(format) if !format.matches(s) => {
                        violations.push(Violation::Format(field, format))
                    }
                    _ => {}
                }
                fields.0.insert(field, s.clone());
            }
            Some(_) => violations.push(Violation::NotAString(field)),
        }
    }

    if violations.is_empty() {
        Ok(fields)
    } else {
        Err(ValidationError::Invalid(violations))
    }
}
