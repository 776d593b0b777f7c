//! Raw dataset entry -> validated [`ArticulationRecord`].
//!
//! Entries are shallow JSON objects using the field names of the published dataset:
//!
//! ```text
//! { region, departamento, escuela, orientacion,
//!   resultado: { ies, tecnicatura, direccion, web, color, neon, icono } }
//! ```
//!
//! Text is trimmed; empty text and the `N/D` sentinel count as absent. Numbers and
//! booleans are stringified first, anything else (objects, arrays, `null`) is absent.

use articula_kernel::domain::articulation::{ArticulationRecord, ArticulationResult};
use articula_kernel::domain::constants::{
    DEFAULT_COLOR, DEFAULT_HIGHLIGHT, DEFAULT_ICON, NOT_DEFINED,
};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

const REGION: &str = "region";
const DEPARTMENT: &str = "departamento";
const SCHOOL: &str = "escuela";
const ORIENTATION: &str = "orientacion";
const RESULT: &str = "resultado";
const INSTITUTE: &str = "ies";
const PROGRAM: &str = "tecnicatura";
const ADDRESS: &str = "direccion";
const WEBSITE: &str = "web";
const COLOR: &str = "color";
const HIGHLIGHT: &str = "neon";
const ICON: &str = "icono";

/// Why an entry was left out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    NotAnObject,
    Missing(&'static str),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("entry is not an object"),
            Self::Missing(field) => write!(f, "missing or undefined `{field}`"),
        }
    }
}

pub(crate) fn normalize(raw: &Value) -> Result<ArticulationRecord, Rejection> {
    let entry = raw.as_object().ok_or(Rejection::NotAnObject)?;
    let result = entry.get(RESULT).and_then(Value::as_object);
    let nested = |key: &str| result.and_then(|r| clean(r.get(key)));

    let record = ArticulationRecord {
        region: required(entry, REGION)?,
        department: required(entry, DEPARTMENT)?,
        school: required(entry, SCHOOL)?,
        orientation: required(entry, ORIENTATION)?,
        result: ArticulationResult {
            institute: nested(INSTITUTE).ok_or(Rejection::Missing("resultado.ies"))?,
            program: nested(PROGRAM).ok_or(Rejection::Missing("resultado.tecnicatura"))?,
            address: nested(ADDRESS).unwrap_or_default(),
            website: nested(WEBSITE),
            display_color: nested(COLOR).unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
            highlight_effect: nested(HIGHLIGHT).unwrap_or_else(|| DEFAULT_HIGHLIGHT.to_owned()),
            icon_key: nested(ICON).unwrap_or_else(|| DEFAULT_ICON.to_owned()),
        },
    };

    Ok(record)
}

fn required(entry: &Map<String, Value>, key: &'static str) -> Result<String, Rejection> {
    clean(entry.get(key)).ok_or(Rejection::Missing(key))
}

fn clean(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    let trimmed = text.trim();
    (!trimmed.is_empty() && trimmed != NOT_DEFINED).then(|| trimmed.to_owned())
}
