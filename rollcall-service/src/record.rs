// Record model
// Records are kept exactly as they appear in the asset and stringified on demand

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One raw field of a record, as found in the JSON asset.
///
/// Absent fields are stored as `Null`. Nothing is validated or coerced at load
/// time; conversion to text happens when a field is matched or displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValue(pub Value);

impl FieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Blank values never take part in matching: null, `false`, zero and the
    /// empty string.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null | Value::Bool(false) => true,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// Text used when matching a query against this field.
    pub fn match_text(&self) -> String {
        coerce(&self.0)
    }

    /// Text shown to the user. Null and booleans render blank.
    pub fn display_text(&self) -> String {
        display(&self.0)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) => String::new(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display).collect(),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // Same shape a browser prints: plain decimals in [1e-6, 1e21), exponent
    // form outside, whole floats without a fractional part
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_text(f),
        Some(f) if f.fract() == 0.0 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_text(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

// =============================================================================
// Record
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Nic,
    Address,
}

impl Field {
    /// Display order used by both the table and the card layouts
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Nic, Field::Address];

    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Nic => "NIC",
            Field::Address => "Address",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Nic => "nic",
            Field::Address => "address",
        }
    }
}

/// A voter/customer entry. Identity is the record's position in the loaded
/// list; `id` is just another field and may repeat or be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub id: FieldValue,
    pub name: FieldValue,
    pub nic: FieldValue,
    pub address: FieldValue,
}

impl Record {
    pub fn new(
        id: impl Into<Value>,
        name: impl Into<Value>,
        nic: impl Into<Value>,
        address: impl Into<Value>,
    ) -> Self {
        Self {
            id: FieldValue::new(id),
            name: FieldValue::new(name),
            nic: FieldValue::new(nic),
            address: FieldValue::new(address),
        }
    }

    pub fn field(&self, field: Field) -> &FieldValue {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Nic => &self.nic,
            Field::Address => &self.address,
        }
    }
}

impl From<Value> for Record {
    /// Entries that are not objects become an all-blank record instead of an
    /// error.
    fn from(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };
        let mut take = |field: Field| FieldValue(map.remove(field.key()).unwrap_or(Value::Null));
        Self {
            id: take(Field::Id),
            name: take(Field::Name),
            nic: take(Field::Nic),
            address: take(Field::Address),
        }
    }
}
