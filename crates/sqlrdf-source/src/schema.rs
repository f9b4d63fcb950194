//! Column descriptors and row values.

use std::fmt::Write as _;

use rusqlite::types::ValueRef;

// ── Columns ───────────────────────────────────────────────────────

/// Primitive type inferred from a column's declared storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Text,
    Unknown,
}

impl ColumnType {
    /// Map a declared type string: `INTEGER` and `TEXT` (any case) are
    /// recognised, everything else (including no declared type) is `Unknown`.
    pub fn from_declared(declared: &str) -> Self {
        let declared = declared.trim();
        if declared.eq_ignore_ascii_case("INTEGER") {
            Self::Integer
        } else if declared.eq_ignore_ascii_case("TEXT") {
            Self::Text
        } else {
            Self::Unknown
        }
    }
}

/// One column of a table, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name with `-` replaced by `_`.
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: &str, declared_type: &str) -> Self {
        Self {
            name: name.replace('-', "_"),
            column_type: ColumnType::from_declared(declared_type),
        }
    }
}

// ── Values ────────────────────────────────────────────────────────

/// A single stored value, as SQLite hands it back.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce to an integer the way a loose `int()` would: integers as-is,
    /// reals truncated toward zero, text parsed after trimming.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Real(f) if f.is_finite() => Some(f.trunc() as i64),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Interpret the value as a row identifier. Unlike [`Value::to_integer`]
    /// nothing is truncated or trimmed. Reals count only when integral, text
    /// only when it is exactly an integer.
    pub fn to_identifier(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Real(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && *f >= i64::MIN as f64
                    && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Lexical form of a non-null value. Blobs are rendered as lowercase hex.
    pub fn lexical(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::Blob(bytes) => {
                let mut hex = String::with_capacity(bytes.len() * 2);
                for b in bytes {
                    let _ = write!(hex, "{b:02x}");
                }
                Some(hex)
            }
        }
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

// ── Rows ──────────────────────────────────────────────────────────

/// One table row; position `i` holds the value of column `i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

// ── Tables ────────────────────────────────────────────────────────

/// A table read in full: its columns and every row aligned to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Position of the column called `name`, compared exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Pairs of column and value for one row; short rows yield fewer pairs.
    pub fn cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = (&'a Column, &'a Value)> {
        self.columns.iter().zip(row.values())
    }
}
