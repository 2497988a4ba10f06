//! Scalar input values and their stored form
//!
//! Cells persist every payload as a string plus a [`CellType`] tag telling
//! the serializer how to interpret it. [`ScalarValue`] is the closed set of
//! source kinds a caller can hand in; [`ScalarValue::convert`] produces the
//! stored pair. Conversion is deterministic, locale-independent, and cannot
//! fail: kinds outside the closed set are captured up front as their
//! [`Display`](std::fmt::Display) rendering.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

/// Days from the sheet epoch (1899-12-30) to the Unix epoch.
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How a cell's serialized value should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Preallocated cell that has not been written yet
    #[default]
    Empty,
    /// Numeric payload: integers, floats, day fractions, date serials
    Number,
    /// Plain text
    String,
    /// `"true"` / `"false"`
    Boolean,
    /// Error literal such as `"#VALUE!"`
    Error,
}

impl CellType {
    /// Type name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            CellType::Empty => "empty",
            CellType::Number => "numeric",
            CellType::String => "string",
            CellType::Boolean => "boolean",
            CellType::Error => "error",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed input value destined for one cell
///
/// Every supported source kind has its own variant; anything else enters
/// through [`ScalarValue::rendered`], which freezes the value's textual
/// form at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// No value; stored as an empty string
    Empty,
    /// Boolean
    Bool(bool),
    /// Signed integer (any width up to 64 bits)
    Int(i64),
    /// Unsigned integer (any width up to 64 bits)
    Uint(u64),
    /// 32-bit float; serialized at its own precision class
    Float32(f32),
    /// 64-bit float
    Float64(f64),
    /// Text, stored verbatim (no escaping at this layer)
    Text(String),
    /// Byte buffer, interpreted as UTF-8 text (lossy)
    Bytes(Vec<u8>),
    /// Elapsed time, serialized as a fraction of a 24-hour day
    Duration(Duration),
    /// Point in time, serialized as a sheet epoch serial number
    Timestamp(DateTime<Utc>),
    /// Fallback: an arbitrary value captured as its `Display` rendering
    Rendered(String),
}

impl ScalarValue {
    /// Capture any displayable value as its textual rendering.
    pub fn rendered<T: fmt::Display>(value: T) -> Self {
        ScalarValue::Rendered(value.to_string())
    }

    /// Serialize to the stored `(text, type tag)` pair.
    ///
    /// # Examples
    /// ```
    /// use rowforge_core::{CellType, ScalarValue};
    ///
    /// assert_eq!(ScalarValue::from(3.14).convert(), ("3.14".into(), CellType::Number));
    /// assert_eq!(ScalarValue::from(true).convert(), ("true".into(), CellType::Boolean));
    /// assert_eq!(ScalarValue::Empty.convert(), ("".into(), CellType::String));
    /// ```
    pub fn convert(&self) -> (String, CellType) {
        match self {
            ScalarValue::Empty => (String::new(), CellType::String),
            ScalarValue::Bool(v) => (v.to_string(), CellType::Boolean),
            ScalarValue::Int(v) => (v.to_string(), CellType::Number),
            ScalarValue::Uint(v) => (v.to_string(), CellType::Number),
            ScalarValue::Float32(v) => (v.to_string(), CellType::Number),
            ScalarValue::Float64(v) => (v.to_string(), CellType::Number),
            ScalarValue::Text(s) => (s.clone(), CellType::String),
            ScalarValue::Bytes(b) => (String::from_utf8_lossy(b).into_owned(), CellType::String),
            ScalarValue::Duration(d) => (day_fraction(*d).to_string(), CellType::Number),
            ScalarValue::Timestamp(t) => (epoch_serial(t).to_string(), CellType::Number),
            ScalarValue::Rendered(s) => (s.clone(), CellType::String),
        }
    }

    /// Check if this is the empty value
    pub fn is_empty(&self) -> bool {
        matches!(self, ScalarValue::Empty)
    }
}

impl Default for ScalarValue {
    fn default() -> Self {
        ScalarValue::Empty
    }
}

/// Elapsed time as a fraction of a 24-hour day, at f32 precision.
fn day_fraction(d: Duration) -> f32 {
    (d.as_secs_f64() / SECONDS_PER_DAY) as f32
}

/// Sheet epoch serial number (1900 date system) for a UTC timestamp.
fn epoch_serial(t: &DateTime<Utc>) -> f64 {
    let seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9;
    seconds / SECONDS_PER_DAY + UNIX_EPOCH_SERIAL
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i8> for ScalarValue {
    fn from(v: i8) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<i16> for ScalarValue {
    fn from(v: i16) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<isize> for ScalarValue {
    fn from(v: isize) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<u8> for ScalarValue {
    fn from(v: u8) -> Self {
        ScalarValue::Uint(v as u64)
    }
}

impl From<u16> for ScalarValue {
    fn from(v: u16) -> Self {
        ScalarValue::Uint(v as u64)
    }
}

impl From<u32> for ScalarValue {
    fn from(v: u32) -> Self {
        ScalarValue::Uint(v as u64)
    }
}

impl From<u64> for ScalarValue {
    fn from(v: u64) -> Self {
        ScalarValue::Uint(v)
    }
}

impl From<usize> for ScalarValue {
    fn from(v: usize) -> Self {
        ScalarValue::Uint(v as u64)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::Float32(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float64(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

impl From<&[u8]> for ScalarValue {
    fn from(b: &[u8]) -> Self {
        ScalarValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(b: Vec<u8>) -> Self {
        ScalarValue::Bytes(b)
    }
}

impl From<Duration> for ScalarValue {
    fn from(d: Duration) -> Self {
        ScalarValue::Duration(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ScalarValue {
    fn from(t: DateTime<Tz>) -> Self {
        ScalarValue::Timestamp(t.with_timezone(&Utc))
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Empty, Into::into)
    }
}
