// ABOUTME: SQLite value to PostgreSQL literal conversion
// ABOUTME: Classifies declared column types and formats NULL, boolean, numeric, and quoted text literals

use crate::error::ExportError;
use crate::sqlite::reader::ColumnDescriptor;
use rusqlite::types::Value;

/// How a column's values are rendered, derived from its declared type
///
/// NULL cells are handled before this dispatch and always render as `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Classify a declared column type, case-insensitively
    ///
    /// Rules, in order:
    /// - exactly `BOOLEAN` or `BOOL` → boolean
    /// - contains `INT` (`INTEGER`, `BIGINT`, `SMALLINT`, ...) → integer
    /// - exactly `REAL`, `FLOAT` or `DOUBLE` → float
    /// - anything else, including an empty type → text
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqlite_pg_export::sqlite::converter::ColumnKind;
    /// assert_eq!(ColumnKind::classify("bool"), ColumnKind::Boolean);
    /// assert_eq!(ColumnKind::classify("BIGINT"), ColumnKind::Integer);
    /// assert_eq!(ColumnKind::classify("VARCHAR(50)"), ColumnKind::Text);
    /// ```
    pub fn classify(declared_type: &str) -> Self {
        let upper = declared_type.to_uppercase();
        match upper.as_str() {
            "BOOLEAN" | "BOOL" => ColumnKind::Boolean,
            t if t.contains("INT") => ColumnKind::Integer,
            "REAL" | "FLOAT" | "DOUBLE" => ColumnKind::Float,
            _ => ColumnKind::Text,
        }
    }
}

/// Format a SQLite cell as a PostgreSQL literal for the given column
///
/// The result can be concatenated directly into a statement: text is always
/// quoted with embedded quotes doubled, and numeric or boolean output never
/// contains a quote.
///
/// # Errors
///
/// Returns `ExportError::TypeConversion` when an integer or float column
/// holds a value that cannot be read as a number.
///
/// # Examples
///
/// ```
/// # use sqlite_pg_export::sqlite::converter::format_value;
/// # use sqlite_pg_export::sqlite::reader::ColumnDescriptor;
/// # use rusqlite::types::Value;
/// let name = ColumnDescriptor::new("NOME", "TEXT");
/// let literal = format_value(&Value::Text("O'Brien".to_string()), &name).unwrap();
/// assert_eq!(literal, "'O''Brien'");
/// ```
pub fn format_value(value: &Value, column: &ColumnDescriptor) -> Result<String, ExportError> {
    if let Value::Null = value {
        return Ok("NULL".to_string());
    }

    match column.kind {
        ColumnKind::Boolean => Ok(format_boolean(value).to_string()),
        ColumnKind::Integer => integer_literal(value)
            .ok_or_else(|| ExportError::conversion(&column.name, "integer", describe(value))),
        ColumnKind::Float => float_value(value)
            .map(float_literal)
            .ok_or_else(|| ExportError::conversion(&column.name, "float", describe(value))),
        ColumnKind::Text => Ok(quote_literal(&stringify(value))),
    }
}

/// Quote text as a standard SQL string literal, doubling embedded single quotes
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Only `0`, `0.0`, `'0'`, `'false'` and `'FALSE'` are false.
/// Mixed-case spellings such as `'False'` are deliberately left true.
fn format_boolean(value: &Value) -> &'static str {
    let is_false = match value {
        Value::Integer(i) => *i == 0,
        Value::Real(f) => *f == 0.0,
        Value::Text(s) => matches!(s.as_str(), "0" | "false" | "FALSE"),
        Value::Null | Value::Blob(_) => false,
    };

    if is_false {
        "false"
    } else {
        "true"
    }
}

fn integer_literal(value: &Value) -> Option<String> {
    match value {
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) if f.is_finite() => {
            // Truncate toward zero; avoid printing "-0"
            let truncated = f.trunc();
            if truncated == 0.0 {
                Some("0".to_string())
            } else {
                Some(format!("{:.0}", truncated))
            }
        }
        Value::Real(_) => None,
        Value::Text(s) => parse_integer(s),
        Value::Blob(b) => std::str::from_utf8(b).ok().and_then(parse_integer),
        Value::Null => None,
    }
}

fn parse_integer(text: &str) -> Option<String> {
    text.trim().parse::<i128>().ok().map(|i| i.to_string())
}

fn float_value(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(f) => Some(*f),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Blob(b) => std::str::from_utf8(b)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok()),
        Value::Null => None,
    }
}

/// Shortest round-trip form, keeping a trailing `.0` on integral values.
/// PostgreSQL only accepts non-finite floats as quoted input strings.
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        quote_literal("NaN")
    } else if f.is_infinite() {
        quote_literal(if f > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        format!("{:?}", f)
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => format!("{:?}", f),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

/// Short rendering of a value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Text(s) => quote_literal(s),
        Value::Blob(b) => format!("blob of {} bytes", b.len()),
        other => stringify(other),
    }
}
