//! SQL gateway port
//!
//! Defines the interface for sending one SQL statement to the remote
//! database and getting its rows back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway misconfigured: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode gateway response: {0}")]
    Decode(String),

    #[error("Statement returned no rows")]
    EmptyResult,

    #[error("Column missing from result: {0}")]
    MissingColumn(String),

    #[error("Unexpected value in column {column}: {value}")]
    UnexpectedValue { column: String, value: String },
}

/// A scalar statement parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::Int(n.into())
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

impl From<f64> for SqlValue {
    fn from(n: f64) -> Self {
        SqlValue::Float(n)
    }
}

/// One SQL statement with positional (`$1`, `$2`, ...) parameters.
///
/// Serializes to the gateway request body; `params` is omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlStatement {
    pub query: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<SqlValue>,
}

impl SqlStatement {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Vec::new(),
        }
    }

    /// Append the next positional parameter
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// One result row: column name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    fn value(&self, column: &str) -> Result<&Value, GatewayError> {
        self.0
            .get(column)
            .ok_or_else(|| GatewayError::MissingColumn(column.to_string()))
    }

    fn unexpected(column: &str, value: &Value) -> GatewayError {
        GatewayError::UnexpectedValue {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Text column; numbers are rendered as text (synthetic ids may be either).
    pub fn text(&self, column: &str) -> Result<String, GatewayError> {
        match self.value(column)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Self::unexpected(column, other)),
        }
    }

    /// Nullable text column
    pub fn opt_text(&self, column: &str) -> Result<Option<String>, GatewayError> {
        match self.value(column)? {
            Value::Null => Ok(None),
            _ => self.text(column).map(Some),
        }
    }

    /// Integer column. `bigint` aggregates arrive as decimal strings.
    pub fn int(&self, column: &str) -> Result<i64, GatewayError> {
        let value = self.value(column)?;
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| Self::unexpected(column, value)),
            Value::String(s) => s.trim().parse().map_err(|_| Self::unexpected(column, value)),
            other => Err(Self::unexpected(column, other)),
        }
    }

    /// Non-negative integer column (counts)
    pub fn count(&self, column: &str) -> Result<u64, GatewayError> {
        let n = self.int(column)?;
        u64::try_from(n).map_err(|_| Self::unexpected(column, &Value::from(n)))
    }

    /// Real column. `numeric` values arrive as decimal strings.
    pub fn float(&self, column: &str) -> Result<f64, GatewayError> {
        let value = self.value(column)?;
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| Self::unexpected(column, value)),
            Value::String(s) => s.trim().parse().map_err(|_| Self::unexpected(column, value)),
            other => Err(Self::unexpected(column, other)),
        }
    }

    /// Boolean column
    pub fn boolean(&self, column: &str) -> Result<bool, GatewayError> {
        let value = self.value(column)?;
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "t" || s == "true" => Ok(true),
            Value::String(s) if s == "f" || s == "false" => Ok(false),
            other => Err(Self::unexpected(column, other)),
        }
    }
}

/// Parsed gateway response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    #[serde(rename = "rowCount", default)]
    pub row_count: Option<u64>,
}

impl QueryResult {
    /// First row, for statements expected to return exactly one
    pub fn first(&self) -> Result<&Row, GatewayError> {
        self.rows.first().ok_or(GatewayError::EmptyResult)
    }

    /// Rows affected by a DML statement (0 when the gateway omits it)
    pub fn rows_affected(&self) -> u64 {
        self.row_count.unwrap_or(0)
    }
}

/// Gateway for SQL execution
///
/// One call is one network round trip. Implementations live in the
/// infrastructure layer.
#[async_trait]
pub trait SqlGateway: Send + Sync {
    async fn execute(&self, statement: SqlStatement) -> Result<QueryResult, GatewayError>;
}
