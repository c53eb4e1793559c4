//! SQL-over-HTTP gateway client
//!
//! Each statement is one HTTPS POST of `{"query", "params"}`; the response
//! body is `{"rows": [...], "rowCount": n}`.

use crate::config::GatewayConfig;
use async_trait::async_trait;
use questionnaire_application::ports::sql_gateway::{
    GatewayError, QueryResult, SqlGateway, SqlStatement,
};
use questionnaire_domain::core::string::truncate;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use tracing::{debug, info};

/// Longest error body kept in a `GatewayError::Status`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Gateway adapter over `reqwest` with default TLS validation
pub struct HttpSqlGateway {
    client: reqwest::Client,
    endpoint: String,
    connection_header: HeaderName,
    connection_string: HeaderValue,
}

impl HttpSqlGateway {
    /// Create a gateway with a fresh client
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;
        Self::with_client(client, config)
    }

    /// Create a gateway with an existing client
    pub fn with_client(
        client: reqwest::Client,
        config: &GatewayConfig,
    ) -> Result<Self, GatewayError> {
        let connection_header = HeaderName::from_bytes(config.connection_header.as_bytes())
            .map_err(|e| {
                GatewayError::Configuration(format!(
                    "invalid header name {:?}: {}",
                    config.connection_header, e
                ))
            })?;

        let mut connection_string = HeaderValue::from_str(&config.connection_string)
            .map_err(|_| {
                GatewayError::Configuration(
                    "connection string contains characters not allowed in a header".to_string(),
                )
            })?;
        connection_string.set_sensitive(true);

        info!("HttpSqlGateway initialized for {}", config.endpoint);

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            connection_header,
            connection_string,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse a gateway response body
pub fn decode_response(body: &str) -> Result<QueryResult, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn first_line(query: &str) -> &str {
    query.trim().lines().next().unwrap_or("")
}

#[async_trait]
impl SqlGateway for HttpSqlGateway {
    async fn execute(&self, statement: SqlStatement) -> Result<QueryResult, GatewayError> {
        debug!(
            params = statement.params.len(),
            "Executing: {}",
            first_line(&statement.query)
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(self.connection_header.clone(), self.connection_string.clone())
            .json(&statement)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let result = decode_response(&body)?;
        debug!(
            rows = result.rows.len(),
            row_count = ?result.row_count,
            "Statement complete"
        );
        Ok(result)
    }
}
