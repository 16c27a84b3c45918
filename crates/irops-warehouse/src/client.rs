//! REST statement execution against the warehouse.
//!
//! Statements go to the SQL API as JSON with positional bindings, and the
//! response's column metadata drives cell decoding. All values travel as
//! strings on the wire; the declared column type decides what they become.

use crate::profile::ConnectionProfile;
use async_trait::async_trait;
use irops_core::predicate::Statement;
use irops_core::table::{Cell, ResultTable};
use irops_core::{IropsError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const STATEMENTS_PATH: &str = "/api/v2/statements";
pub(crate) const TOKEN_TYPE_HEADER: &str = "X-Snowflake-Authorization-Token-Type";
pub(crate) const TOKEN_TYPE: &str = "PROGRAMMATIC_ACCESS_TOKEN";

/// Executes parameterized statements and returns decoded tables.
#[async_trait]
pub trait StatementGateway: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<ResultTable>;
}

/// HTTP client for one warehouse account.
#[derive(Clone)]
pub struct WarehouseClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
    database: String,
    schema: String,
    warehouse: String,
    role: Option<String>,
}

impl WarehouseClient {
    /// Creates a client from a resolved connection profile.
    pub fn new(profile: ConnectionProfile) -> Self {
        let base_url = profile.base_url();
        Self {
            client: Client::new(),
            base_url,
            token: profile.token,
            database: profile.database,
            schema: profile.schema,
            warehouse: profile.warehouse,
            role: profile.role,
        }
    }

    /// Creates a client from the ambient connection configuration.
    pub fn try_from_env() -> Result<Self> {
        ConnectionProfile::resolve().map(Self::new)
    }

    /// Overrides the endpoint after construction (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl StatementGateway for WarehouseClient {
    async fn execute(&self, statement: &Statement) -> Result<ResultTable> {
        let request = StatementRequest {
            statement: statement.text.clone(),
            database: self.database.clone(),
            schema: self.schema.clone(),
            warehouse: self.warehouse.clone(),
            role: self.role.clone(),
            bindings: encode_bindings(&statement.binds),
        };

        tracing::debug!(
            binds = statement.binds.len(),
            "submitting statement: {}",
            statement.text
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, STATEMENTS_PATH))
            .bearer_auth(&self.token)
            .header(TOKEN_TYPE_HEADER, TOKEN_TYPE)
            .json(&request)
            .send()
            .await
            .map_err(|err| IropsError::statement(format!("statement request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let parsed: StatementResponse = response.json().await.map_err(|err| {
            IropsError::statement(format!("failed to parse statement response: {err}"))
        })?;

        Ok(decode_table(parsed))
    }
}

#[derive(Serialize)]
struct StatementRequest {
    statement: String,
    database: String,
    schema: String,
    warehouse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bindings: Option<HashMap<String, BindValue>>,
}

#[derive(Serialize)]
struct BindValue {
    r#type: &'static str,
    value: String,
}

#[derive(Deserialize)]
struct StatementResponse {
    #[serde(rename = "resultSetMetaData")]
    result_set_meta_data: ResultSetMetaData,
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
}

#[derive(Deserialize)]
struct ResultSetMetaData {
    #[serde(rename = "rowType")]
    row_type: Vec<ColumnType>,
}

#[derive(Deserialize)]
struct ColumnType {
    name: String,
    #[serde(rename = "type")]
    column_type: String,
}

/// Positional bindings are a 1-based map on the wire.
fn encode_bindings(binds: &[String]) -> Option<HashMap<String, BindValue>> {
    if binds.is_empty() {
        return None;
    }

    Some(
        binds
            .iter()
            .enumerate()
            .map(|(i, value)| {
                (
                    (i + 1).to_string(),
                    BindValue {
                        r#type: "TEXT",
                        value: value.clone(),
                    },
                )
            })
            .collect(),
    )
}

fn decode_table(response: StatementResponse) -> ResultTable {
    let columns = response
        .result_set_meta_data
        .row_type
        .iter()
        .map(|column| column.name.clone())
        .collect();

    let mut table = ResultTable::new(columns);
    for raw_row in response.data {
        let row = raw_row
            .iter()
            .zip(&response.result_set_meta_data.row_type)
            .map(|(raw, column)| parse_cell(raw.as_deref(), &column.column_type))
            .collect();
        table.push_row(row);
    }
    table
}

fn parse_cell(raw: Option<&str>, declared: &str) -> Cell {
    let Some(raw) = raw else {
        return Cell::Null;
    };

    match declared.to_ascii_lowercase().as_str() {
        // `fixed` covers NUMBER columns with any scale.
        "fixed" => raw
            .parse::<i64>()
            .map(Cell::Int)
            .or_else(|_| raw.parse::<f64>().map(Cell::Float))
            .unwrap_or_else(|_| Cell::Text(raw.to_string())),
        "real" | "float" | "double" => raw
            .parse::<f64>()
            .map(Cell::Float)
            .unwrap_or_else(|_| Cell::Text(raw.to_string())),
        "boolean" => match raw {
            "true" => Cell::Bool(true),
            "false" => Cell::Bool(false),
            _ => Cell::Text(raw.to_string()),
        },
        _ => Cell::Text(raw.to_string()),
    }
}

fn map_http_error(status: StatusCode, body: &str) -> IropsError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    IropsError::statement(format!("statement request returned {status}: {message}"))
}
