//! Warehouse-side agent registration.
//!
//! Provisions the IROPS assistant agent next to the semantic model it
//! queries. Unlike dashboard reads, registration is administrative and
//! loud: every failure propagates to the caller.

use crate::client::StatementGateway;
use irops_core::predicate::Statement;
use irops_core::table::ResultTable;
use irops_core::{IropsError, Result};
use serde::Serialize;
use std::collections::HashMap;

const AGENT_NAME: &str = "PHANTOM_IROPS.SEMANTIC_MODELS.IROPS_ASSISTANT";
const SEMANTIC_VIEW: &str = "PHANTOM_IROPS.SEMANTIC_MODELS.IROPS_ANALYTICS";
const AGENT_COMMENT: &str = "IROPS Assistant for Phantom Airlines";

/// Declarative agent definition, serialized into the registration DDL.
#[derive(Debug, Clone, Serialize)]
pub struct AgentSpec {
    pub models: AgentModels,
    pub instructions: AgentInstructions,
    pub tools: Vec<AgentTool>,
    pub tool_resources: HashMap<String, ToolResource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentModels {
    pub orchestration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentInstructions {
    pub orchestration: String,
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentTool {
    pub tool_spec: ToolSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub r#type: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolResource {
    pub semantic_view: String,
}

impl AgentSpec {
    /// The assistant wired to the IROPS analytics semantic view.
    pub fn irops_assistant() -> Self {
        let mut tool_resources = HashMap::new();
        tool_resources.insert(
            "irops_analytics".to_string(),
            ToolResource {
                semantic_view: SEMANTIC_VIEW.to_string(),
            },
        );

        Self {
            models: AgentModels {
                orchestration: "auto".to_string(),
            },
            instructions: AgentInstructions {
                orchestration: "You are an IROPS (Irregular Operations) Assistant for Phantom \
                                Airlines. Your role is to help airline operations staff manage \
                                disruptions, crew assignments, and aircraft availability. Focus \
                                on actionable information for operational decision-making."
                    .to_string(),
                response: "Format responses as clear, scannable information with bullet points. \
                           Highlight critical information and include relevant counts and metrics."
                    .to_string(),
            },
            tools: vec![AgentTool {
                tool_spec: ToolSpec {
                    r#type: "cortex_analyst_text_to_sql".to_string(),
                    name: "irops_analytics".to_string(),
                    description: "Query IROPS operational data including flights, disruptions, \
                                  crew availability, and aircraft status."
                        .to_string(),
                },
            }],
            tool_resources,
        }
    }
}

/// Registers `spec` under the assistant's name and returns its description.
pub async fn register_agent<G: StatementGateway>(
    gateway: &G,
    spec: &AgentSpec,
) -> Result<ResultTable> {
    let spec_json = serde_json::to_string(spec)
        .map_err(|err| IropsError::internal(format!("failed to serialize agent spec: {err}")))?;

    // DDL takes the spec as a string literal; single quotes must be doubled.
    let escaped = spec_json.replace('\'', "''");
    let create = Statement::new(format!(
        "CREATE AGENT {AGENT_NAME} AGENT_SPEC = '{escaped}' COMMENT = '{AGENT_COMMENT}'"
    ));

    tracing::info!("registering agent {AGENT_NAME}");
    gateway.execute(&create).await?;

    let describe = Statement::new(format!("DESCRIBE AGENT {AGENT_NAME}"));
    gateway.execute(&describe).await
}
