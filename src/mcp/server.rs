use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{ConfigLoadResult, load_config},
    core::{Analyzer, ReferenceTables},
    findings::{Finding, Report},
};

use super::types::{AnalyzeTextParams, AnalyzeTextResult, GetTablesParams, TablesDto};

#[derive(Clone)]
pub struct TruthPulseMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TruthPulseMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TruthPulseMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Analyze a statement with every pass
    #[tool(
        description = "Analyze a headline or statement: credibility rating with sources, emotionally charged words, sentiment, a neutral rewrite, economic term definitions and a supportive message when anxiety is detected."
    )]
    pub async fn analyze_text(
        &self,
        params: Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let analyzer = match &params.0.project_root_path {
            Some(path) => {
                let loaded = load(path)?;
                Analyzer::new(ReferenceTables::from_config(loaded.config))
            }
            None => Analyzer::default(),
        };

        let result = match analyzer.run_all(&params.0.text) {
            Ok(result) => result,
            Err(err) => {
                return Ok(CallToolResult::error(vec![Content::text(err.to_string())]));
            }
        };

        let flagged_sections = Finding::from_result(&result)
            .iter()
            .filter(|f| f.flagged())
            .map(|f| f.kind().to_string())
            .collect();

        to_json_result(&AnalyzeTextResult {
            result,
            flagged_sections,
        })
    }

    /// Get the effective reference tables
    #[tool(
        description = "Get the reference tables (fact patterns, emotional words, lexicons, glossary, anxiety keywords) in effect for a project directory."
    )]
    pub async fn get_tables(
        &self,
        params: Parameters<GetTablesParams>,
    ) -> Result<CallToolResult, McpError> {
        let loaded = load(&params.0.project_root_path)?;

        to_json_result(&TablesDto {
            from_file: loaded.from_file,
            config: loaded.config,
        })
    }
}

fn load(path: &str) -> Result<ConfigLoadResult, McpError> {
    load_config(Path::new(path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TruthPulseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "TruthPulse annotates short news headlines and statements with rule-based checks.\n\n\
                 Available tools:\n\
                 1. analyze_text - Credibility, charged language and neutral rewrite, economic terms, supportive message\n\
                 2. get_tables - Reference tables in effect for a project directory\n\n\
                 The checks are lexical lookups against static tables, not live fact-checking.\n\
                 Present the credibility rating together with its sources."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::debug!("starting MCP server on stdio");
            let service = TruthPulseMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
