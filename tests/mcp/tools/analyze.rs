use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use truthpulse::mcp::{TruthPulseMcpServer, types::AnalyzeTextParams};

use crate::{McpTestFixture, extract_tool_error_text, extract_tool_result_json};

fn params(text: &str, project_root_path: Option<String>) -> Parameters<AnalyzeTextParams> {
    Parameters(AnalyzeTextParams {
        text: text.to_string(),
        project_root_path,
    })
}

// ============================================================================
// analyze_text tests
// ============================================================================

#[tokio::test]
async fn test_analyze_text_builtin_tables() {
    let server = TruthPulseMcpServer::new();

    let result = server
        .analyze_text(params("Jobs are Vanishing fast!", None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["credibility"], "Moderately credible");
    assert_eq!(json_result["sources"].as_array().unwrap().len(), 2);
    assert_eq!(json_result["biasWordsFound"], json!(["vanishing"]));
    assert_eq!(json_result["sentiment"], "Negative");
    assert_eq!(json_result["neutralRewrite"], "Jobs are Declining fast!");
    assert_eq!(json_result["economicExplanations"], json!([]));
    assert!(json_result["supportMessage"].is_null());
    assert_eq!(json_result["flaggedSections"], json!(["credibility", "bias"]));
}

#[tokio::test]
async fn test_analyze_text_glossary_and_support() {
    let server = TruthPulseMcpServer::new();

    let result = server
        .analyze_text(params("I'm worried about inflation and GDP", None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let terms: Vec<&str> = json_result["economicExplanations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, vec!["inflation", "gdp"]);
    assert!(
        json_result["supportMessage"]
            .as_str()
            .unwrap()
            .contains("box-breathing")
    );
    assert_eq!(json_result["flaggedSections"], json!(["glossary", "support"]));
}

#[tokio::test]
async fn test_analyze_text_all_keywords_required() {
    let server = TruthPulseMcpServer::new();

    let partial = server
        .analyze_text(params("Trump met reporters", None))
        .await
        .unwrap();
    assert_eq!(
        extract_tool_result_json(&partial)["credibility"],
        "Not enough information"
    );

    let full = server
        .analyze_text(params(
            "Trump moves nuclear submarines closer to Russia",
            None,
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&full);
    assert_eq!(json_result["credibility"], "Unclear");
    assert_eq!(json_result["sources"][0], "https://www.reuters.com");
}

#[tokio::test]
async fn test_analyze_text_empty_input() {
    let server = TruthPulseMcpServer::new();

    let result = server.analyze_text(params(" \n\t", None)).await.unwrap();

    assert_eq!(
        extract_tool_error_text(&result),
        "Please enter some text to analyze."
    );
}

#[tokio::test]
async fn test_analyze_text_with_project_tables() {
    let fixture = McpTestFixture::with_config(&json!({
        "factPatterns": [
            {
                "keywords": ["moon landing"],
                "credibility": "Highly credible",
                "explanation": "Apollo 11 landed on the Moon in July 1969.",
                "sources": ["NASA"]
            }
        ],
        "emotionalWords": { "meltdown": "downturn" }
    }))
    .unwrap();
    let server = TruthPulseMcpServer::new();

    let result = server
        .analyze_text(params(
            "The moon landing caused a meltdown",
            Some(fixture.root()),
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["credibility"], "Highly credible");
    assert_eq!(json_result["sources"], json!(["NASA"]));
    assert_eq!(
        json_result["neutralRewrite"],
        "The moon landing caused a downturn"
    );
}

#[tokio::test]
async fn test_analyze_text_invalid_config() {
    let fixture = McpTestFixture::with_config(&json!({
        "factPatterns": [{ "keywords": [], "credibility": "False", "explanation": "x" }]
    }))
    .unwrap();
    let server = TruthPulseMcpServer::new();

    let result = server
        .analyze_text(params("anything", Some(fixture.root())))
        .await;

    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}
