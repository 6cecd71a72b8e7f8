use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run_with_stdin, stderr, stdout};

#[test]
fn test_bias_section() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .analyze_command()
        .args(["Jobs", "are", "Vanishing", "fast!", "--section", "bias"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Bias Detection & Neutral Rewrite\n\
         ────────────────────────────────\n\
         The statement uses emotionally charged language: vanishing.\n\
         Overall Sentiment: Negative\n\
         Neutral Rewrite: Jobs are Declining fast!\n\
         \n\
         ✘ 1 of 1 section flagged (bias)\n"
    );

    Ok(())
}

#[test]
fn test_all_sections() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .analyze_command()
        .arg("The weather is nice")
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.starts_with("Fact-Check Result\n"));
    assert!(out.contains("Credibility: Not enough information\n"));
    assert!(out.contains("No obvious emotionally charged language detected.\n"));
    assert!(out.contains("Overall Sentiment: Neutral\n"));
    assert!(out.contains("Neutral Rewrite: The weather is nice\n"));
    assert!(out.contains("No specific economic terms detected.\n"));
    assert!(out.contains("No mental health concerns detected in your input.\n"));
    assert!(out.ends_with("✓ Nothing flagged\n"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .analyze_command()
        .args(["--format", "json", "I feel anxious about the news"])
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["credibility"], "Not enough information");
    assert_eq!(json["sources"], serde_json::json!([]));
    assert_eq!(json["sentiment"], "Neutral");
    assert!(
        json["supportMessage"]
            .as_str()
            .unwrap()
            .contains("box-breathing")
    );

    Ok(())
}

#[test]
fn test_json_support_message_null() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .analyze_command()
        .args(["--format", "json", "The weather is nice"])
        .output()?;

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert!(json["supportMessage"].is_null());

    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.analyze_command().arg("   ").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("warning: Please enter some text to analyze."));

    Ok(())
}

#[test]
fn test_empty_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.analyze_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please enter some text to analyze."));

    Ok(())
}

#[test]
fn test_markdown_from_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.analyze_command();
    cmd.args(["--format", "markdown", "--section", "glossary"]);
    let output = run_with_stdin(cmd, "What is the current GDP and inflation rate?\n")?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.starts_with("### Economic Clarity Explanation\n\n- **Inflation**: "));
    let inflation = out.find("**Inflation**").unwrap();
    let gdp = out.find("**Gdp**").unwrap();
    assert!(inflation < gdp);

    Ok(())
}

#[test]
fn test_text_from_file() -> Result<()> {
    let test = CliTest::with_file("headline.txt", "They say vaccines cause autism.\n")?;

    let output = test
        .analyze_command()
        .args(["--file", "headline.txt", "--section", "credibility"])
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Credibility: False\n"));
    assert!(out.contains("Sources:\n  - Johns Hopkins Bloomberg School of Public Health"));

    Ok(())
}

#[test]
fn test_missing_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .analyze_command()
        .args(["--file", "nope.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));

    Ok(())
}

#[test]
fn test_config_tables() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".truthpulserc.json",
        r#"{
            "emotionalWords": { "meltdown": "downturn" },
            "anxietyKeywords": ["dread"]
        }"#,
    )?;

    let output = test
        .analyze_command()
        .args(["--format", "json", "Market Meltdown fills me with dread"])
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["biasWordsFound"], serde_json::json!(["meltdown"]));
    assert_eq!(json["neutralRewrite"], "Market Downturn fills me with dread");
    assert!(json["supportMessage"].is_string());

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".truthpulserc.json",
        r#"{ "emotionalWords": { "meltdown": "downturn" } }"#,
    )?;
    test.write_file("drafts/.keep", "")?;

    let output = test
        .analyze_command()
        .args(["--format", "json", "--path"])
        .arg(test.root().join("drafts"))
        .arg("meltdown")
        .output()?;

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["neutralRewrite"], "downturn");

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".truthpulserc.json",
        r#"{ "positiveWords": ["growth"], "negativeWords": ["growth"] }"#,
    )?;

    let output = test.analyze_command().arg("growth").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Invalid config file"));
    assert!(err.contains("growth"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("analyze"));
    assert!(out.contains("batch"));
    assert!(out.contains("init"));
    assert!(out.contains("serve"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
