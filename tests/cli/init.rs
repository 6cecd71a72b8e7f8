use anyhow::Result;
use truthpulse::config::{CONFIG_FILE_NAME, Config};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_writes_builtin_tables() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .truthpulserc.json"));

    let content = test.read_file(CONFIG_FILE_NAME)?;
    let config: Config = serde_json::from_str(&content)?;
    assert!(config.validate().is_ok());
    assert_eq!(
        config.fact_patterns,
        truthpulse::core::defaults::default_fact_patterns()
    );

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(CONFIG_FILE_NAME, "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(CONFIG_FILE_NAME)?, "{}");

    Ok(())
}

#[test]
fn test_init_output_is_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test
        .analyze_command()
        .args(["-v", "Jobs are Vanishing fast!"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Neutral Rewrite: Jobs are Declining fast!"));
    assert!(!stderr(&output).contains("No .truthpulserc.json found"));

    Ok(())
}
