use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, FUNCTIONS_RULES, stderr, stdout};

#[test]
fn test_check_clean_tree() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("src/a.cpp", "// note: hi\nvoid run()\n\n// plain comment\nint x;\n")?;

    let output = test.check_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stdout(&output).contains("Scanned 1 source file, collected 1 record - no issues found")
    );

    Ok(())
}

#[test]
fn test_check_fails_on_unmatched_block() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file(
        "src/a.cpp",
        "// note: ok\nvoid run()\n\n// note: a global\nint counter;\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("warning: Comment block did not match any rule  unmatched-block"));
    assert!(out.contains("--> a.cpp:4"));
    assert!(out.contains("code after comment: \"int counter;\""));
    assert!(out.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_check_json_prints_buckets() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file(
        "src/a.cpp",
        "// note: Runs.\n// purpose: demo\nvoid run(int n)\n",
    )?;

    let output = test.check_command().arg("--json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        parsed,
        json!({
            "functions": [
                { "name": "run", "note": "Runs.", "purpose": "demo" }
            ]
        })
    );

    Ok(())
}

#[test]
fn test_check_ignore_pattern() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("src/a.cpp", "// note: ok\nvoid run()\n")?;
    test.write_file("src/vendor/lib.cpp", "// note: a global\nint counter;\n")?;

    let failing = test.check_command().output()?;
    assert_eq!(failing.status.code(), Some(1));

    let output = test.check_command().args(["--ignore", "vendor"]).output()?;
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_check_skips_hidden_directories() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("src/.cache/gen.cpp", "// note: a global\nint counter;\n")?;
    test.write_file("src/a.cpp", "// note: ok\nvoid run()\n")?;

    let output = test.check_command().output()?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_check_missing_rule_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read rule file"));

    Ok(())
}

#[test]
fn test_check_template_path_from_env() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("src/a.cpp", "// note: hi\nvoid run()\n")?;

    let output = test
        .command()
        .env("FEATHER_TEMPLATE_PATH", "docs")
        .args(["check", "--source-root", "src"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("generate"));
    assert!(out.contains("check"));
    assert!(out.contains("init"));

    Ok(())
}
