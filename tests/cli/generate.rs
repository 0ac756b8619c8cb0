use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, FUNCTIONS_RULES, stderr, stdout};

const TEMPLATE: &str =
    "# Functions\n{% for f in functions %}- `{{ f.name }}`: {{ f.note }}{% if f.purpose %} ({{ f.purpose }}){% endif %}\n{% endfor %}";

#[test]
fn test_generate_writes_markdown() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", TEMPLATE)?;
    test.write_file(
        "src/engine.cpp",
        "#include <engine.h>\n\
         \n\
         // note: Starts the engine.\n\
         // purpose: boot\n\
         void start(int speed) {}\n\
         \n\
         /*\n\
          * note: Stops it.\n\
          */\n\
         bool stop() { return true; }\n",
    )?;
    test.write_file("src/notes.txt", "// note: not scanned\nvoid skipped()\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("out/api.md")?,
        "# Functions\n- `start`: Starts the engine. (boot)\n- `stop`: Stops it.\n"
    );
    let out = stdout(&output);
    assert!(out.contains("Collected 2 records in 1 list"));
    assert!(out.contains("Templates written: 1"));

    Ok(())
}

#[test]
fn test_generate_records_follow_file_order() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", TEMPLATE)?;
    test.write_file("src/b.cpp", "// note: second\nvoid beta()\n")?;
    test.write_file("src/a/z.hpp", "// note: first\nvoid alpha()\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("out/api.md")?,
        "# Functions\n- `alpha`: first\n- `beta`: second\n"
    );

    Ok(())
}

#[test]
fn test_generate_warns_but_succeeds_on_unmatched_block() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", TEMPLATE)?;
    test.write_file("src/vars.cpp", "// note: a global\nint counter;\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("warning: Comment block did not match any rule"));
    assert!(out.contains("--> vars.cpp:1"));
    assert_eq!(test.read_file("out/api.md")?, "# Functions\n");

    Ok(())
}

#[test]
fn test_generate_verbose_lists_records() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", TEMPLATE)?;
    test.write_file("src/a.cpp", "// note: hi\nvoid run()\n")?;

    let output = test.generate_command().arg("-v").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("info: Got entry for list 'functions'"));

    Ok(())
}

#[test]
fn test_generate_invalid_pattern_fails_with_file_error() -> Result<()> {
    let test = CliTest::with_rules("$ENTRY\nlist=broken\nprops=note\next=cpp\nformat=(\n$END\n")?;
    test.write_file("docs/api.jinja2", "static")?;
    test.write_file("src/a.cpp", "// note: x\nvoid f()\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: "));
    assert!(out.contains("Invalid code pattern for list 'broken'"));
    assert!(out.contains("file-error"));

    Ok(())
}

#[test]
fn test_generate_bad_rule_file_is_fatal() -> Result<()> {
    let test = CliTest::with_rules("$ENTRY\nlist=functions\ncolour=blue\n$END\n")?;
    test.write_file("src/a.cpp", "// note: x\nvoid f()\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: "));
    assert!(err.contains("Unrecognized key 'colour' on line 3"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_generate_template_error_is_fatal() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", "{% for f in %}")?;
    test.write_file("src/a.cpp", "// note: x\nvoid f()\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("api.jinja2"));

    Ok(())
}

#[test]
fn test_generate_accepts_underscore_aliases() -> Result<()> {
    let test = CliTest::with_rules(FUNCTIONS_RULES)?;
    test.write_file("docs/api.jinja2", TEMPLATE)?;
    test.write_file("src/a.cpp", "// note: hi\nvoid run()\n")?;

    let output = test
        .command()
        .args([
            "generate",
            "--template_path",
            "docs",
            "--output_path",
            "out",
            "--source-root",
            "src",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("out/api.md").exists());

    Ok(())
}
