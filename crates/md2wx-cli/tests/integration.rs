//! Integration tests for the md2wx binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn md2wx_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_md2wx"))
}

/// Run md2wx on a fixture file and return the output
fn convert_fixture(name: &str, args: &[&str]) -> String {
    let input = fixtures_dir().join(format!("{}.md", name));
    // Use a unique temp file for each invocation to avoid race conditions
    let unique_id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let output = std::env::temp_dir().join(format!(
        "md2wx_test_{}_{}_{}.html",
        name,
        std::process::id(),
        unique_id
    ));

    let mut cmd = Command::new(md2wx_binary());
    cmd.arg(&input).arg("-o").arg(&output);
    for arg in args {
        cmd.arg(arg);
    }

    let status = cmd.status().expect("Failed to run md2wx");
    assert!(status.success(), "md2wx failed with status: {}", status);

    let content = fs::read_to_string(&output).expect("Failed to read output file");
    // Clean up
    let _ = fs::remove_file(&output);
    content
}

#[test]
fn test_simple_conversion() {
    let html = convert_fixture("simple", &[]);

    assert!(html.contains(r#"class="wx-container""#));
    assert!(html.contains("<h1 style="));
    assert!(!html.contains("<style"));
    assert!(!html.contains("<ul"));
    assert_eq!(html.matches(r#"class="list-item""#).count(), 3);
}

#[test]
fn test_theme_flag_changes_palette() {
    let professional = convert_fixture("simple", &[]);
    let dark = convert_fixture("simple", &["-t", "dark"]);

    assert!(professional.contains("#1a73e8"));
    assert!(dark.contains("#61dafb"));
    assert_ne!(professional, dark);
}

#[test]
fn test_unknown_theme_falls_back() {
    let fallback = convert_fixture("simple", &["-t", "no-such-theme"]);
    let default = convert_fixture("simple", &[]);
    assert_eq!(fallback, default);
}

#[test]
fn test_links_become_footnotes() {
    let html = convert_fixture("with_links", &[]);

    assert!(!html.contains("<a "));
    assert!(html.contains(">[1]</sup>"));
    assert!(html.contains(">[2]</sup>"));
    assert!(html.contains(">[3]</sup>"));
    assert!(html.contains("[1] the book: https://doc.rust-lang.org/book/"));
    assert!(html.contains("[3] book: https://doc.rust-lang.org/book/"));
}

#[test]
fn test_code_fixture_highlights_and_degrades() {
    let html = convert_fixture("code", &[]);

    assert_eq!(html.matches(r#"class="hljs""#).count(), 2);
    assert!(html.contains("no idea what this is"));
}

#[test]
fn test_directory_conversion() {
    let fixtures = fixtures_dir();
    let output_dir = std::env::temp_dir().join(format!(
        "md2wx_test_dir_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));

    let _ = fs::remove_dir_all(&output_dir);
    fs::create_dir_all(&output_dir).expect("Failed to create output dir");

    let status = Command::new(md2wx_binary())
        .arg(&fixtures)
        .arg("-o")
        .arg(&output_dir)
        .arg("-q")
        .status()
        .expect("Failed to run md2wx");

    assert!(status.success(), "md2wx directory conversion failed");

    let mut files: Vec<_> = fs::read_dir(&output_dir)
        .expect("Failed to read output dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    files.sort();

    let _ = fs::remove_dir_all(&output_dir);

    assert_eq!(files, ["code.html", "simple.html", "with_links.html"]);
}

#[test]
fn test_config_file_theme_and_cli_override() {
    let dir = std::env::temp_dir().join(format!(
        "md2wx_test_config_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create test dir");
    fs::copy(fixtures_dir().join("simple.md"), dir.join("simple.md"))
        .expect("Failed to copy fixture");
    fs::write(dir.join("_md2wx.toml"), "[output]\ntheme = \"dark\"\n")
        .expect("Failed to write config");

    // Config file next to the input selects the theme.
    let from_config = dir.join("from_config.html");
    let status = Command::new(md2wx_binary())
        .arg(dir.join("simple.md"))
        .arg("-o")
        .arg(&from_config)
        .status()
        .expect("Failed to run md2wx");
    assert!(status.success());

    let html = fs::read_to_string(&from_config).expect("Failed to read output");
    assert!(html.contains("#61dafb"), "config theme not applied");
    assert!(!html.contains("#1a73e8"));

    // An explicit -t flag wins over the config file.
    let overridden = dir.join("overridden.html");
    let status = Command::new(md2wx_binary())
        .arg(dir.join("simple.md"))
        .arg("-o")
        .arg(&overridden)
        .arg("-t")
        .arg("professional")
        .status()
        .expect("Failed to run md2wx");
    assert!(status.success());

    let html = fs::read_to_string(&overridden).expect("Failed to read output");
    assert!(html.contains("#1a73e8"), "CLI flag did not override config");
    assert!(!html.contains("#61dafb"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_config_extension_sets_default_output_path() {
    let dir = std::env::temp_dir().join(format!(
        "md2wx_test_ext_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create test dir");
    fs::copy(fixtures_dir().join("simple.md"), dir.join("simple.md"))
        .expect("Failed to copy fixture");
    fs::write(dir.join("_md2wx.toml"), "[output]\nextension = \"htm\"\n")
        .expect("Failed to write config");

    let status = Command::new(md2wx_binary())
        .arg(dir.join("simple.md"))
        .arg("-q")
        .status()
        .expect("Failed to run md2wx");
    assert!(status.success());
    assert!(dir.join("simple.htm").exists(), "configured extension not used");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_directory_reports_no_markdown_files() {
    let dir = std::env::temp_dir().join(format!(
        "md2wx_test_empty_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create test dir");

    let output = Command::new(md2wx_binary())
        .arg(&dir)
        .output()
        .expect("Failed to run md2wx");

    let _ = fs::remove_dir_all(&dir);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No Markdown files found"));
}

#[test]
fn test_init_config() {
    let output_file = std::env::temp_dir().join(format!(
        "md2wx_test_init_{}_{}.toml",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = fs::remove_file(&output_file);

    let status = Command::new(md2wx_binary())
        .arg("init")
        .arg("-o")
        .arg(&output_file)
        .status()
        .expect("Failed to run md2wx init");

    assert!(status.success(), "md2wx init failed");

    let content = fs::read_to_string(&output_file).expect("Failed to read config file");
    let _ = fs::remove_file(&output_file);

    assert!(content.starts_with("#:schema"));
    assert!(content.contains("[output]"));
    assert!(content.contains("theme = \"professional\""));
}

#[test]
fn test_init_schema() {
    let output = Command::new(md2wx_binary())
        .arg("init")
        .arg("--schema")
        .output()
        .expect("Failed to run md2wx init --schema");

    assert!(output.status.success(), "md2wx init --schema failed");

    let schema = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert!(schema.contains("OutputConfig"));
}

#[test]
fn test_missing_input_fails() {
    let status = Command::new(md2wx_binary())
        .arg("/definitely/not/a/real/path.md")
        .status()
        .expect("Failed to run md2wx");

    assert!(!status.success());
}
