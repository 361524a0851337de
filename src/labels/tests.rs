use super::*;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

#[test]
fn test_label_for_normalizes_dot_and_case() {
    let labels: Labels = [
        ("rs".to_string(), "Rust".to_string()),
        ("TS".to_string(), "TypeScript".to_string()),
    ]
    .into_iter()
    .collect();

    assert_eq!(labels.label_for(".rs"), Some("Rust"));
    assert_eq!(labels.label_for(".RS"), Some("Rust"));
    assert_eq!(labels.label_for("tS"), Some("TypeScript"));
    assert_eq!(labels.label_for(".md"), None);
    assert_eq!(labels.label_for(""), None);
}

#[test]
fn test_load_reads_json_object() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.json");
    write_file(&path, r#"{"rs":"Rust","ts":"TypeScript"}"#)?;

    let labels = Labels::load(&path)?;
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.label_for(".ts"), Some("TypeScript"));

    Ok(())
}

#[test]
fn test_load_rejects_invalid_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("labels.json");
    write_file(&path, "{")?;

    let err = Labels::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid labels file"));

    Ok(())
}

#[test]
fn test_load_missing_file_is_error() {
    let result = Labels::load(Path::new("no_such_labels_123.json"));
    assert!(result.is_err());
}

#[test]
fn test_discover_without_file_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let labels = Labels::discover(temp_dir.path())?;
    assert!(labels.is_empty());

    Ok(())
}

#[test]
fn test_discover_reads_default_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_file(
        &temp_dir.path().join(DEFAULT_LABELS_FILE),
        r#"{"md":"Markdown"}"#,
    )?;

    let labels = Labels::discover(temp_dir.path())?;
    assert_eq!(labels.label_for(".md"), Some("Markdown"));

    Ok(())
}
