use std::io::Write;
use std::process::{Command, Output};

const SCHEMA: &str = r#"fields:
  - name: Filter
    type: map
    tag: "ops:>,==,<=,<,!=,-like-"
  - name: Embed
    type: list
    tag: "sep:|"
  - name: Limit
    type: int
  - name: Name
    type: string
"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn run_qparams(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qparams"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run qparams")
}

#[test]
fn decodes_url_to_json() {
    let schema = write_temp(SCHEMA);
    let output = run_qparams(&[
        "--schema",
        schema.path().to_str().unwrap(),
        "https://foobar.com/users?filter=aGe!%3D9,Lastname-like-Doe&embed=User|Order&name=John",
    ]);

    if !output.status.success() {
        panic!("qparams failed: {}", String::from_utf8_lossy(&output.stderr));
    }

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        record,
        serde_json::json!({
            "Filter": {"age !=": "9", "lastname -like-": "Doe"},
            "Embed": ["user", "order"],
            "Name": "John",
        })
    );
}

#[test]
fn decodes_bare_query_to_yaml() {
    let schema = write_temp(SCHEMA);
    let output = run_qparams(&[
        "--schema",
        schema.path().to_str().unwrap(),
        "--format",
        "yaml",
        "?limit=7",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Limit: 7");
}

#[test]
fn conversion_errors_fail_after_printing() {
    let schema = write_temp(SCHEMA);
    let output = run_qparams(&[
        "--schema",
        schema.path().to_str().unwrap(),
        "limit=100a&name=x",
    ]);

    assert!(!output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record, serde_json::json!({"Name": "x"}));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Field Limit does not contain a valid integer (100a)"));
}

#[test]
fn strict_filters_from_config_file() {
    let schema = write_temp(SCHEMA);
    let config = write_temp("strict_filters: true\n");

    let output = run_qparams(&[
        "--schema",
        schema.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
        "filter=age>1,nonsense",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Field Filter does not contain a valid filter (nonsense)"));
}

#[test]
fn missing_schema_is_reported() {
    let output = run_qparams(&["--schema", "/nonexistent/schema.yaml", "limit=1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema: Failed to load"));
}

#[test]
fn schema_flag_is_required() {
    let output = run_qparams(&["limit=1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--schema"));
}
