use assert_cmd::cargo_bin;
use serde_json::Value;
use std::process::Command;

fn run_json(args: &[&str]) -> Vec<Value> {
    let output = Command::new(cargo_bin!("pattern-showcase"))
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect()
}

#[test]
fn test_payment_json() {
    let records = run_json(&["payment"]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["method"], "creditcard");
    assert_eq!(records[0]["account"], "1234-5678-9876-5432");
    assert_eq!(records[0]["amount"], "100.0");
    assert_eq!(records[1]["method"], "paypal");
    assert_eq!(records[1]["amount"], "250.0");
}

#[test]
fn test_media_json() {
    let records = run_json(&["media"]);
    let outcomes: Vec<&str> = records
        .iter()
        .map(|r| r["outcome"].as_str().unwrap())
        .collect();
    assert_eq!(outcomes, ["direct", "adapted", "adapted"]);
    assert_eq!(records[2]["format"], "vlc");

    let records = run_json(&["media", "ogg", "x.ogg"]);
    assert_eq!(records[0]["outcome"], "invalid_format");
}

#[test]
fn test_pizza_json() {
    let records = run_json(&["pizza"]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["description"], "Plain Pizza, Cheese, Pepperoni");
    assert_eq!(records[0]["cost"], "8.5");
}
