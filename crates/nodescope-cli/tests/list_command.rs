mod common;
use common::{command, run};
use nodescope_testing::TestWorld;
use nodescope_testing::fixtures::{generated_nodes, reference_nodes};
use predicates::prelude::*;

fn operators(result: &serde_json::Value) -> Vec<String> {
    result["content"]["nodes"]
        .as_array()
        .expect("Expected nodes array in content")
        .iter()
        .map(|n| n["operator"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_defaults_to_uptime_descending() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    let result = run(&world, &["list", "--format", "json"]);
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xAAA", "0xCCC", "0xBBB"]);
    assert_eq!(json["content"]["page"]["total_count"], 3);
    assert_eq!(json["content"]["state"]["sort"]["key"], "uptime");
    assert_eq!(json["content"]["state"]["sort"]["direction"], "desc");
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_list_search_is_case_insensitive() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    let result = run(&world, &["list", "--search", "bbb", "--format", "json"]);
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xBBB"]);
    assert_eq!(json["content"]["state"]["search_term"], "bbb");
}

#[test]
fn test_list_sort_by_fee_keeps_input_order_for_ties() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    let result = run(&world, &["list", "--sort", "fee", "--format", "json"]);
    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xAAA", "0xBBB", "0xCCC"]);

    let result = run(&world, &["list", "--sort", "fee", "--direction", "desc", "--format", "json"]);
    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xCCC", "0xAAA", "0xBBB"]);
}

#[test]
fn test_list_sort_on_current_key_keeps_direction() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    let result = run(&world, &["list", "--sort", "uptime", "--format", "json"]);
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xAAA", "0xCCC", "0xBBB"]);
    assert_eq!(json["content"]["state"]["sort"]["direction"], "desc");

    let result = run(&world, &["list", "--sort", "uptime", "--direction", "asc", "--format", "json"]);
    let json = result.json().unwrap();
    assert_eq!(operators(&json), vec!["0xBBB", "0xCCC", "0xAAA"]);
}

#[test]
fn test_list_pages_are_clamped() {
    let world = TestWorld::new().with_nodes("nodes.json", &generated_nodes(120));

    let result = run(&world, &["list", "--page", "9", "--format", "json"]);
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["page"]["page"], 3);
    assert_eq!(json["content"]["page"]["total_pages"], 3);
    assert_eq!(json["content"]["nodes"].as_array().unwrap().len(), 20);
}

#[test]
fn test_list_page_size_option() {
    let world = TestWorld::new().with_nodes("nodes.json", &generated_nodes(250));

    let result = run(&world, &["list", "--page-size", "200", "--page", "2", "--format", "json"]);
    let json = result.json().unwrap();
    assert_eq!(json["content"]["page"]["page_size"], 200);
    assert_eq!(json["content"]["page"]["start_index"], 200);
    assert_eq!(json["content"]["page"]["end_index"], 250);
}

#[test]
fn test_list_plain_footer() {
    let world = TestWorld::new().with_nodes("nodes.json", &generated_nodes(120));

    command(&world)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 3 · showing 51-100 of 120"));
}

#[test]
fn test_list_csv() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    let result = run(&world, &["list", "--sort", "operator", "--format", "csv"]);
    assert!(result.success());
    assert_eq!(
        result.stdout,
        "operator,status,uptime,fee\n\
         0xAAA,Active,99.5,2.0\n\
         0xBBB,Inactive,50.0,2.0\n\
         0xCCC,Active,75.25,5.0\n"
    );
}

#[test]
fn test_list_rejects_unknown_sort_key() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    command(&world)
        .args(["list", "--sort", "latency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort key 'latency'"));
}

#[test]
fn test_list_rejects_unsupported_page_size() {
    let world = TestWorld::new().with_nodes("nodes.json", &reference_nodes());

    command(&world)
        .args(["list", "--page-size", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size 75"));
}

#[test]
fn test_list_accepts_bare_array_payload() {
    let world = TestWorld::new().with_raw_source(
        "array.json",
        r#"[{"operator":"0xDDD","status":true,"uptime":12.5,"fee":1}]"#,
    );

    let result = run(&world, &["list", "--format", "json"]);
    assert_eq!(operators(&result.json().unwrap()), vec!["0xDDD"]);
}
