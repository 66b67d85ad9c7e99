use cloudblocks::registry;
use serde_json::{Value, json};

#[test]
fn test_spec_serializes_with_kebab_case_kinds() {
    let block = registry::lookup("aws.ssm.get_parameter").expect("block registered");
    let value = serde_json::to_value(block.spec()).unwrap();

    assert_eq!(value["name"], "aws.ssm.get_parameter");
    assert_eq!(value["service"], "ssm");
    assert_eq!(value["operation"], "GetParameter");
    assert_eq!(value["output"]["event"], "aws.ssm.get_parameter");

    let inputs = value["inputs"].as_array().unwrap();
    let name_field = inputs
        .iter()
        .find(|field| field["name"] == "name")
        .expect("name field present");
    assert_eq!(name_field["kind"], "text");
    assert_eq!(name_field["required"], true);

    let decrypt_field = inputs
        .iter()
        .find(|field| field["name"] == "with_decryption")
        .expect("with_decryption field present");
    assert_eq!(decrypt_field["kind"], "bool");
    assert_eq!(decrypt_field["default"], json!(false));
}

#[test]
fn test_required_fields_are_marked_across_the_catalog() {
    let block = registry::lookup("aws.rds.copy_db_snapshot").expect("block registered");
    let spec = block.spec();

    let required: Vec<&str> = spec
        .inputs
        .iter()
        .filter(|field| field.required)
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(
        required,
        vec![
            "source_db_snapshot_identifier",
            "target_db_snapshot_identifier"
        ]
    );
}

#[test]
fn test_apply_defaults_round_trips_through_json() {
    let block = registry::lookup("aws.ssm.get_parameter").expect("block registered");
    let spec = block.spec();

    let merged = spec.apply_defaults(&json!({"name": "/app/flag"}));
    assert_eq!(merged["with_decryption"], json!(false));

    let merged = spec.apply_defaults(&Value::Null);
    assert_eq!(merged["with_decryption"], json!(false));
    assert!(merged.get("name").is_none());
}
