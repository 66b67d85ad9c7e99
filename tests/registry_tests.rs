use cloudblocks::registry;
use std::collections::HashSet;

#[test]
fn test_block_names_are_unique_and_well_formed() {
    let names = registry::block_names();
    assert!(!names.is_empty());

    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len(), "duplicate block names registered");

    for name in &names {
        let parts: Vec<&str> = name.split('.').collect();
        assert_eq!(parts.len(), 3, "unexpected name shape: {name}");
        assert_eq!(parts[0], "aws");
        assert!(
            ["rds", "redshift_data", "secrets_manager", "ssm"].contains(&parts[1]),
            "unexpected service in {name}"
        );
        assert!(
            parts[2].chars().all(|c| c.is_ascii_lowercase() || c == '_'),
            "operation segment is not snake_case: {name}"
        );
    }
}

#[test]
fn test_lookup_resolves_each_wrapped_operation() {
    for (name, operation) in [
        ("aws.rds.copy_db_snapshot", "CopyDBSnapshot"),
        ("aws.redshift_data.execute_statement", "ExecuteStatement"),
        ("aws.secrets_manager.get_secret_value", "GetSecretValue"),
        ("aws.ssm.send_command", "SendCommand"),
    ] {
        let block = registry::lookup(name)
            .unwrap_or_else(|| panic!("block {name} not registered"));
        assert_eq!(block.spec().operation, operation);
    }

    assert!(registry::lookup("aws.s3.put_object").is_none());
}

#[test]
fn test_all_specs_are_sorted_and_complete() {
    let specs = registry::all_specs();
    let names = registry::block_names();
    assert_eq!(specs.len(), names.len());

    let spec_names: Vec<String> = specs.iter().map(|spec| spec.name.clone()).collect();
    assert_eq!(spec_names, names, "all_specs order should match sorted names");
}

#[test]
fn test_every_spec_declares_connection_wiring() {
    for spec in registry::all_specs() {
        for field in ["region", "access_key_id", "secret_access_key", "endpoint_url"] {
            assert!(
                spec.connection.iter().any(|f| f.name == field),
                "{} is missing connection field {field}",
                spec.name
            );
        }
        assert_eq!(
            spec.output.event, spec.name,
            "{} output event should carry the block name",
            spec.name
        );
    }
}
