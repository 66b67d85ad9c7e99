use cloudblocks::core::models::Invocation;
use cloudblocks::dispatch::run_invocation;
use cloudblocks::errors::BlockError;
use serde_json::{Value, json};

#[test]
fn test_invocation_parses_with_defaults() {
    let invocation: Invocation =
        serde_json::from_value(json!({"block": "aws.ssm.get_parameter"})).unwrap();

    assert_eq!(invocation.block, "aws.ssm.get_parameter");
    assert_eq!(invocation.input, Value::Null);
    assert_eq!(invocation.connection.region, None);
}

#[test]
fn test_invocation_parses_connection_section() {
    let invocation: Invocation = serde_json::from_value(json!({
        "block": "aws.secrets_manager.get_secret_value",
        "input": {"secret_id": "prod/db-password"},
        "connection": {"region": "eu-central-1", "endpoint_url": "http://localhost:4566"},
    }))
    .unwrap();

    assert_eq!(invocation.connection.region.as_deref(), Some("eu-central-1"));
    assert_eq!(
        invocation.connection.endpoint_url.as_deref(),
        Some("http://localhost:4566")
    );
    assert_eq!(invocation.input["secret_id"], "prod/db-password");
}

#[tokio::test]
async fn test_run_invocation_rejects_unknown_blocks() {
    let invocation: Invocation =
        serde_json::from_value(json!({"block": "aws.rds.promote_read_replica"})).unwrap();

    let err = run_invocation(invocation).await.unwrap_err();
    match err {
        BlockError::UnknownBlock(name) => assert_eq!(name, "aws.rds.promote_read_replica"),
        other => panic!("expected UnknownBlock, got {other}"),
    }
}
