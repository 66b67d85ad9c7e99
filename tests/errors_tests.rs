use cloudblocks::errors::BlockError;
use std::error::Error;

#[test]
fn test_block_error_implements_error_trait() {
    // Verify BlockError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = BlockError::InvalidInput("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_block_error_display() {
    // Verify Display implementation works correctly
    let error = BlockError::InvalidInput("missing required field `name`".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid block input: missing required field `name`"
    );

    let error = BlockError::UnknownBlock("aws.rds.create_db_cluster".to_string());
    assert_eq!(format!("{error}"), "Unknown block: aws.rds.create_db_cluster");

    let error = BlockError::AwsError("access denied".to_string());
    assert_eq!(format!("{error}"), "Failed to call AWS API: access denied");

    let error = BlockError::ConfigError("bad endpoint".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to load connection settings: bad endpoint"
    );
}

#[test]
fn test_block_error_from_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let block_err: BlockError = err.into();

    match block_err {
        BlockError::SerializationError(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }
}
