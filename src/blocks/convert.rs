//! Small conversions shared by the service response mappers.

use aws_sdk_rds::primitives::{DateTime, DateTimeFormat};
use aws_sdk_secretsmanager::primitives::Blob;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Render an SDK timestamp as RFC 3339, the shape the wrapped APIs document
/// for their responses.
pub(crate) fn iso8601(value: &DateTime) -> Option<String> {
    value.fmt(DateTimeFormat::DateTime).ok()
}

pub(crate) fn opt_iso8601(value: Option<&DateTime>) -> Option<String> {
    value.and_then(iso8601)
}

/// Binary response members are emitted base64-encoded.
pub(crate) fn base64_blob(value: &Blob) -> String {
    STANDARD.encode(value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_seconds_as_rfc3339() {
        let ts = DateTime::from_secs(1_577_836_800);
        assert_eq!(iso8601(&ts).as_deref(), Some("2020-01-01T00:00:00Z"));
        assert_eq!(opt_iso8601(None), None);
    }

    #[test]
    fn encodes_blobs_as_base64() {
        let blob = Blob::new(b"secret-bytes".to_vec());
        assert_eq!(base64_blob(&blob), "c2VjcmV0LWJ5dGVz");
    }
}
