//! Blocks wrapping the Amazon Redshift Data API.

pub mod metadata;
pub mod statements;

mod types;

use crate::block::Block;

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    let mut out: Vec<Box<dyn Block>> = Vec::new();
    out.extend(statements::blocks());
    out.extend(metadata::blocks());
    out
}
