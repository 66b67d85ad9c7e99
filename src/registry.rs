//! Name-keyed catalog of every built-in block.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::block::Block;
use crate::blocks;
use crate::schema::BlockSpec;

static BLOCKS: Lazy<HashMap<String, Box<dyn Block>>> = Lazy::new(|| {
    blocks::builtin()
        .into_iter()
        .map(|block| (block.spec().name.clone(), block))
        .collect()
});

/// Look a block up by its registered name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static dyn Block> {
    BLOCKS.get(name).map(|block| &**block)
}

/// Names of every registered block, sorted.
#[must_use]
pub fn block_names() -> Vec<String> {
    let mut names: Vec<String> = BLOCKS.keys().cloned().collect();
    names.sort();
    names
}

/// Declarative specs of every registered block, sorted by name.
#[must_use]
pub fn all_specs() -> Vec<BlockSpec> {
    let mut specs: Vec<BlockSpec> = BLOCKS.values().map(|block| block.spec()).collect();
    specs.sort_by(|a, b| a.name.cmp(&b.name));
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_blocks() {
        let block = lookup("aws.rds.copy_db_snapshot").expect("block registered");
        assert_eq!(block.spec().operation, "CopyDBSnapshot");
        assert!(lookup("aws.rds.no_such_block").is_none());
    }

    #[test]
    fn every_spec_name_matches_its_registry_key() {
        for name in block_names() {
            let block = lookup(&name).expect("registered block resolves");
            assert_eq!(block.spec().name, name);
        }
    }

    #[test]
    fn catalog_spans_all_four_services() {
        let names = block_names();
        for prefix in [
            "aws.rds.",
            "aws.redshift_data.",
            "aws.secrets_manager.",
            "aws.ssm.",
        ] {
            assert!(
                names.iter().any(|n| n.starts_with(prefix)),
                "no blocks registered under {prefix}"
            );
        }
    }
}
