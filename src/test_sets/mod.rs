// file: src/test_sets/mod.rs
// description: test-set registry exports
// reference: internal module structure

pub mod updater;

pub use updater::{ConfigUpdater, UpsertOutcome, generate_id};
