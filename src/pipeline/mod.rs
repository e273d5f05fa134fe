// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod summary;

pub use orchestrator::{QuizPipeline, RunOptions};
pub use summary::RunSummary;
