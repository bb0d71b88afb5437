mod runner;

pub use runner::{run_batch, BatchOutcome, SkippedEmail};
