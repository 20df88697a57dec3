pub mod errors;
pub mod orchestrator;
pub mod writer;

pub use orchestrator::{SnapshotFlags, SnapshotOrchestrator};
pub use writer::SnapshotWriter;
