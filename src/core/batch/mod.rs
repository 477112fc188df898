//! Batch distribution: state machine, control signals, execution engine,
//! and progress reporting

pub mod control;
pub mod orchestrator;
pub mod progress;
pub mod state;

pub use control::{BatchControl, ControlSignal};
pub use orchestrator::{BatchConfig, BatchOrchestrator};
pub use progress::{LogObserver, NoopObserver, ProgressObserver};
pub use state::{BatchState, RunMode, RUN_COMPLETE_MARKER};
