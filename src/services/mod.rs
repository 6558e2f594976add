pub mod aggregator;
pub mod classifier;
pub mod executor;
pub mod report;
pub mod sweep;

pub use aggregator::{RunSummary, aggregate};
pub use classifier::{Classified, classify};
pub use executor::{CancelFlag, DeletionOutcome, execute};
pub use sweep::{SweepOptions, Sweeper};
