pub mod domain;
pub mod infra;
pub mod services;

// Make test_support available for integration tests
// In a real production crate, we might use a feature flag "test-utils"
pub mod test_support;

pub use domain::{
    AutoAffirm, AutoDecline, CloudClient, ConfirmationGate, ProtectionRule, ResourceGroup,
    Subscription, SweepError, compile_rules,
};
pub use infra::{AzCliAdapter, InteractivePrompt};
pub use services::{
    CancelFlag, Classified, DeletionOutcome, RunSummary, SweepOptions, Sweeper,
};
