mod error;
mod resource_group;
mod rules;
pub mod traits;

pub use error::SweepError;
pub use resource_group::{ResourceGroup, Subscription};
pub use rules::{ProtectionRule, compile_rules};
pub use traits::{AutoAffirm, AutoDecline, CloudClient, ConfirmationGate};
