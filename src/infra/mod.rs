pub mod az_adapter;
pub mod prompt;

pub use az_adapter::AzCliAdapter;
pub use prompt::InteractivePrompt;
