use thiserror::Error;

/// Error taxonomy for a sweep run.
///
/// `Configuration` and `Authentication` are fatal and abort the run before
/// any deletion is dispatched. `Listing` is isolated per subscription and
/// `Deletion` per resource group; both fold into the final summary instead
/// of halting sibling work.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("padrão de exclusão inválido '{pattern}': {source}")]
    Configuration {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("não autenticado na Azure: {0}")]
    Authentication(String),

    #[error("erro ao listar grupos da assinatura '{subscription}': {detail}")]
    Listing { subscription: String, detail: String },

    #[error("erro ao deletar '{group}': {detail}")]
    Deletion { group: String, detail: String },
}
