use super::{ResourceGroup, Subscription, SweepError};
use crate::services::Classified;
use std::fmt::Debug;

/// Trait for the cloud provider boundary.
///
/// `delete_resource_group` is a blocking call of provider-determined
/// duration; it is invoked at most once per group and never retried here.
pub trait CloudClient: Send + Sync + Debug {
    /// Verifica se o CLI está instalado e a sessão autenticada.
    fn ensure_authenticated(&self) -> Result<(), SweepError>;

    /// Lista todas as assinaturas da conta.
    fn list_subscriptions(&self) -> Result<Vec<Subscription>, SweepError>;

    /// Lista os grupos de recursos de uma assinatura.
    fn list_resource_groups(
        &self,
        subscription: &Subscription,
    ) -> Result<Vec<ResourceGroup>, SweepError>;

    /// Deleta um grupo de recursos. Bloqueia até o término.
    fn delete_resource_group(&self, group: &ResourceGroup) -> Result<(), SweepError>;
}

/// Capability deciding whether destructive execution may proceed.
pub trait ConfirmationGate: Send + Sync {
    fn confirm(&self, plan: &Classified) -> bool;
}

/// Always proceeds. Used by tests that exercise the executor path.
pub struct AutoAffirm;

impl ConfirmationGate for AutoAffirm {
    fn confirm(&self, _plan: &Classified) -> bool {
        true
    }
}

/// Always aborts. Used by tests that pin the declined-run behavior.
pub struct AutoDecline;

impl ConfirmationGate for AutoDecline {
    fn confirm(&self, _plan: &Classified) -> bool {
        false
    }
}
