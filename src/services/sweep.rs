use super::aggregator::{self, RunSummary};
use super::classifier::{self, Classified};
use super::executor::{self, CancelFlag, DeletionOutcome};
use super::report;
use crate::domain::{CloudClient, ConfirmationGate, ResourceGroup, SweepError, compile_rules};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Padrões de proteção (`--exclude`).
    pub exclude: Vec<String>,
    /// Tamanho do pool de workers (`--workers`).
    pub workers: usize,
    /// Modo simulação (`--dry-run`).
    pub dry_run: bool,
}

/// Orchestrates one sweep: authenticate, enumerate, classify, preview,
/// confirm, execute, summarize.
pub struct Sweeper {
    client: Arc<dyn CloudClient>,
    gate: Arc<dyn ConfirmationGate>,
    options: SweepOptions,
    cancel: CancelFlag,
}

impl Sweeper {
    pub fn new(
        client: Arc<dyn CloudClient>,
        gate: Arc<dyn ConfirmationGate>,
        options: SweepOptions,
    ) -> Self {
        Self {
            client,
            gate,
            options,
            cancel: CancelFlag::new(),
        }
    }

    /// Shared stop signal honored between dispatches by the executor.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn run(&self) -> Result<RunSummary, SweepError> {
        // Padrões malformados abortam antes de qualquer enumeração.
        let rules = compile_rules(&self.options.exclude)?;

        self.client.ensure_authenticated()?;

        let groups = self.collect_groups()?;
        let classified = classifier::classify(groups, &rules);

        report::display_preview(&classified);

        if self.options.dry_run {
            return Ok(self.simulate(&classified));
        }

        if classified.to_delete.is_empty() {
            warn!("Nenhum grupo para deletar");
            return Ok(self.finish(&classified, &[]));
        }

        if !self.gate.confirm(&classified) {
            info!("Operação cancelada pelo usuário.");
            return Ok(self.finish(&classified, &[]));
        }

        let outcomes = executor::execute(
            self.client.as_ref(),
            &classified.to_delete,
            self.options.workers,
            &self.cancel,
        );

        if self.cancel.is_cancelled() {
            warn!(
                "Execução interrompida: {} de {} grupo(s) chegaram a um estado terminal",
                outcomes.len(),
                classified.to_delete.len()
            );
        }

        Ok(self.finish(&classified, &outcomes))
    }

    /// Enumera os grupos de todas as assinaturas. Falha de uma assinatura
    /// isolada vira aviso e contribui com zero candidatos.
    fn collect_groups(&self) -> Result<Vec<ResourceGroup>, SweepError> {
        let subscriptions = self.client.list_subscriptions()?;

        if subscriptions.is_empty() {
            return Err(SweepError::Listing {
                subscription: "-".to_string(),
                detail: "nenhuma assinatura encontrada".to_string(),
            });
        }

        info!("Processando {} assinatura(s)...", subscriptions.len());

        let mut groups = Vec::new();
        for subscription in &subscriptions {
            info!("Listando grupos da assinatura: {}", subscription.name);

            match self.client.list_resource_groups(subscription) {
                Ok(found) => groups.extend(found),
                Err(err) => warn!("⚠ {err}"),
            }
        }

        Ok(groups)
    }

    fn simulate(&self, classified: &Classified) -> RunSummary {
        for group in &classified.to_delete {
            info!("[DRY-RUN] Seria deletado: {}", group.qualified_name());
        }

        self.finish(classified, &[])
    }

    fn finish(&self, classified: &Classified, outcomes: &[DeletionOutcome]) -> RunSummary {
        let summary = aggregator::aggregate(classified, outcomes);
        report::display_summary(classified, outcomes, &summary, self.options.dry_run);
        summary
    }
}
