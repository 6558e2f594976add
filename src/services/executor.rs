use crate::domain::{CloudClient, ResourceGroup};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Terminal outcome of one dispatched deletion. Created exactly once per
/// group and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub group: ResourceGroup,
    pub succeeded: bool,
    pub error: Option<String>,
    pub duration: Duration,
}

/// Cooperative stop signal for the executor.
///
/// When set, no further group is dispatched; deletions already in flight
/// run to completion and their outcomes are still collected.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Deletes every group in `to_delete` under a fixed-size pool of `workers`
/// threads sharing one work queue.
///
/// Dispatch follows input order; completion order is whatever the provider
/// yields. Outcomes stream through an mpsc channel and are collected by
/// this (single) calling thread, so concurrent completions cannot race.
pub fn execute(
    client: &dyn CloudClient,
    to_delete: &[ResourceGroup],
    workers: usize,
    cancel: &CancelFlag,
) -> Vec<DeletionOutcome> {
    if to_delete.is_empty() {
        return Vec::new();
    }

    let workers = workers.clamp(1, to_delete.len());
    let queue: Mutex<VecDeque<ResourceGroup>> = Mutex::new(to_delete.to_vec().into());
    let (tx, rx) = mpsc::channel::<DeletionOutcome>();

    info!(
        "Iniciando deleção de {} grupo(s) com {} worker(s)...",
        to_delete.len(),
        workers
    );

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let queue = &queue;
            scope.spawn(move || {
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }

                    let Some(group) = queue.lock().expect("fila de deleção").pop_front() else {
                        break;
                    };

                    let outcome = delete_one(client, group);
                    if tx.send(outcome).is_err() {
                        break;
                    }
                }
            });
        }

        // Receives until every worker dropped its sender.
        drop(tx);
        rx.iter().collect()
    })
}

fn delete_one(client: &dyn CloudClient, group: ResourceGroup) -> DeletionOutcome {
    let qualified = group.qualified_name();
    info!("Deletando grupo: {qualified}");

    let started = Instant::now();
    let result = client.delete_resource_group(&group);
    let duration = started.elapsed();

    match result {
        Ok(()) => {
            info!("✓ Deletado com sucesso: {qualified} ({:.1}s)", duration.as_secs_f64());
            DeletionOutcome {
                group,
                succeeded: true,
                error: None,
                duration,
            }
        }
        Err(err) => {
            error!("✗ Falha ao deletar '{qualified}': {err}");
            DeletionOutcome {
                group,
                succeeded: false,
                error: Some(err.to_string()),
                duration,
            }
        }
    }
}
