use crate::domain::{CloudClient, ResourceGroup, Subscription, SweepError};
use std::collections::HashSet;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory cloud client for tests.
///
/// Records every call, supports per-group deletion failures and
/// per-subscription listing failures, and tracks the in-flight deletion
/// high-water mark so tests can pin the worker-pool ceiling.
#[derive(Debug, Default)]
pub struct MockCloudClient {
    subscriptions: RwLock<Vec<Subscription>>,
    groups: RwLock<Vec<ResourceGroup>>,
    commands: RwLock<Vec<String>>,
    fail_delete_on: RwLock<HashSet<String>>,
    fail_listing_on: RwLock<HashSet<String>>,
    authenticated: RwLock<bool>,
    delete_delay: RwLock<Option<Duration>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockCloudClient {
    pub fn new() -> Self {
        Self {
            authenticated: RwLock::new(true),
            ..Self::default()
        }
    }

    pub fn add_subscription(&self, id: &str, name: &str) {
        self.subscriptions.write().unwrap().push(Subscription {
            id: id.to_string(),
            name: name.to_string(),
        });
    }

    pub fn add_group(&self, name: &str, subscription_id: &str, subscription_name: &str) {
        self.groups
            .write()
            .unwrap()
            .push(ResourceGroup::new(name, subscription_id, subscription_name));
    }

    pub fn set_unauthenticated(&self) {
        *self.authenticated.write().unwrap() = false;
    }

    /// Makes `delete_resource_group` fail for the named group.
    pub fn fail_delete_on(&self, group_name: &str) {
        self.fail_delete_on
            .write()
            .unwrap()
            .insert(group_name.to_string());
    }

    /// Makes `list_resource_groups` fail for the named subscription.
    pub fn fail_listing_on(&self, subscription_id: &str) {
        self.fail_listing_on
            .write()
            .unwrap()
            .insert(subscription_id.to_string());
    }

    /// Holds every deletion for `delay`, widening the in-flight window.
    pub fn set_delete_delay(&self, delay: Duration) {
        *self.delete_delay.write().unwrap() = Some(delay);
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    pub fn delete_calls(&self) -> usize {
        self.commands()
            .iter()
            .filter(|c| c.starts_with("delete:"))
            .count()
    }

    /// Maior número de deleções simultâneas observado.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }
}

impl CloudClient for MockCloudClient {
    fn ensure_authenticated(&self) -> Result<(), SweepError> {
        self.record_command("ensure_authenticated");

        if *self.authenticated.read().unwrap() {
            Ok(())
        } else {
            Err(SweepError::Authentication(
                "mock: sessão não autenticada".to_string(),
            ))
        }
    }

    fn list_subscriptions(&self) -> Result<Vec<Subscription>, SweepError> {
        self.record_command("list_subscriptions");
        Ok(self.subscriptions.read().unwrap().clone())
    }

    fn list_resource_groups(
        &self,
        subscription: &Subscription,
    ) -> Result<Vec<ResourceGroup>, SweepError> {
        self.record_command(&format!("list_groups:{}", subscription.id));

        if self.fail_listing_on.read().unwrap().contains(&subscription.id) {
            return Err(SweepError::Listing {
                subscription: subscription.name.clone(),
                detail: "mock: listagem indisponível".to_string(),
            });
        }

        Ok(self
            .groups
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.subscription_id == subscription.id)
            .cloned()
            .collect())
    }

    fn delete_resource_group(&self, group: &ResourceGroup) -> Result<(), SweepError> {
        self.record_command(&format!("delete:{}", group.name));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = *self.delete_delay.read().unwrap() {
            std::thread::sleep(delay);
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_delete_on.read().unwrap().contains(&group.name) {
            return Err(SweepError::Deletion {
                group: group.qualified_name(),
                detail: "mock: falha do provedor".to_string(),
            });
        }

        Ok(())
    }
}
