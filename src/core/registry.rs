//! In-memory password registry keyed by service name.
//!
//! Every stored password satisfies the configured [`PasswordPolicy`] and is
//! unique across the registry. Rejected writes are silent; only operations on
//! a missing service report [`RegistryError::NotFound`].

use crate::core::clock::{Clock, SystemClock};
use crate::error::{RegistryError, Result};
use crate::models::policy::PasswordPolicy;
use crate::models::record::{PasswordRecord, ServiceSummary};
use crate::models::sort::{SortKey, SortOrder};
use tracing::{debug, info};

/// Outcome of checking a candidate password against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Accepted,
    /// Fails the validity rules.
    Invalid,
    /// Already stored for some service.
    Reused,
}

#[derive(Debug, Clone)]
struct ServiceEntry {
    service: String,
    record: PasswordRecord,
}

/// Registry of service passwords, in insertion order.
#[derive(Debug)]
pub struct CredentialRegistry<C: Clock = SystemClock> {
    entries: Vec<ServiceEntry>,
    policy: PasswordPolicy,
    clock: C,
}

impl CredentialRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CredentialRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CredentialRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::new(),
            policy: PasswordPolicy::default(),
            clock,
        }
    }

    pub fn with_policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, service: &str) -> bool {
        self.find(service).is_some()
    }

    pub fn is_password_valid(&self, password: &str) -> bool {
        self.policy.is_valid(password)
    }

    /// True when no service currently stores exactly `password`.
    pub fn is_password_unique(&self, password: &str) -> bool {
        !self
            .entries
            .iter()
            .any(|e| e.record.password.as_str() == password)
    }

    pub fn check_password(&self, password: &str) -> PasswordCheck {
        if !self.is_password_valid(password) {
            PasswordCheck::Invalid
        } else if !self.is_password_unique(password) {
            PasswordCheck::Reused
        } else {
            PasswordCheck::Accepted
        }
    }

    /// Store `password` for `service` with a fresh timestamp.
    ///
    /// An existing record is replaced in place and keeps its listing position.
    /// Invalid or reused passwords leave the registry untouched.
    pub fn add(&mut self, service: &str, password: &str) {
        let check = self.check_password(password);
        if check != PasswordCheck::Accepted {
            debug!(service, ?check, "add rejected");
            return;
        }

        let record = PasswordRecord::new(password, self.clock.now());
        if let Some(existing) = self.find_mut(service) {
            existing.record = record;
            info!(service, "password replaced");
        } else {
            self.entries.push(ServiceEntry {
                service: service.to_string(),
                record,
            });
            info!(service, "password added");
        }
    }

    pub fn remove(&mut self, service: &str) -> Result<()> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.service == service)
            .ok_or_else(|| not_found(service))?;
        self.entries.remove(idx);
        info!(service, "password removed");
        Ok(())
    }

    /// Replace the password of an existing service, keeping `added_on`.
    pub fn update(&mut self, service: &str, password: &str) -> Result<()> {
        if !self.contains(service) {
            return Err(not_found(service));
        }
        let check = self.check_password(password);
        if check != PasswordCheck::Accepted {
            debug!(service, ?check, "update rejected");
            return Ok(());
        }
        if let Some(entry) = self.find_mut(service) {
            entry.record.password = zeroize::Zeroizing::new(password.to_string());
            info!(service, "password updated");
        }
        Ok(())
    }

    pub fn list_services(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.service.clone()).collect()
    }

    pub fn get_for_service(&self, service: &str) -> Option<&str> {
        self.find(service).map(|e| e.record.password.as_str())
    }

    pub fn record(&self, service: &str) -> Option<&PasswordRecord> {
        self.find(service).map(|e| &e.record)
    }

    pub fn sort_services_by(&self, key: SortKey, order: SortOrder) -> Vec<String> {
        self.sorted_entries(key, order)
            .into_iter()
            .map(|e| e.service.clone())
            .collect()
    }

    /// Summaries in insertion order.
    pub fn summaries(&self) -> Vec<ServiceSummary> {
        self.entries.iter().map(summarize).collect()
    }

    pub fn sorted_summaries(&self, key: SortKey, order: SortOrder) -> Vec<ServiceSummary> {
        self.sorted_entries(key, order)
            .into_iter()
            .map(summarize)
            .collect()
    }

    fn sorted_entries(&self, key: SortKey, order: SortOrder) -> Vec<&ServiceEntry> {
        let mut sorted: Vec<&ServiceEntry> = self.entries.iter().collect();
        // stable: equal timestamps stay in insertion order
        match key {
            SortKey::Service => sorted.sort_by(|a, b| a.service.cmp(&b.service)),
            SortKey::AddedOn => sorted.sort_by(|a, b| a.record.added_on.cmp(&b.record.added_on)),
        }
        if order == SortOrder::Reversed {
            sorted.reverse();
        }
        sorted
    }

    fn find(&self, service: &str) -> Option<&ServiceEntry> {
        self.entries.iter().find(|e| e.service == service)
    }

    fn find_mut(&mut self, service: &str) -> Option<&mut ServiceEntry> {
        self.entries.iter_mut().find(|e| e.service == service)
    }
}

fn summarize(entry: &ServiceEntry) -> ServiceSummary {
    ServiceSummary {
        service: entry.service.clone(),
        added_on: entry.record.added_on,
        fingerprint: entry.record.fingerprint(),
    }
}

fn not_found(service: &str) -> RegistryError {
    RegistryError::NotFound {
        service: service.to_string(),
    }
}
