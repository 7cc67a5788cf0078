//! Caller-owned plan cache.
//!
//! Generation is pure, so a plan can be reused for as long as the caller
//! likes. The scheduler never reads or writes this cache; callers that want
//! memoization own a `PlanCache` and route requests through it.
//!
//! Concurrent misses for the same configuration simply generate twice.

use crate::scheduler::TrainingScheduler;
use crate::{Result, ScheduledTrainingPlan, TrainingPlanConfig};
use chrono::{DateTime, Duration, Utc};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Hash of the full configuration, used as the cache key
pub fn config_key(config: &TrainingPlanConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

#[derive(Clone, Debug)]
struct CacheEntry {
    config: TrainingPlanConfig,
    plan: ScheduledTrainingPlan,
    inserted_at: DateTime<Utc>,
}

/// Time-bounded map from configuration to generated plan
#[derive(Clone, Debug)]
pub struct PlanCache {
    ttl: Duration,
    entries: HashMap<u64, CacheEntry>,
}

impl PlanCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached plan for `config` if present and younger than the TTL at `now`
    pub fn get_at(
        &self,
        config: &TrainingPlanConfig,
        now: DateTime<Utc>,
    ) -> Option<&ScheduledTrainingPlan> {
        self.entries
            .get(&config_key(config))
            .filter(|entry| entry.config == *config)
            .filter(|entry| now - entry.inserted_at < self.ttl)
            .map(|entry| &entry.plan)
    }

    pub fn get(&self, config: &TrainingPlanConfig) -> Option<&ScheduledTrainingPlan> {
        self.get_at(config, Utc::now())
    }

    pub fn insert_at(
        &mut self,
        config: &TrainingPlanConfig,
        plan: ScheduledTrainingPlan,
        now: DateTime<Utc>,
    ) {
        self.entries.insert(
            config_key(config),
            CacheEntry {
                config: config.clone(),
                plan,
                inserted_at: now,
            },
        );
    }

    pub fn insert(&mut self, config: &TrainingPlanConfig, plan: ScheduledTrainingPlan) {
        self.insert_at(config, plan, Utc::now())
    }

    /// Return the cached plan, or generate and cache a fresh one
    pub fn get_or_generate_at(
        &mut self,
        scheduler: &TrainingScheduler,
        config: &TrainingPlanConfig,
        now: DateTime<Utc>,
    ) -> Result<ScheduledTrainingPlan> {
        if let Some(plan) = self.get_at(config, now) {
            tracing::debug!("Plan cache hit for key {:016x}", config_key(config));
            return Ok(plan.clone());
        }

        tracing::debug!("Plan cache miss for key {:016x}", config_key(config));
        let plan = scheduler.generate(config)?;
        self.insert_at(config, plan.clone(), now);
        Ok(plan)
    }

    pub fn get_or_generate(
        &mut self,
        scheduler: &TrainingScheduler,
        config: &TrainingPlanConfig,
    ) -> Result<ScheduledTrainingPlan> {
        self.get_or_generate_at(scheduler, config, Utc::now())
    }

    /// Drop entries older than the TTL, returning how many were removed
    pub fn purge_expired_at(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.inserted_at < ttl);
        before - self.entries.len()
    }

    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
