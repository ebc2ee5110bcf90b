//! Generator Configuration
//!
//! Settings are plain values passed into the generator at call time. The
//! probing budget and the topology retry budget tune different collaborators
//! and live in separate structs. `from_env` overrides are only read by the
//! binary.

use std::num::NonZeroU32;
use std::time::Duration;

use crate::assignment::strategy::IdStrategy;
use crate::replication::replicator::ReplicaFields;

/// Default number of candidate ids probed before giving up.
pub const DEFAULT_ATTEMPT_BUDGET: NonZeroU32 = NonZeroU32::new(5000).unwrap();

/// Default number of retries around a failed topology fetch.
pub const DEFAULT_TOPOLOGY_RETRIES: u32 = 5;

/// Settings for one ACL generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Candidate ids probed before the search fails (env: ACL_MAX_ATTEMPTS_TO_FIND_SHARD)
    pub attempt_budget: NonZeroU32,
    /// How candidate ids are derived (env: ACL_ID_STRATEGY, `literal` or `hashed`)
    pub strategy: IdStrategy,
    /// Field names written on every replica
    pub fields: ReplicaFields,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            strategy: IdStrategy::Literal,
            fields: ReplicaFields::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(budget) = lookup("ACL_MAX_ATTEMPTS_TO_FIND_SHARD") {
            match budget.parse::<NonZeroU32>() {
                Ok(parsed) => config.attempt_budget = parsed,
                Err(e) => {
                    tracing::warn!("Ignoring ACL_MAX_ATTEMPTS_TO_FIND_SHARD={}: {}", budget, e)
                }
            }
        }

        if let Some(strategy) = lookup("ACL_ID_STRATEGY") {
            match strategy.parse::<IdStrategy>() {
                Ok(parsed) => config.strategy = parsed,
                Err(e) => tracing::warn!("Ignoring ACL_ID_STRATEGY={}: {}", strategy, e),
            }
        }

        config
    }
}

/// Backoff policy for fetching cluster state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first failed fetch (env: ACL_TOPOLOGY_RETRIES)
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound for the doubling delay
    pub max_backoff: Duration,
    /// Upper bound for random jitter added to each delay
    pub max_jitter: Duration,
    /// Timeout of a single cluster-state request
    pub request_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_TOPOLOGY_RETRIES,
            initial_backoff: Duration::from_millis(150),
            max_backoff: Duration::from_millis(1200),
            max_jitter: Duration::from_millis(50),
            request_timeout: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Create configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(retries) = lookup("ACL_TOPOLOGY_RETRIES") {
            match retries.parse::<u32>() {
                Ok(parsed) => config.max_retries = parsed,
                Err(e) => tracing::warn!("Ignoring ACL_TOPOLOGY_RETRIES={}: {}", retries, e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_keep_budgets_separate() {
        let generator = GeneratorConfig::default();
        let retry = RetryConfig::default();

        assert_eq!(generator.attempt_budget.get(), 5000);
        assert_eq!(generator.strategy, IdStrategy::Literal);
        assert_eq!(retry.max_retries, 5);
    }

    #[test]
    fn test_generator_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("ACL_MAX_ATTEMPTS_TO_FIND_SHARD", "250"),
            ("ACL_ID_STRATEGY", "Hashed"),
        ]));

        assert_eq!(config.attempt_budget.get(), 250);
        assert_eq!(config.strategy, IdStrategy::Hashed);
    }

    #[test]
    fn test_invalid_overrides_fall_back_to_defaults() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("ACL_MAX_ATTEMPTS_TO_FIND_SHARD", "0"),
            ("ACL_ID_STRATEGY", "rot13"),
        ]));

        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_retry_override_does_not_touch_attempt_budget() {
        let lookup = lookup_from(&[("ACL_TOPOLOGY_RETRIES", "2")]);
        let retry = RetryConfig::from_lookup(&lookup);
        let generator = GeneratorConfig::from_lookup(&lookup);

        assert_eq!(retry.max_retries, 2);
        assert_eq!(generator.attempt_budget, DEFAULT_ATTEMPT_BUDGET);
    }

    #[test]
    fn test_invalid_retry_override_falls_back_to_default() {
        let retry = RetryConfig::from_lookup(lookup_from(&[("ACL_TOPOLOGY_RETRIES", "-1")]));

        assert_eq!(retry.max_retries, DEFAULT_TOPOLOGY_RETRIES);
    }
}
