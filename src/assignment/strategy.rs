use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::hashing::namespace::acl_id_hash;

/// Separator between the base id and the probe counter.
pub const CANDIDATE_SEPARATOR: &str = "___";

/// Stand-in for `!` in literal ids. The router reads `!` as a composite-id
/// separator, so it must never reach a candidate.
pub const BANG_REPLACEMENT: &str = "_BNG_";

/// How candidate ids are derived from the ACL document's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<id with ! replaced>___<counter>`. Keeps ids readable.
    #[default]
    Literal,
    /// `<namespace hash of id>___<counter>`. Bounds id length and normalizes any input.
    Hashed,
}

impl IdStrategy {
    /// Maps the legacy "hash id to long" switch onto a strategy.
    pub fn from_hash_id_to_long(hash_id_to_long: bool) -> Self {
        if hash_id_to_long {
            Self::Hashed
        } else {
            Self::Literal
        }
    }

    /// The part of every candidate that precedes the separator.
    pub fn base(self, base_id: &str) -> String {
        match self {
            Self::Literal => base_id.replace('!', BANG_REPLACEMENT),
            Self::Hashed => acl_id_hash(base_id).to_string(),
        }
    }

    /// The candidate id probed at `counter`.
    pub fn candidate(self, base_id: &str, counter: u64) -> String {
        format_candidate(&self.base(base_id), counter)
    }

    /// Endless, ordered candidate sequence starting at counter 0.
    pub fn candidates(self, base_id: &str) -> Candidates {
        Candidates {
            base: self.base(base_id),
            counter: 0,
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Hashed => write!(f, "hashed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id strategy '{0}', expected 'literal' or 'hashed'")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "hashed" => Ok(Self::Hashed),
            _ => Err(UnknownIdStrategy(s.to_string())),
        }
    }
}

/// Candidate ids for one base id, counter 0, 1, 2, ...
///
/// The base is derived once, so the hash or sanitization is not repeated per probe.
#[derive(Debug, Clone)]
pub struct Candidates {
    base: String,
    counter: u64,
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let candidate = format_candidate(&self.base, self.counter);
        self.counter += 1;
        Some(candidate)
    }
}

fn format_candidate(base: &str, counter: u64) -> String {
    format!("{}{}{}", base, CANDIDATE_SEPARATOR, counter)
}
