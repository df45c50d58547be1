//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of candidates registered for one election
    pub max_candidates_per_election: usize,
    /// Lowest year of study allowed to stand as a candidate
    pub min_candidate_year: u8,
    /// Highest year of study allowed to stand as a candidate
    pub max_candidate_year: u8,
    /// Lowest year of study allowed to vote
    pub min_voter_year: u8,
    /// Highest year of study allowed to vote
    pub max_voter_year: u8,
    /// Whether students may currently cast votes
    pub voting_enabled: bool,
    /// Preload a sample election, candidate and students at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `MAX_CANDIDATES_PER_ELECTION` - Candidate cap per election (default: 10)
    /// - `MIN_CANDIDATE_YEAR` / `MAX_CANDIDATE_YEAR` - Candidate years (default: 2 / 4)
    /// - `MIN_VOTER_YEAR` / `MAX_VOTER_YEAR` - Voter years (default: 1 / 4)
    /// - `VOTING_ENABLED` - Accept votes (default: true)
    /// - `SEED_DEMO_DATA` - Load sample records at startup (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            max_candidates_per_election: env_or(
                "MAX_CANDIDATES_PER_ELECTION",
                defaults.max_candidates_per_election,
            ),
            min_candidate_year: env_or("MIN_CANDIDATE_YEAR", defaults.min_candidate_year),
            max_candidate_year: env_or("MAX_CANDIDATE_YEAR", defaults.max_candidate_year),
            min_voter_year: env_or("MIN_VOTER_YEAR", defaults.min_voter_year),
            max_voter_year: env_or("MAX_VOTER_YEAR", defaults.max_voter_year),
            voting_enabled: env_or("VOTING_ENABLED", defaults.voting_enabled),
            seed_demo_data: env_or("SEED_DEMO_DATA", defaults.seed_demo_data),
        }
    }

    /// Eligibility rules derived from this configuration.
    pub fn eligibility(&self) -> EligibilityRules {
        EligibilityRules {
            candidate_years: self.min_candidate_year..=self.max_candidate_year,
            voter_years: self.min_voter_year..=self.max_voter_year,
            max_candidates_per_election: self.max_candidates_per_election,
            voting_enabled: self.voting_enabled,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            max_candidates_per_election: 10,
            min_candidate_year: 2,
            max_candidate_year: 4,
            min_voter_year: 1,
            max_voter_year: 4,
            voting_enabled: true,
            seed_demo_data: false,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// == Eligibility Rules ==
/// Business rules shared by the candidate and student services.
#[derive(Debug, Clone)]
pub struct EligibilityRules {
    pub candidate_years: RangeInclusive<u8>,
    pub voter_years: RangeInclusive<u8>,
    pub max_candidates_per_election: usize,
    pub voting_enabled: bool,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Config::default().eligibility()
    }
}
