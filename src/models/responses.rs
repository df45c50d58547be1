//! Response DTOs for the election API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! plain entities.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for DELETE operations
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted, as a string
    pub id: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse for an entity kind such as "Election"
    pub fn new(kind: &str, id: i32) -> Self {
        Self {
            message: format!("{} deleted successfully", kind),
            id: id.to_string(),
        }
    }
}

/// Response body for the count endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

impl CountResponse {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

/// Response body for the cache stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by invalidation
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearResponse {
    pub message: String,
    /// Entries held before the clear
    pub cleared: usize,
}

impl CacheClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: "Cache cleared".to_string(),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("Election", 7);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["message"], "Election deleted successfully");
        assert_eq!(json["id"], "7");
    }

    #[test]
    fn test_count_response_serialize() {
        let json = serde_json::to_string(&CountResponse::new(3)).unwrap();
        assert_eq!(json, r#"{"count":3}"#);
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let resp = CacheStatsResponse::from(CacheStats {
            hits: 80,
            misses: 20,
            invalidations: 5,
            total_entries: 4,
        });
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.invalidations, 5);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
