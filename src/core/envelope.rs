//! Response envelopes with timing metadata

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Smallest `query_time` ever reported, in seconds
pub const MIN_QUERY_TIME: f64 = 1e-9;

/// Convert an elapsed duration to the reported `query_time`
///
/// Coarse clocks can report a zero duration; the result is clamped so
/// `query_time` is always strictly positive.
pub fn query_time(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64().max(MIN_QUERY_TIME)
}

/// Envelope for collection responses
///
/// `total_size` counts the elements in `results`, after windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub total_size: usize,
    pub query_time: f64,
    pub results: Vec<Value>,
}

/// Envelope for single element responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleEnvelope {
    pub query_time: f64,
    pub results: Value,
}

/// Measures request handling time and wraps results into envelopes
///
/// # Example
/// ```rust,ignore
/// let timer = QueryTimer::start();
/// let results = fetch_and_serialize()?;
/// Ok(timer.finish_list(results))
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryTimer {
    started: Instant,
}

impl QueryTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since [`start`](Self::start), always positive
    pub fn elapsed_seconds(&self) -> f64 {
        query_time(self.started.elapsed())
    }

    pub fn finish_list(self, results: Vec<Value>) -> ListEnvelope {
        ListEnvelope {
            total_size: results.len(),
            query_time: self.elapsed_seconds(),
            results,
        }
    }

    pub fn finish_single(self, result: Value) -> SingleEnvelope {
        SingleEnvelope {
            query_time: self.elapsed_seconds(),
            results: result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_elapsed_is_still_positive() {
        assert!(query_time(Duration::ZERO) > 0.0);
        assert_eq!(query_time(Duration::from_millis(1500)), 1.5);
    }

    #[test]
    fn test_list_envelope_counts_results() {
        let envelope = QueryTimer::start().finish_list(vec![json!({"_id": 1}), json!({"_id": 2})]);
        assert_eq!(envelope.total_size, 2);
        assert!(envelope.query_time > 0.0);

        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["total_size"], 2);
        assert!(body["results"].is_array());
    }

    #[test]
    fn test_empty_list_envelope() {
        let body = serde_json::to_value(QueryTimer::start().finish_list(vec![])).unwrap();
        assert_eq!(body["total_size"], 0);
        assert_eq!(body["results"], json!([]));
    }

    #[test]
    fn test_single_envelope_has_no_total_size() {
        let envelope = QueryTimer::start().finish_single(json!({"_id": "a"}));
        let body = serde_json::to_value(&envelope).unwrap();

        let object = body.as_object().unwrap();
        assert!(!object.contains_key("total_size"));
        assert!(object["query_time"].as_f64().unwrap() > 0.0);
        assert!(object["results"].is_object());
    }
}
