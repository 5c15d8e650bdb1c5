//! Token usage tracking across agent sessions.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage in total and per session.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_session: HashMap<String, TokenUsage>,
    /// Number of model calls made.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one model call made for `session_id`.
    pub fn record(&mut self, session_id: &str, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;

        let entry = self.by_session.entry(session_id.to_string()).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_session(&self, session_id: &str) -> Option<&TokenUsage> {
        self.by_session.get(session_id)
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn records_totals_and_per_session() {
        let mut tracker = TokenTracker::new();
        tracker.record("s1", &usage(10, 2));
        tracker.record("s1", &usage(20, 3));
        tracker.record("s2", &usage(5, 1));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total().total_tokens(), 41);
        assert_eq!(tracker.for_session("s1"), Some(&usage(30, 5)));
        assert_eq!(tracker.for_session("s2"), Some(&usage(5, 1)));
        assert!(tracker.for_session("s3").is_none());
    }
}
