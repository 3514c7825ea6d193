//! Token accounting for the per-request cost estimate.

/// Tokens billed by the completion calls issued during one request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenUsage {
    pub total_tokens: u64,
}

impl TokenUsage {
    pub fn record(&mut self, tokens: u64) {
        self.total_tokens += tokens;
    }

    /// Estimated price in dollars at `cost_per_1k` per thousand tokens.
    pub fn estimated_cost(&self, cost_per_1k: f64) -> f64 {
        self.total_tokens as f64 / 1000.0 * cost_per_1k
    }
}
