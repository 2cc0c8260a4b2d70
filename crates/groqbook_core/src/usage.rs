//! Vendor-neutral usage reports.

use serde::{Deserialize, Serialize};

/// Token counts and timings a provider reports for one completion.
///
/// Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageReport {
    /// Seconds spent processing the prompt
    #[serde(default)]
    pub prompt_time: f64,
    /// Seconds spent generating the completion
    #[serde(default)]
    pub completion_time: f64,
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u64,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u64,
    /// Wall-clock seconds for the whole request
    #[serde(default)]
    pub total_time: f64,
}
