//! Token and timing statistics for language-model calls.

use crate::UsageReport;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Model label used when none is supplied.
pub const DEFAULT_MODEL_NAME: &str = "llama3-8b-8192";

/// Usage measured for one or more generation calls.
///
/// Combining two records sums every numeric field. The model label is not
/// reconciled: the left-hand record keeps its own label, so a running total
/// shows whatever label it was created with.
///
/// # Examples
///
/// ```
/// use groqbook_core::GenerationStatistics;
///
/// let mut total = GenerationStatistics::new("Combined");
/// let section = GenerationStatistics::builder()
///     .input_tokens(120u64)
///     .output_tokens(880u64)
///     .output_time(2.0)
///     .total_time(2.5)
///     .build()
///     .unwrap();
///
/// total += &section;
/// assert_eq!(*total.output_tokens(), 880);
/// assert_eq!(total.output_speed(), 440.0);
/// assert_eq!(total.model_name(), "Combined");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerationStatistics {
    /// Seconds spent processing input.
    #[builder(default)]
    input_time: f64,
    /// Seconds spent producing output.
    #[builder(default)]
    output_time: f64,
    /// Number of input tokens.
    #[builder(default)]
    input_tokens: u64,
    /// Number of output tokens.
    #[builder(default)]
    output_tokens: u64,
    /// Total wall-clock seconds.
    #[builder(default)]
    total_time: f64,
    /// Model identifier shown in the summary.
    #[builder(default = "DEFAULT_MODEL_NAME.to_string()", setter(into))]
    model_name: String,
}

impl GenerationStatistics {
    /// Creates an all-zero record labelled with `model_name`.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            input_time: 0.0,
            output_time: 0.0,
            input_tokens: 0,
            output_tokens: 0,
            total_time: 0.0,
            model_name: model_name.into(),
        }
    }

    /// Creates a builder for GenerationStatistics.
    pub fn builder() -> GenerationStatisticsBuilder {
        GenerationStatisticsBuilder::default()
    }

    /// Builds a record from a provider usage report.
    pub fn from_usage(usage: &UsageReport, model_name: impl Into<String>) -> Self {
        Self {
            input_time: usage.prompt_time,
            output_time: usage.completion_time,
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
            total_time: usage.total_time,
            model_name: model_name.into(),
        }
    }

    /// Returns a new record holding the pairwise sums of both operands.
    ///
    /// Neither operand is modified. The result carries `self`'s model label.
    pub fn combine(&self, other: &GenerationStatistics) -> GenerationStatistics {
        let mut combined = self.clone();
        combined += other;
        combined
    }

    /// Input tokens per second, or zero when no input time was recorded.
    pub fn input_speed(&self) -> f64 {
        if self.input_time == 0.0 {
            0.0
        } else {
            self.input_tokens as f64 / self.input_time
        }
    }

    /// Output tokens per second, or zero when no output time was recorded.
    pub fn output_speed(&self) -> f64 {
        if self.output_time == 0.0 {
            0.0
        } else {
            self.output_tokens as f64 / self.output_time
        }
    }

    /// Input plus output tokens.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }

    /// Renders the fixed-format statistics panel.
    pub fn render(&self) -> String {
        format!(
            "## Generation Statistics\n\
             - **Model**: {}\n\
             - **Total Time**: {:.2}s\n\
             - **Output Speed**: {:.2} tokens/s\n\
             - **Total Tokens**: {}\n",
            self.model_name,
            self.total_time,
            self.output_speed(),
            self.total_tokens()
        )
    }
}

impl Default for GenerationStatistics {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_NAME)
    }
}

impl std::fmt::Display for GenerationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl AddAssign<&GenerationStatistics> for GenerationStatistics {
    fn add_assign(&mut self, other: &GenerationStatistics) {
        self.input_time += other.input_time;
        self.output_time += other.output_time;
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.total_time += other.total_time;
    }
}

impl Add for &GenerationStatistics {
    type Output = GenerationStatistics;

    fn add(self, other: &GenerationStatistics) -> GenerationStatistics {
        self.combine(other)
    }
}
