/// Default number of postfix terms one run may evaluate.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// How far the expression of a statement reaches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatementMode {
    /// Every expression ends at the next newline or `;`.
    #[default]
    Separated,
    /// Separators are ignored and each statement takes every remaining token
    /// as its expression. Only the first statement of a program is useful in
    /// this mode.
    Greedy,
}

/// Settings for a single run.
///
/// # Example
/// ```
/// use esperanto::config::{Config, StatementMode};
///
/// let config = Config::default().with_mode(StatementMode::Greedy)
///                               .with_max_steps(None);
/// assert_eq!(config.mode, StatementMode::Greedy);
/// assert_eq!(config.max_steps, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Statement separation rule.
    pub mode:      StatementMode,
    /// Upper bound on evaluated terms, or `None` for no bound.
    pub max_steps: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { mode:      StatementMode::default(),
               max_steps: Some(DEFAULT_MAX_STEPS), }
    }
}

impl Config {
    #[must_use]
    pub const fn with_mode(mut self, mode: StatementMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }
}
