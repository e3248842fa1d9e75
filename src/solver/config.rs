//! Search configuration
//!
//! Knobs for the expected-plays search and for choosing between the exact
//! search and the information-gain shortcut.

/// Wider-pool guesses examined when the candidate-only search falls short
pub const DEFAULT_FALLBACK_LIMIT: usize = 100;

/// Score for a subtree cut off by the depth limit
pub const DEFAULT_DEPTH_PENALTY: f64 = 100.0;

/// Expected plays for a lone board with two candidates
pub const TWO_CANDIDATE_PLAYS: f64 = 1.5;

/// Joint combinations below which recommendations use the exact search
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: u64 = 200;

/// Moves listed by an information-gain recommendation
pub const DEFAULT_SHORTLIST: usize = 10;

/// Best expected plays any guess could reach
///
/// One play per board, plus the chance `(m - 1) / m` of missing on the
/// smallest board of size `m`.
#[must_use]
pub fn best_possible(boards: usize, smallest: usize) -> f64 {
    let m = smallest.max(1) as f64;
    boards as f64 + (m - 1.0) / m
}

/// Expected plays above which the wider pool is searched
#[must_use]
pub fn trivial_bound(boards: usize) -> f64 {
    boards as f64 + 1.0
}

/// Expected-plays search settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Wider-pool guesses evaluated after a weak candidate-only search
    pub fallback_limit: usize,

    /// Recursion depth past which subtrees are scored with `depth_penalty`
    /// (default: unlimited)
    pub max_depth: Option<usize>,

    /// Expected plays assigned to a cut-off subtree (default: 100)
    pub depth_penalty: f64,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(fallback_limit: usize, max_depth: Option<usize>, depth_penalty: f64) -> Self {
        Self {
            fallback_limit,
            max_depth,
            depth_penalty,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_FALLBACK_LIMIT, // fallback_limit
            None,                   // max_depth: search to the end
            DEFAULT_DEPTH_PENALTY,  // depth_penalty
        )
    }
}

/// How a recommendation is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Full expected-plays search
    Exhaustive,

    /// Ranking by summed information gain only
    InformationGain,
}

/// Recommendation settings
///
/// Uses cascading comparisons on the number of joint answer combinations:
/// ```text
/// if combinations < exhaustive_threshold → Exhaustive
/// else                                   → InformationGain
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendConfig {
    /// Combinations below this use the exact search (default: 200)
    pub exhaustive_threshold: u64,

    /// Moves to list (default: 10)
    pub shortlist: usize,

    pub solver: SolverConfig,
}

impl RecommendConfig {
    #[must_use]
    pub const fn mode(&self, combinations: u64) -> SearchMode {
        if combinations < self.exhaustive_threshold {
            SearchMode::Exhaustive
        } else {
            SearchMode::InformationGain
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            exhaustive_threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            shortlist: DEFAULT_SHORTLIST,
            solver: SolverConfig::default(),
        }
    }
}
