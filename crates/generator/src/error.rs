use thiserror::Error;

/// Structurally invalid generation requests.
///
/// Pool shortages are never reported here; they only shorten the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Lineup size is zero.
    #[error("Lineup size must be positive, got {size}")]
    InvalidLineupSize {
        /// Requested size.
        size: usize,
    },

    /// Preference string is not a known mix.
    #[error("Unknown over/under preference '{0}' (expected Even, MoreOvers, MoreUnders, Any or N_OVER_M_UNDER)")]
    UnknownPreference(String),

    /// Fixed mix counts do not add up to the lineup size.
    #[error("Mix {overs} over + {unders} under does not fill a lineup of {lineup_size}")]
    MixSizeMismatch {
        /// Overs requested by the mix.
        overs: usize,
        /// Unders requested by the mix.
        unders: usize,
        /// Configured lineup size.
        lineup_size: usize,
    },

    /// No attempts would ever be made.
    #[error("Attempts per lineup must be at least 1, got {0}")]
    InvalidAttemptBudget(usize),
}
