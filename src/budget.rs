//! Attempt budget configuration.

use std::{fmt, num::ParseIntError, str};

use crate::deriver::CHUNK_COUNT;

/// A validated bound on the number of chunks the deriver may consume.
///
/// # Examples
///
/// ```rust
/// use uuid_lotto::AttemptBudget;
///
/// let budget: AttemptBudget = "60".parse()?;
/// assert!(budget.is_performance_risk());
/// assert_eq!(budget.effective(), 8);
/// assert!("0".parse::<AttemptBudget>().is_err());
/// # Ok::<(), uuid_lotto::BudgetError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AttemptBudget(u32);

impl AttemptBudget {
    /// Budget used when none is configured.
    pub const DEFAULT: Self = Self(20);

    /// Smallest accepted budget.
    pub const MIN: u32 = 1;

    /// Largest accepted budget.
    pub const MAX: u32 = 100;

    /// Budgets above this value are accepted but flagged as a performance risk.
    pub const WARN_THRESHOLD: u32 = 50;

    /// Creates a budget, rejecting values outside `MIN..=MAX`.
    pub const fn new(attempts: u32) -> Result<Self, BudgetError> {
        if attempts < Self::MIN || attempts > Self::MAX {
            Err(BudgetError::OutOfRange(attempts))
        } else {
            Ok(Self(attempts))
        }
    }

    /// Returns the configured number of attempts.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the number of attempts that can actually be spent on a 32-digit hex stream.
    pub const fn effective(&self) -> u32 {
        if self.0 < CHUNK_COUNT {
            self.0
        } else {
            CHUNK_COUNT
        }
    }

    /// Returns `true` if the budget exceeds [`AttemptBudget::WARN_THRESHOLD`].
    pub const fn is_performance_risk(&self) -> bool {
        self.0 > Self::WARN_THRESHOLD
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AttemptBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl str::FromStr for AttemptBudget {
    type Err = BudgetError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::new(src.trim().parse()?)
    }
}

impl TryFrom<u32> for AttemptBudget {
    type Error = BudgetError;

    fn try_from(src: u32) -> Result<Self, Self::Error> {
        Self::new(src)
    }
}

impl From<AttemptBudget> for u32 {
    fn from(src: AttemptBudget) -> Self {
        src.0
    }
}

/// Error creating an [`AttemptBudget`].
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum BudgetError {
    /// The text is not a non-negative integer.
    #[error("attempt budget is not a number: {0}")]
    Malformed(#[from] ParseIntError),

    /// The value lies outside the accepted range.
    #[error(
        "attempt budget must be between {} and {}, got {0}",
        AttemptBudget::MIN,
        AttemptBudget::MAX
    )]
    OutOfRange(u32),
}
