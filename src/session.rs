//! Caller-owned state for an interactive front end.

use std::fmt;

use rand::RngCore;

use crate::{derive, AttemptBudget, DeriveError, LottoNumbers, V4Generator};

/// The state behind a "type a UUID, press a button" form.
///
/// A session holds the UUID text the user entered, the numbers from the last successful
/// derivation and the error from the last failed one. At most one of the two outcomes is set
/// at a time; a failed derivation always clears earlier numbers.
///
/// # Examples
///
/// ```rust
/// use uuid_lotto::{AttemptBudget, Session};
///
/// let mut s = Session::new(AttemptBudget::DEFAULT);
/// s.set_uuid_input("123e4567-e89b-42d3-a456-426614174000");
/// assert!(s.generate_from_input().is_ok());
/// assert_eq!(s.to_string(), "Lotto Numbers: 36, 38, 13, 8, 41, 34");
///
/// s.set_uuid_input("not-a-uuid");
/// assert!(s.generate_from_input().is_err());
/// assert!(s.numbers().is_none());
/// assert_eq!(s.to_string(), "Invalid UUID v4. Please enter a valid UUID.");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    uuid_input: String,
    numbers: Option<LottoNumbers>,
    error: Option<DeriveError>,
    budget: AttemptBudget,
}

impl Session {
    /// Creates an empty session.
    pub fn new(budget: AttemptBudget) -> Self {
        Self {
            budget,
            ..Default::default()
        }
    }

    /// Replaces the UUID text without deriving anything.
    pub fn set_uuid_input(&mut self, input: impl Into<String>) {
        self.uuid_input = input.into();
    }

    /// Returns the current UUID text.
    pub fn uuid_input(&self) -> &str {
        &self.uuid_input
    }

    /// Returns the numbers from the last successful derivation.
    pub fn numbers(&self) -> Option<&LottoNumbers> {
        self.numbers.as_ref()
    }

    /// Returns the error from the last failed derivation.
    pub fn error(&self) -> Option<&DeriveError> {
        self.error.as_ref()
    }

    /// Returns the attempt budget used for derivations.
    pub fn budget(&self) -> AttemptBudget {
        self.budget
    }

    /// Derives numbers from the current UUID text and records the outcome.
    pub fn generate_from_input(&mut self) -> Result<&LottoNumbers, &DeriveError> {
        match derive(self.uuid_input.trim(), self.budget.get()) {
            Ok(numbers) => {
                self.error = None;
                Ok(self.numbers.insert(numbers))
            }
            Err(e) => {
                self.numbers = None;
                Err(self.error.insert(e))
            }
        }
    }

    /// Generates a fresh UUIDv4 with `generator`, stores it as the UUID text and derives numbers
    /// from it.
    pub fn generate_with<R: RngCore>(
        &mut self,
        generator: &mut V4Generator<R>,
    ) -> Result<&LottoNumbers, &DeriveError> {
        self.uuid_input = generator.generate().to_string();
        self.generate_from_input()
    }

    /// Same as [`Session::generate_with`] using the process-wide generator.
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn generate_random(&mut self) -> Result<&LottoNumbers, &DeriveError> {
        self.uuid_input = crate::uuid4().to_string();
        self.generate_from_input()
    }
}

impl fmt::Display for Session {
    /// Writes the message a front end shows for the last outcome, or nothing before the first
    /// derivation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.numbers, &self.error) {
            (Some(numbers), _) => write!(f, "Lotto Numbers: {}", numbers),
            (None, Some(DeriveError::InvalidUuid(_))) => {
                f.write_str("Invalid UUID v4. Please enter a valid UUID.")
            }
            (None, Some(DeriveError::InsufficientUniqueNumbers { .. })) => f.write_str(
                "Could not find 6 unique numbers. Try another UUID or a larger attempt budget.",
            ),
            (None, None) => Ok(()),
        }
    }
}
