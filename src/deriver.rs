//! Derivation of lotto numbers from the hex digits of a UUIDv4.
//!
//! The hyphen-stripped hex digits are read left to right in chunks of four. Each chunk is parsed
//! as a 16-bit value `v` and contributes the number `(v mod 45) + 1` unless that number has
//! already been drawn. Derivation stops once six distinct numbers have been collected, the
//! attempt budget has been spent, or all eight chunks have been read.

use crate::id::{ParseError, Uuid};
use crate::numbers::{LottoNumbers, MAX_NUMBER};

/// Number of hex digits per chunk.
pub const CHUNK_LEN: usize = 4;

/// Number of chunks available in a 32-digit hex stream.
pub const CHUNK_COUNT: u32 = 8;

/// Derives six distinct lotto numbers from the string representation of a UUIDv4.
///
/// At most `max_attempts` chunks are consumed. Budgets above [`CHUNK_COUNT`] behave exactly like
/// [`CHUNK_COUNT`]; a budget of zero consumes nothing and always fails.
///
/// # Errors
///
/// - [`DeriveError::InvalidUuid`] if `uuid` is not a UUIDv4 in the 8-4-4-4-12 form.
/// - [`DeriveError::InsufficientUniqueNumbers`] if the chunks consumed yield fewer than six
///   distinct numbers.
///
/// # Examples
///
/// ```rust
/// let numbers = uuid_lotto::derive("123e4567-e89b-42d3-a456-426614174000", 20)?;
/// assert_eq!(numbers.as_slice(), &[36, 38, 13, 8, 41, 34]);
/// # Ok::<(), uuid_lotto::DeriveError>(())
/// ```
pub fn derive(uuid: &str, max_attempts: u32) -> Result<LottoNumbers, DeriveError> {
    let uuid = Uuid::parse_v4(uuid)?;
    derive_from_uuid(&uuid, max_attempts)
}

/// Derives six distinct lotto numbers from an already parsed UUID.
///
/// The version and variant bits are not checked here; [`derive`] is the validating entry point.
///
/// # Errors
///
/// Returns [`DeriveError::InsufficientUniqueNumbers`] if the chunks consumed yield fewer than six
/// distinct numbers.
pub fn derive_from_uuid(uuid: &Uuid, max_attempts: u32) -> Result<LottoNumbers, DeriveError> {
    let hex = uuid.simple();
    let mut numbers = LottoNumbers::new();
    let mut attempts = 0;
    while !numbers.is_complete() && attempts < max_attempts {
        match chunk_value(&hex, attempts as usize) {
            Some(value) => {
                numbers.insert(to_lotto_number(value));
            }
            // stream exhausted; later chunks are all empty
            None => break,
        }
        attempts += 1;
    }

    if numbers.is_complete() {
        Ok(numbers)
    } else {
        Err(DeriveError::InsufficientUniqueNumbers { numbers, attempts })
    }
}

/// Parses the `index`-th chunk of `hex` as a base-16 value.
///
/// Returns `None` when the chunk is empty (past the end of the stream) or not valid hex.
pub fn chunk_value(hex: &str, index: usize) -> Option<u16> {
    let start = (index * CHUNK_LEN).min(hex.len());
    let end = (start + CHUNK_LEN).min(hex.len());
    let chunk = hex.get(start..end)?;
    if chunk.is_empty() {
        return None;
    }
    u16::from_str_radix(chunk, 16).ok()
}

/// Maps a chunk value onto `1..=45`.
pub const fn to_lotto_number(value: u16) -> u8 {
    (value % MAX_NUMBER as u16) as u8 + 1
}

/// Error returned by [`derive`] and [`derive_from_uuid`].
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum DeriveError {
    /// The input is not a UUIDv4 in the 8-4-4-4-12 hexadecimal form.
    #[error("invalid UUID v4: {0}")]
    InvalidUuid(#[from] ParseError),

    /// The attempt budget or the hex stream ran out before six distinct numbers were found.
    #[error("found only {} unique numbers after {attempts} attempts", .numbers.len())]
    InsufficientUniqueNumbers {
        /// Distinct numbers collected before giving up.
        numbers: LottoNumbers,
        /// Chunks consumed.
        attempts: u32,
    },
}
