//! Deterministic lotto numbers from a UUIDv4
//!
//! ```rust
//! let numbers = uuid_lotto::derive("123e4567-e89b-42d3-a456-426614174000", 20)?;
//! println!("{}", numbers); // "36, 38, 13, 8, 41, 34"
//! # Ok::<(), uuid_lotto::DeriveError>(())
//! ```
//!
//! # Derivation
//!
//! The hyphens are removed from the 8-4-4-4-12 representation and the remaining 32 hex digits
//! are read in eight chunks of four:
//!
//! ```text
//! 123e4567-e89b-42d3-a456-426614174000
//!
//! 123e 4567 e89b 42d3 a456 4266 1417 4000
//!   36   38   13    8   41   34   14    5
//! ```
//!
//! Each chunk is parsed as a 16-bit value `v` and mapped onto `(v mod 45) + 1`. Numbers that
//! were already drawn are skipped. Derivation succeeds as soon as six distinct numbers have been
//! collected and fails with [`DeriveError::InsufficientUniqueNumbers`] if the attempt budget or
//! the eight chunks run out first. Only UUIDv4 strings are accepted (version nibble `4`,
//! variant nibble `8`, `9`, `a` or `b`, either case); anything else fails with
//! [`DeriveError::InvalidUuid`].
//!
//! The result is a pure function of the UUID and the budget. The same UUID always yields the
//! same numbers, regardless of the case of its hex digits.
//!
//! # Other features
//!
//! This library also generates the UUIDv4 input when the user does not supply one:
//!
//! ```rust
//! let (uuid, result) = uuid_lotto::quick_pick(20);
//! match result {
//!     Ok(numbers) => println!("{}: {}", uuid, numbers),
//!     Err(e) => eprintln!("{}: {}", uuid, e),
//! }
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: Enables the process-wide UUIDv4 generator ([`uuid4`], [`quick_pick`]) and
//!   the seedable ChaCha12 constructors of [`V4Generator`].
//! - `cli`: Builds the `uuid-lotto` command-line tool.
//!
//! Optional features:
//!
//! - `serde`: Enables serialization/deserialization of [`Uuid`] and serialization of
//!   [`LottoNumbers`] via serde.
//! - `uuid`: Enables conversion from/to `uuid::Uuid` of the `uuid` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid};

mod numbers;
pub use numbers::{LottoNumbers, MAX_NUMBER, PICK_COUNT};

mod deriver;
pub use deriver::{
    chunk_value, derive, derive_from_uuid, to_lotto_number, DeriveError, CHUNK_COUNT, CHUNK_LEN,
};

mod budget;
pub use budget::{AttemptBudget, BudgetError};

pub mod generator;
pub use generator::V4Generator;

mod session;
pub use session::Session;

#[cfg(feature = "global_gen")]
mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{quick_pick, uuid4};
