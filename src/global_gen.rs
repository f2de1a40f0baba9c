//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use rand_chacha::ChaCha12Rng;

use crate::{LottoNumbers, Uuid, V4Generator};

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, V4Generator<ChaCha12Rng>> {
    static G: sync::OnceLock<sync::Mutex<V4Generator<ChaCha12Rng>>> = sync::OnceLock::new();
    G.get_or_init(|| sync::Mutex::new(V4Generator::from_entropy()))
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_lotto::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert!(uuid.is_v4());
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().generate()
}

/// Generates a fresh UUIDv4 and derives a ticket from it.
///
/// Returns the UUID alongside the outcome so the caller can show which identifier the numbers
/// came from.
///
/// # Examples
///
/// ```rust
/// let (uuid, result) = uuid_lotto::quick_pick(20);
/// if let Ok(numbers) = result {
///     println!("{}: {}", uuid, numbers);
/// }
/// ```
pub fn quick_pick(max_attempts: u32) -> (Uuid, Result<LottoNumbers, crate::DeriveError>) {
    let uuid = uuid4();
    (uuid, crate::derive_from_uuid(&uuid, max_attempts))
}
