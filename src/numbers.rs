//! Insertion-ordered set of lotto numbers.

use std::fmt;

/// Number of distinct picks that make up a complete ticket.
pub const PICK_COUNT: usize = 6;

/// Largest number that can be drawn; the smallest is `1`.
pub const MAX_NUMBER: u8 = 45;

/// A set of up to [`PICK_COUNT`] distinct lotto numbers kept in order of discovery.
///
/// The capacity is tiny, so membership is a linear scan over a fixed array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LottoNumbers {
    picks: [u8; PICK_COUNT],
    len: usize,
}

impl LottoNumbers {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            picks: [0; PICK_COUNT],
            len: 0,
        }
    }

    /// Adds `number` unless it is already present or the set is full. Returns `true` if the
    /// number was added.
    pub fn insert(&mut self, number: u8) -> bool {
        debug_assert!((1..=MAX_NUMBER).contains(&number));
        if self.is_complete() || self.contains(number) {
            return false;
        }
        self.picks[self.len] = number;
        self.len += 1;
        true
    }

    /// Returns `true` if `number` has been discovered.
    pub fn contains(&self, number: u8) -> bool {
        self.as_slice().contains(&number)
    }

    /// Returns the number of distinct picks collected so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no number has been collected.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once [`PICK_COUNT`] distinct numbers have been collected.
    pub const fn is_complete(&self) -> bool {
        self.len == PICK_COUNT
    }

    /// Returns the picks in order of discovery.
    pub fn as_slice(&self) -> &[u8] {
        &self.picks[..self.len]
    }

    /// Returns an iterator over the picks in order of discovery.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_slice().iter()
    }

    /// Returns the picks in ascending order.
    pub fn sorted(&self) -> Vec<u8> {
        let mut v = self.as_slice().to_vec();
        v.sort_unstable();
        v
    }
}

impl<'a> IntoIterator for &'a LottoNumbers {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LottoNumbers {
    /// Writes the picks in order of discovery separated by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for LottoNumbers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
