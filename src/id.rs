use std::{fmt, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

const DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv4 from 16 arbitrary bytes by overwriting the version and variant bits.
    pub const fn from_random_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Returns the version nibble (the 13th hex digit).
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant nibble (the 17th hex digit).
    const fn variant_nibble(&self) -> u8 {
        self.0[8] >> 4
    }

    /// Returns `true` if the version nibble is `4` and the variant nibble is one of `8`, `9`,
    /// `a`, or `b`.
    pub const fn is_v4(&self) -> bool {
        self.version() == 4 && matches!(self.variant_nibble(), 0x8..=0xb)
    }

    /// Parses the 8-4-4-4-12 hexadecimal string representation and requires the result to be a
    /// UUIDv4.
    ///
    /// Hex digits are accepted in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_lotto::{ParseError, Uuid};
    ///
    /// assert!(Uuid::parse_v4("123e4567-e89b-42d3-a456-426614174000").is_ok());
    /// assert_eq!(
    ///     Uuid::parse_v4("123e4567-e89b-12d3-a456-426614174000"),
    ///     Err(ParseError::Version('1'))
    /// );
    /// ```
    pub fn parse_v4(src: &str) -> Result<Self, ParseError> {
        let uuid: Self = src.parse()?;
        if uuid.version() != 4 {
            Err(ParseError::Version(nibble_char(uuid.version())))
        } else if !uuid.is_v4() {
            Err(ParseError::Variant(nibble_char(uuid.variant_nibble())))
        } else {
            Ok(uuid)
        }
    }

    /// Returns the 8-4-4-4-12 lowercase hexadecimal string representation stored in a
    /// stack-allocated string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_lotto::Uuid;
    ///
    /// let x = "123E4567-E89B-42D3-A456-426614174000".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "123e4567-e89b-42d3-a456-426614174000");
    /// # Ok::<(), uuid_lotto::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer only holds ASCII hex digits and hyphens
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns the 32-digit lowercase hexadecimal string without hyphens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_lotto::Uuid;
    ///
    /// let x = "123e4567-e89b-42d3-a456-426614174000".parse::<Uuid>()?;
    /// assert_eq!(&x.simple() as &str, "123e4567e89b42d3a456426614174000");
    /// # Ok::<(), uuid_lotto::ParseError>(())
    /// ```
    pub fn simple(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (i, e) in self.0.iter().enumerate() {
            buffer[i * 2] = DIGITS[(e >> 4) as usize];
            buffer[i * 2 + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer only holds ASCII hex digits
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

fn nibble_char(nibble: u8) -> char {
    DIGITS[(nibble & 15) as usize] as char
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Any version and variant are accepted; see [`Uuid::parse_v4`] for the strict form.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError::Syntax;
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not 32 hex digits in 8-4-4-4-12 hyphenated groups.
    #[error("invalid string representation")]
    Syntax,

    /// The version nibble is not `4`.
    #[error("unsupported version nibble '{0}' (expected '4')")]
    Version(char),

    /// The variant nibble is not one of `8`, `9`, `a`, or `b`.
    #[error("unsupported variant nibble '{0}' (expected one of '8', '9', 'a', 'b')")]
    Variant(char),
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "123e4567-e89b-42d3-a456-426614174000",
                    &[
                        0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x42, 0xd3, 0xa4, 0x56, 0x42, 0x66,
                        0x14, 0x17, 0x40, 0x00,
                    ],
                ),
                (
                    "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
                    &[
                        0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2,
                        0x22, 0x82, 0x0f, 0x6f,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
