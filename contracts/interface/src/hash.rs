use crate::error::{InterfaceError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Content-addressing digest of a dataset.
///
/// Always exactly [`ContentHash::LEN`] bytes. It travels on the wire as the
/// raw bytes with no length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// SHA-256 of the dataset contents.
    pub fn digest(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Parse 64 hex characters, with or without a leading `0x`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for ContentHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ContentHash {
    type Error = InterfaceError;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; 32] = value.try_into().map_err(|_| InterfaceError::InvalidLength {
            expected: Self::LEN,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<Vec<u8>> for ContentHash {
    type Error = InterfaceError;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::try_from(value.as_slice())
    }
}

impl FromStr for ContentHash {
    type Err = InterfaceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_exact_length() {
        let hash = ContentHash::try_from([7u8; 32].as_slice()).unwrap();
        assert_eq!(hash.to_bytes(), [7u8; 32]);
    }

    #[test]
    fn test_try_from_rejects_short_and_long() {
        let short = ContentHash::try_from([0u8; 31].as_slice()).unwrap_err();
        assert!(matches!(
            short,
            InterfaceError::InvalidLength {
                expected: 32,
                actual: 31
            }
        ));

        let long = ContentHash::try_from(vec![0u8; 33]).unwrap_err();
        assert!(matches!(
            long,
            InterfaceError::InvalidLength {
                expected: 32,
                actual: 33
            }
        ));
    }

    #[test]
    fn test_hex_parsing() {
        let hex_str = "ff".repeat(32);
        let hash: ContentHash = hex_str.parse().unwrap();
        assert_eq!(hash.to_bytes(), [0xFF; 32]);

        let prefixed = ContentHash::from_hex(&format!("0x{}", hex_str)).unwrap();
        assert_eq!(prefixed, hash);
        assert_eq!(hash.to_string(), hex_str);
    }

    #[test]
    fn test_hex_wrong_length() {
        let err = ContentHash::from_hex("abcd").unwrap_err();
        assert!(matches!(err, InterfaceError::InvalidLength { actual: 2, .. }));

        let err = ContentHash::from_hex("zz").unwrap_err();
        assert!(matches!(err, InterfaceError::InvalidHex(_)));
    }

    #[test]
    fn test_digest_is_sha256() {
        // sha256("")
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(ContentHash::digest(b"").to_string(), expected);
    }
}
