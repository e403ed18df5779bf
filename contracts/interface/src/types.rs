use crate::error::{InterfaceError, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of user account created by `InitUserAccount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccountTypeTag {
    /// Index of the datasets an authority owns
    Owner = 0,
    /// Index of the datasets an authority can access
    Access = 1,
}

impl AccountTypeTag {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccountTypeTag {
    type Error = InterfaceError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(AccountTypeTag::Owner),
            1 => Ok(AccountTypeTag::Access),
            _ => Err(InterfaceError::InvalidAccountType(value.to_string())),
        }
    }
}

impl FromStr for AccountTypeTag {
    type Err = InterfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "owner" => Ok(AccountTypeTag::Owner),
            "access" => Ok(AccountTypeTag::Access),
            _ => Err(InterfaceError::InvalidAccountType(s.to_string())),
        }
    }
}

impl fmt::Display for AccountTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTypeTag::Owner => f.write_str("owner"),
            AccountTypeTag::Access => f.write_str("access"),
        }
    }
}

/// Token amount, little-endian `u64` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Amount(u64);

impl Amount {
    pub const LEN: usize = 8;

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl TryFrom<u128> for Amount {
    type Error = InterfaceError;

    fn try_from(value: u128) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| InterfaceError::Overflow(value.to_string()))
    }
}

impl TryFrom<i128> for Amount {
    type Error = InterfaceError;

    fn try_from(value: i128) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| InterfaceError::Overflow(value.to_string()))
    }
}

impl FromStr for Amount {
    type Err = InterfaceError;

    /// Parses a base-10 integer amount with at most one leading sign. Anything
    /// that is a valid integer but outside `u64` is an overflow rather than a
    /// parse failure; `-0` is zero.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InterfaceError::InvalidAmount(s.to_string()));
        }
        if digits.bytes().all(|b| b == b'0') {
            return Ok(Self(0));
        }
        if negative {
            return Err(InterfaceError::Overflow(s.to_string()));
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InterfaceError::Overflow(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
