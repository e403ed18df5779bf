//! Payload codec.
//!
//! Encode-only: one opcode byte followed by each field's canonical encoding,
//! in order. Decoding belongs to the ledger program.

use crate::hash::ContentHash;
use crate::instruction::Opcode;
use crate::types::{AccountTypeTag, Amount};

/// A single typed field of an instruction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// 1 byte, raw enumeration value
    AccountType(AccountTypeTag),
    /// 32 raw bytes, no length prefix
    Hash(&'a ContentHash),
    /// 8 bytes, little-endian
    Amount(Amount),
    /// Pre-serialized bytes, appended as-is
    Params(&'a [u8]),
}

impl Field<'_> {
    pub fn encoded_len(&self) -> usize {
        match self {
            Field::AccountType(_) => 1,
            Field::Hash(_) => ContentHash::LEN,
            Field::Amount(_) => Amount::LEN,
            Field::Params(bytes) => bytes.len(),
        }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        match self {
            Field::AccountType(tag) => buf.push(tag.as_u8()),
            Field::Hash(hash) => buf.extend_from_slice(hash.as_bytes()),
            Field::Amount(amount) => buf.extend_from_slice(&amount.to_le_bytes()),
            Field::Params(bytes) => buf.extend_from_slice(bytes),
        }
    }
}

/// Encode `opcode` followed by `fields`.
pub fn encode(opcode: Opcode, fields: &[Field<'_>]) -> Vec<u8> {
    let len = 1 + fields.iter().map(Field::encoded_len).sum::<usize>();
    let mut buf = Vec::with_capacity(len);
    buf.push(opcode as u8);
    for field in fields {
        field.write_to(&mut buf);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_only() {
        assert_eq!(encode(Opcode::ShareAccess, &[]), vec![4]);
    }

    #[test]
    fn test_fields_in_order() {
        let hash = ContentHash::new([0xAB; 32]);
        let data = encode(
            Opcode::PurchaseAccess,
            &[Field::Hash(&hash), Field::Amount(Amount::new(0x0102))],
        );

        assert_eq!(data.len(), 41);
        assert_eq!(data[0], 3);
        assert_eq!(&data[1..33], &[0xAB; 32]);
        assert_eq!(&data[33..41], &[0x02, 0x01, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_params_appended_raw() {
        let hash = ContentHash::default();
        let params = [1u8, 2, 3];
        let data = encode(Opcode::SetDataParams, &[Field::Hash(&hash), Field::Params(&params)]);

        assert_eq!(data.len(), 36);
        assert_eq!(&data[33..], &params);
    }

    #[test]
    fn test_encoded_len_matches_output() {
        let hash = ContentHash::default();
        let fields = [
            Field::AccountType(AccountTypeTag::Owner),
            Field::Hash(&hash),
            Field::Amount(Amount::new(u64::MAX)),
            Field::Params(&[0u8; 5]),
        ];
        let expected: usize = 1 + fields.iter().map(Field::encoded_len).sum::<usize>();
        assert_eq!(encode(Opcode::InitUserAccount, &fields).len(), expected);
        assert_eq!(expected, 1 + 1 + 32 + 8 + 5);
    }
}
