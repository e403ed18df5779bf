//! Dataset parameter blobs for `SetDataParams`.
//!
//! The ledger program owns the schema of this blob and the encoder treats it
//! as opaque bytes. [`DatasetParams`] is a typed way to produce the layout the
//! program accepts today; callers remain free to hand in any bytes they like.
//!
//! Layout (borsh, one tag byte then the variant's fields):
//! ```text
//! Init          [0][key: 32][value: u64 LE][share_limit: u16 LE][reference: 32]
//! Key           [1][key: 32]
//! Value         [2][value: u64 LE]
//! ShareLimit    [3][share_limit: u16 LE]
//! ReferenceData [4][reference: 32]
//! ```

use crate::error::Result;
use borsh::{BorshDeserialize, BorshSerialize};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum DatasetParams {
    /// Set every parameter at once
    Init {
        /// Decryption key for the dataset
        key: [u8; 32],
        /// Price of access
        value: u64,
        /// Number of times an access holder may share the dataset
        share_limit: u16,
        /// Address of the dataset this one is derived from, zeroed when none
        reference_data: [u8; 32],
    },
    Key([u8; 32]),
    Value(u64),
    ShareLimit(u16),
    ReferenceData([u8; 32]),
}

impl DatasetParams {
    pub const NO_REFERENCE: [u8; 32] = [0u8; 32];

    pub fn init(key: [u8; 32], value: u64, share_limit: u16, reference: Option<[u8; 32]>) -> Self {
        Self::Init {
            key,
            value,
            share_limit,
            reference_data: reference.unwrap_or(Self::NO_REFERENCE),
        }
    }

    /// Serialized length of this variant, tag byte included.
    pub fn packed_len(&self) -> usize {
        1 + match self {
            Self::Init { .. } => 32 + 8 + 2 + 32,
            Self::Key(_) | Self::ReferenceData(_) => 32,
            Self::Value(_) => 8,
            Self::ShareLimit(_) => 2,
        }
    }

    /// Produce the opaque blob handed to `SetDataParams`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.packed_len());
        self.serialize(&mut buf)?;
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::try_from_slice(data)?)
    }

    pub fn reference(&self) -> Option<[u8; 32]> {
        match self {
            Self::Init { reference_data, .. } | Self::ReferenceData(reference_data)
                if *reference_data != Self::NO_REFERENCE =>
            {
                Some(*reference_data)
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterfaceError;

    #[test]
    fn test_init_layout() {
        let params = DatasetParams::init([9u8; 32], 0x0102, 3, None);
        let bytes = params.to_bytes().unwrap();

        assert_eq!(bytes.len(), params.packed_len());
        assert_eq!(bytes.len(), 75);
        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..33], &[9u8; 32]);
        assert_eq!(&bytes[33..41], &0x0102u64.to_le_bytes());
        assert_eq!(&bytes[41..43], &3u16.to_le_bytes());
        assert_eq!(&bytes[43..75], &[0u8; 32]);
        assert_eq!(params.reference(), None);
    }

    #[test]
    fn test_single_field_layouts() {
        assert_eq!(DatasetParams::Value(5).to_bytes().unwrap(), {
            let mut v = vec![2u8];
            v.extend_from_slice(&5u64.to_le_bytes());
            v
        });
        assert_eq!(
            DatasetParams::ShareLimit(0x0201).to_bytes().unwrap(),
            vec![3, 0x01, 0x02]
        );

        let key = DatasetParams::Key([1u8; 32]).to_bytes().unwrap();
        assert_eq!(key[0], 1);
        assert_eq!(key.len(), 33);

        let reference = DatasetParams::ReferenceData([4u8; 32]);
        let bytes = reference.to_bytes().unwrap();
        assert_eq!(bytes[0], 4);
        assert_eq!(bytes.len(), reference.packed_len());
        assert_eq!(reference.reference(), Some([4u8; 32]));
    }

    #[test]
    fn test_from_bytes() {
        let params = DatasetParams::init([1u8; 32], 10, 2, Some([2u8; 32]));
        let bytes = params.to_bytes().unwrap();
        assert_eq!(DatasetParams::from_bytes(&bytes).unwrap(), params);

        let err = DatasetParams::from_bytes(&[9]).unwrap_err();
        assert!(matches!(err, InterfaceError::Serialization(_)));

        // Trailing bytes are rejected
        let mut padded = DatasetParams::Value(1).to_bytes().unwrap();
        padded.push(0);
        assert!(DatasetParams::from_bytes(&padded).is_err());
    }
}
