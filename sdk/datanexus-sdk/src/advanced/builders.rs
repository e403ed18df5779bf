use crate::error::{DataNexusSdkError, Result};
use datanexus_interface::DatasetParams;
use solana_sdk::pubkey::Pubkey;

/// Builder for the `SetDataParams` blob.
///
/// Setting a single part yields the matching single-field update; setting
/// several yields a full `Init` write, which needs key, value and share
/// limit. Only the reference may be left out.
#[derive(Debug, Clone, Default)]
pub struct DatasetParamsBuilder {
    key: Option<[u8; 32]>,
    value: Option<u64>,
    share_limit: Option<u16>,
    reference: Option<Pubkey>,
}

impl DatasetParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: [u8; 32]) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_share_limit(mut self, share_limit: u16) -> Self {
        self.share_limit = Some(share_limit);
        self
    }

    /// Dataset this one is derived from
    pub fn with_reference(mut self, reference: Pubkey) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn build(self) -> Result<DatasetParams> {
        let params = match (self.key, self.value, self.share_limit, self.reference) {
            (None, None, None, None) => return Err(DataNexusSdkError::MissingField("params")),
            (Some(key), None, None, None) => DatasetParams::Key(key),
            (None, Some(value), None, None) => DatasetParams::Value(value),
            (None, None, Some(share_limit), None) => DatasetParams::ShareLimit(share_limit),
            (None, None, None, Some(reference)) => {
                DatasetParams::ReferenceData(reference.to_bytes())
            },
            (key, value, share_limit, reference) => DatasetParams::init(
                key.ok_or(DataNexusSdkError::MissingField("key"))?,
                value.ok_or(DataNexusSdkError::MissingField("value"))?,
                share_limit.ok_or(DataNexusSdkError::MissingField("share_limit"))?,
                reference.map(|r| r.to_bytes()),
            ),
        };
        Ok(params)
    }

    /// Build and serialize in one step
    pub fn build_bytes(self) -> Result<Vec<u8>> {
        Ok(self.build()?.to_bytes()?)
    }
}
