use crate::core::constants::{DEFAULT_PROGRAM_ID, PROGRAM_ID_ENV};
use crate::error::{DataNexusSdkError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Deployment configuration for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// DataNexus program id, base58 in serialized form
    #[serde(
        serialize_with = "serialize_pubkey",
        deserialize_with = "deserialize_pubkey",
        default = "default_program_id"
    )]
    pub program_id: Pubkey,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
        }
    }
}

impl EncoderConfig {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Read the program id from `DATANEXUS_PROGRAM_ID`, falling back to the
    /// default deployment when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(PROGRAM_ID_ENV) {
            Ok(value) => Ok(Self::new(parse_program_id(&value)?)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(DataNexusSdkError::Config(format!("{}: {}", PROGRAM_ID_ENV, e))),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DataNexusSdkError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DataNexusSdkError::Config(e.to_string()))
    }
}

pub fn parse_program_id(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value.trim())
        .map_err(|_| DataNexusSdkError::InvalidProgramId(value.to_string()))
}

fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID
}

fn serialize_pubkey<S: Serializer>(pubkey: &Pubkey, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&pubkey.to_string())
}

fn deserialize_pubkey<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Pubkey, D::Error> {
    let value = String::deserialize(deserializer)?;
    Pubkey::from_str(&value).map_err(serde::de::Error::custom)
}
