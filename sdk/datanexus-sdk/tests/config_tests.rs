use datanexus_sdk::core::config::{parse_program_id, EncoderConfig};
use datanexus_sdk::core::constants::PROGRAM_ID_ENV;
use datanexus_sdk::{DataNexusEncoder, DataNexusSdkError, DEFAULT_PROGRAM_ID};
use solana_sdk::pubkey::Pubkey;

#[test]
fn test_default_config_uses_default_program() {
    let config = EncoderConfig::default();
    assert_eq!(config.program_id, DEFAULT_PROGRAM_ID);
    assert_eq!(
        *DataNexusEncoder::default().program_id(),
        DataNexusEncoder::DEFAULT_PROGRAM_ID
    );
}

#[test]
fn test_config_json_round_trip() -> anyhow::Result<()> {
    let program_id = Pubkey::new_unique();
    let json = EncoderConfig::new(program_id).to_json()?;

    assert_eq!(json, format!(r#"{{"program_id":"{}"}}"#, program_id));
    assert_eq!(EncoderConfig::from_json(&json)?.program_id, program_id);
    Ok(())
}

#[test]
fn test_config_json_missing_program_id_defaults() -> anyhow::Result<()> {
    let config = EncoderConfig::from_json("{}")?;
    assert_eq!(config, EncoderConfig::default());
    Ok(())
}

#[test]
fn test_config_json_rejects_bad_program_id() {
    let result = EncoderConfig::from_json(r#"{"program_id":"not-a-key"}"#);
    assert!(matches!(result, Err(DataNexusSdkError::Config(_))));
}

#[test]
fn test_parse_program_id() -> anyhow::Result<()> {
    let program_id = Pubkey::new_unique();
    assert_eq!(parse_program_id(&format!(" {} ", program_id))?, program_id);
    assert!(matches!(
        parse_program_id("0OIl"),
        Err(DataNexusSdkError::InvalidProgramId(_))
    ));
    Ok(())
}

// Environment is process-wide, so every env case lives in one test.
#[test_log::test]
fn test_config_from_env() -> anyhow::Result<()> {
    std::env::remove_var(PROGRAM_ID_ENV);
    assert_eq!(EncoderConfig::from_env()?, EncoderConfig::default());

    let program_id = Pubkey::new_unique();
    std::env::set_var(PROGRAM_ID_ENV, program_id.to_string());
    assert_eq!(*DataNexusEncoder::from_env()?.program_id(), program_id);

    std::env::set_var(PROGRAM_ID_ENV, "garbage");
    assert!(matches!(
        EncoderConfig::from_env(),
        Err(DataNexusSdkError::InvalidProgramId(_))
    ));

    std::env::remove_var(PROGRAM_ID_ENV);
    Ok(())
}

#[test]
fn test_encoders_for_different_deployments_differ_only_in_program_id() {
    let a = DataNexusEncoder::with_program_id(Pubkey::new_unique());
    let b = DataNexusEncoder::with_program_id(Pubkey::new_unique());
    let owner = Pubkey::new_unique();

    assert_ne!(a.program_id(), b.program_id());
    assert_ne!(a.owner_address(&owner), b.owner_address(&owner));
}
