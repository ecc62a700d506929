use patchnode_nodes::value::{AbsentPositions, ZipValues, ZipValuesConfig};

#[test]
fn loads_from_toml() {
    let config: ZipValuesConfig = toml::from_str(r#"absent_positions = "empty""#).unwrap();

    assert_eq!(config.absent_positions, AbsentPositions::Empty);
    assert_eq!(ZipValues::new(config).config(), config);
}

#[test]
fn loads_from_yaml() {
    let config: ZipValuesConfig = serde_yaml::from_str("absent_positions: reject\n").unwrap();

    assert_eq!(config.absent_positions, AbsentPositions::Reject);
}

#[test]
fn empty_documents_use_defaults() {
    let from_toml: ZipValuesConfig = toml::from_str("").unwrap();
    let from_json: ZipValuesConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(from_toml, ZipValuesConfig::default());
    assert_eq!(from_json, ZipValuesConfig::default());
}

#[test]
fn unknown_policies_are_rejected() {
    let result = toml::from_str::<ZipValuesConfig>(r#"absent_positions = "skip""#);

    assert!(result.is_err());
}

#[test]
fn node_configs_round_trip_through_json() {
    let config = ZipValuesConfig::default().with_absent_positions(AbsentPositions::Empty);

    let json = serde_json::to_string(&config).unwrap();
    let back: ZipValuesConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back, config);
}
