// ==========================================
// BOM 成本核算工具 - 配置层测试
// ==========================================
// 场景: 默认值 / JSON 覆盖 / 取值校验
// ==========================================

use bom_costing::{ConfigError, CostingConfig, UnresolvedPolicy, DEFAULT_LABOUR_RATE, DEFAULT_MAX_DEPTH};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_default_config() {
    let config = CostingConfig::default();

    assert_eq!(config.labour_rate, DEFAULT_LABOUR_RATE);
    assert_eq!(config.unresolved_policy, UnresolvedPolicy::ZeroCostLeaf);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_file_with_overrides() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{ "labour_rate": 32.5, "unresolved_policy": "FAIL" }"#,
    )
    .unwrap();
    file.flush().unwrap();

    let config = CostingConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config.labour_rate, 32.5);
    assert_eq!(config.unresolved_policy, UnresolvedPolicy::Fail);
    // 未出现的字段保持默认
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_invalid_labour_rate_rejected() {
    let config = CostingConfig {
        labour_rate: -1.0,
        ..CostingConfig::default()
    };

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_zero_max_depth_rejected() {
    let config = CostingConfig {
        max_depth: 0,
        ..CostingConfig::default()
    };

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_json_file_reports_parse_error() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(b"{ labour_rate: }").unwrap();
    file.flush().unwrap();

    let err = CostingConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileParse { .. }));
}

#[test]
fn test_missing_config_file_reports_read_error() {
    let err =
        CostingConfig::from_json_file(std::path::Path::new("no_such_config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}
