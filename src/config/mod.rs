// ==========================================
// BOM 成本核算工具 - 配置层
// ==========================================
// 职责: 核算参数管理 (人工费率 / 未解析组件策略 / 最大深度)
// 存储: JSON 配置文件,缺省使用内置默认值
// ==========================================

use crate::domain::types::UnresolvedPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 默认值
// ==========================================

/// 默认人工费率 (£/小时)
pub const DEFAULT_LABOUR_RATE: f64 = 28.0;

/// 默认最大展开深度
pub const DEFAULT_MAX_DEPTH: usize = 64;

// ==========================================
// 配置层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({path}): {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置无效: {0}")]
    Invalid(String),
}

// ==========================================
// CostingConfig - 核算配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostingConfig {
    pub labour_rate: f64,                    // 人工费率 (£/小时)
    pub unresolved_policy: UnresolvedPolicy, // 未解析组件策略
    pub max_depth: usize,                    // 最大展开深度
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            labour_rate: DEFAULT_LABOUR_RATE,
            unresolved_policy: UnresolvedPolicy::ZeroCostLeaf,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CostingConfig {
    /// 从 JSON 配置文件加载
    ///
    /// 文件中省略的字段使用默认值;加载后立即校验
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|source| ConfigError::FileParse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.labour_rate.is_finite() || self.labour_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "labour_rate 必须为非负有限值,实际 {}",
                self.labour_rate
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth 必须至少为 1".to_string(),
            ));
        }
        Ok(())
    }
}
