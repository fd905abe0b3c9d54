// ==========================================
// BOM 成本核算工具 - API层错误类型
// ==========================================
// 职责: 汇聚各层错误,向调用方提供统一错误面
// 红线: 所有错误信息必须包含显式原因与定位上下文
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::CostingError;
use crate::export::ExportError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("成本核算失败: {0}")]
    Costing(#[from] CostingError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
