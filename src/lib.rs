// ==========================================
// BOM 成本核算工具 - 核心库
// ==========================================
// 核心: 多层级 BOM 递归成本展开
// 系统定位: 决策支持工具 (核算结果供人工审阅)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 查询视图层 - 只读快照
pub mod repository;

// 引擎层 - 成本展开
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 核算参数
pub mod config;

// 导出层 - 审计明细 CSV
pub mod export;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BomEdge, ContributionKind, ContributionRow, ExplosionResult, PurchaseRecord, UnresolvedPolicy,
    LABOUR_ROW_DESCRIPTION, MANUFACTURED_ROW_DESCRIPTION, ROOT_PARENT,
};

// 查询视图
pub use repository::{BomIndex, PurchaseCatalog, DESCRIPTION_FALLBACK};

// 引擎
pub use engine::{CostExplosionEngine, CostingError, CostingResult};

// 导入
pub use importer::{ImportError, TableImporter};

// 配置
pub use config::{ConfigError, CostingConfig, DEFAULT_LABOUR_RATE, DEFAULT_MAX_DEPTH};

// 导出
pub use export::{breakdown_to_csv_bytes, write_breakdown_file, ExportError, EXPORT_COLUMNS};

// API
pub use api::{ApiError, ApiResult, CostingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "BOM 成本核算工具";

// ==========================================
// 预编译检查
// ==========================================
