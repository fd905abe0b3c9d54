// ==========================================
// BOM 成本核算工具 - API 层
// ==========================================
// 职责: 面向调用方(CLI/上层集成)的业务接口
// ==========================================

pub mod costing_api;
pub mod error;

// 重导出核心接口
pub use costing_api::CostingApi;
pub use error::{ApiError, ApiResult};
