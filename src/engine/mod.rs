// ==========================================
// BOM 成本核算工具 - 引擎层
// ==========================================
// 职责: 实现成本展开业务规则
// 红线: 引擎无状态,输入视图只读,任何失败都携带定位信息
// ==========================================

pub mod error;
pub mod explosion;

// 重导出核心引擎
pub use error::{CostingError, CostingResult};
pub use explosion::CostExplosionEngine;
