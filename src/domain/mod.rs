// ==========================================
// BOM 成本核算工具 - 领域模型层
// ==========================================
// 职责: 定义领域实体与跨层类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod bom;
pub mod costing;
pub mod purchase;
pub mod types;

// 重导出核心类型
pub use bom::BomEdge;
pub use costing::{
    ContributionRow, ExplosionResult, LABOUR_ROW_DESCRIPTION, MANUFACTURED_ROW_DESCRIPTION,
    ROOT_PARENT,
};
pub use purchase::PurchaseRecord;
pub use types::{ContributionKind, UnresolvedPolicy};
