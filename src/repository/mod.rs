// ==========================================
// BOM 成本核算工具 - 查询视图层
// ==========================================
// 职责: 提供核算期间不可变的内存快照查询结构
// 红线: 构建一次,只读使用;引擎不得绕过视图直接扫描原始表
// ==========================================

pub mod bom_index;
pub mod purchase_catalog;

// 重导出核心查询视图
pub use bom_index::BomIndex;
pub use purchase_catalog::{PurchaseCatalog, DESCRIPTION_FALLBACK};
