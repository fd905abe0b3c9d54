// ==========================================
// BOM 成本核算工具 - 采购领域实体
// ==========================================
// 职责: 定义采购成本表行实体
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PurchaseRecord - 采购成本表一行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub code: String,                // 组件编码(目录内唯一键,重复时后写覆盖)
    pub cost: f64,                   // 估算单件成本
    pub description: Option<String>, // 组件描述(可缺失)
}

impl PurchaseRecord {
    /// 创建一条采购记录
    pub fn new(code: impl Into<String>, cost: f64, description: Option<String>) -> Self {
        Self {
            code: code.into(),
            cost,
            description,
        }
    }
}
