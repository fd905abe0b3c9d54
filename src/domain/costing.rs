// ==========================================
// BOM 成本核算工具 - 成本核算输出实体
// ==========================================
// 职责: 定义成本展开的审计明细行与汇总结果
// 红线: 明细行只能由成本展开引擎创建,追加后不可变
// ==========================================

use crate::domain::types::ContributionKind;
use serde::{Deserialize, Serialize};

// ==========================================
// 常量: 明细行固定文案
// ==========================================
// 这些文案是导出契约的一部分,下游消费方按字面值匹配

/// 顶层装配的父标记
pub const ROOT_PARENT: &str = "ROOT";

/// 人工行的描述文案
pub const LABOUR_ROW_DESCRIPTION: &str = "Assembly Labour";

/// 自制件汇总行的描述文案
pub const MANUFACTURED_ROW_DESCRIPTION: &str = "Manufactured";

// ==========================================
// ContributionRow - 审计明细一行
// ==========================================
// 一次成本展开中发现的单项成本贡献
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRow {
    pub level: u32,               // 递归深度,0 = 顶层装配
    pub parent: String,           // 所属父装配编码,顶层为 ROOT
    pub item: String,             // 本行描述的组件/装配/人工项编码
    pub description: String,      // 展示用描述
    pub quantity: f64,            // 展开到该位置的折算数量
    pub kind: ContributionKind,   // Labour / Purchased / Manufactured
    pub unit_cost: f64,           // 单件成本(人工行为 0,自制行为反算值)
    pub labour_cost: f64,         // 人工成本(非人工行为 0)
    pub total_cost: f64,          // 本行合计成本
}

impl ContributionRow {
    /// 构造人工行
    ///
    /// unit_cost 恒为 0,labour_cost 与 total_cost 相等
    pub fn labour(level: u32, parent: &str, assembly: &str, quantity: f64, labour_cost: f64) -> Self {
        Self {
            level,
            parent: parent.to_string(),
            item: assembly.to_string(),
            description: LABOUR_ROW_DESCRIPTION.to_string(),
            quantity,
            kind: ContributionKind::Labour,
            unit_cost: 0.0,
            labour_cost,
            total_cost: labour_cost,
        }
    }

    /// 构造外购件行
    ///
    /// total_cost = quantity × unit_cost
    pub fn purchased(
        level: u32,
        parent: &str,
        component: &str,
        description: &str,
        quantity: f64,
        unit_cost: f64,
    ) -> Self {
        Self {
            level,
            parent: parent.to_string(),
            item: component.to_string(),
            description: description.to_string(),
            quantity,
            kind: ContributionKind::Purchased,
            unit_cost,
            labour_cost: 0.0,
            total_cost: quantity * unit_cost,
        }
    }

    /// 构造自制件汇总行
    ///
    /// total_cost 为递归展开得到的子树合计,unit_cost 为反算单件成本
    pub fn manufactured(
        level: u32,
        parent: &str,
        component: &str,
        quantity: f64,
        unit_cost: f64,
        total_cost: f64,
    ) -> Self {
        Self {
            level,
            parent: parent.to_string(),
            item: component.to_string(),
            description: MANUFACTURED_ROW_DESCRIPTION.to_string(),
            quantity,
            kind: ContributionKind::Manufactured,
            unit_cost,
            labour_cost: 0.0,
            total_cost,
        }
    }
}

// ==========================================
// ExplosionResult - 一次成本展开的结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionResult {
    pub assembly: String,           // 被核算的装配编码
    pub total_cost: f64,            // 合计制造成本
    pub rows: Vec<ContributionRow>, // 审计明细(按发现顺序)
}
