// ==========================================
// BOM 成本核算工具 - BOM 领域实体
// ==========================================
// 职责: 定义 BOM 表行实体
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// BomEdge - BOM 表一行
// ==========================================
// 一条"父装配 → 子组件"边,数量按批量(build_per)归一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEdge {
    pub assembly: String,        // 父装配编码(区分大小写,非空)
    pub component: String,       // 子组件/子装配编码(非空)
    pub quantity: f64,           // 每 build_per 件父装配消耗的子件数量(> 0)
    pub build_per: f64,          // 数量对应的批量基数(> 0,0 为非法数据)
    pub time_hours: Option<f64>, // 构建一批父装配的工时(≥ 0,可缺失)
}

impl BomEdge {
    /// 创建一条 BOM 边
    pub fn new(
        assembly: impl Into<String>,
        component: impl Into<String>,
        quantity: f64,
        build_per: f64,
        time_hours: Option<f64>,
    ) -> Self {
        Self {
            assembly: assembly.into(),
            component: component.into(),
            quantity,
            build_per,
            time_hours,
        }
    }
}
