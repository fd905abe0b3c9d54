// ==========================================
// BOM 成本核算工具 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 任何数据不一致都必须使本次核算失败并携带定位信息,
//       不允许返回部分正确的合计
// ==========================================

use thiserror::Error;

/// 成本展开引擎错误类型
#[derive(Error, Debug)]
pub enum CostingError {
    // ===== 输入选择错误 =====
    #[error("未知装配: {assembly} 既无 BOM 子行也无采购目录条目")]
    UnknownAssembly { assembly: String },

    // ===== 数据质量错误 =====
    #[error("批量基数为零 (装配 {assembly}, 组件 {component}, 层级 {level}): Build per 不允许为 0")]
    DivisionByZeroBuildRatio {
        assembly: String,
        component: String,
        level: u32,
    },

    #[error("未解析组件 (父装配 {parent}, 层级 {level}): {component} 既无采购目录条目也无 BOM 子行")]
    UnresolvedComponent {
        component: String,
        parent: String,
        level: u32,
    },

    // ===== 图结构错误 =====
    #[error("BOM 结构存在环: {component} 已在展开路径 [{path}] 中出现")]
    CyclicBom { component: String, path: String },

    #[error("展开深度超限 (装配 {assembly}): 达到最大深度 {max_depth}")]
    DepthExceeded { assembly: String, max_depth: usize },
}

/// Result 类型别名
pub type CostingResult<T> = Result<T, CostingError>;
