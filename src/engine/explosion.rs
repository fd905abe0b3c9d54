// ==========================================
// BOM 成本核算工具 - 成本展开引擎
// ==========================================
// 职责: 递归成本展开与审计明细构建
// 输入: 采购目录 + BOM 索引 + 顶层装配编码
// 输出: 合计成本 + 按发现顺序的明细行
// 红线: 目录命中优先于 BOM 递归;环与深度超限必须报错而非栈溢出
// ==========================================

mod core;


pub use self::core::CostExplosionEngine;
