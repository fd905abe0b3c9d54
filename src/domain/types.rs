// ==========================================
// BOM 成本核算工具 - 领域类型定义
// ==========================================
// 职责: 定义跨层共用的枚举类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 成本贡献类型 (Contribution Kind)
// ==========================================
// 审计明细 Type 列的取值,序列化格式与导出契约一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionKind {
    Labour,       // 装配人工
    Purchased,    // 外购件
    Manufactured, // 自制件(递归展开)
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionKind::Labour => write!(f, "Labour"),
            ContributionKind::Purchased => write!(f, "Purchased"),
            ContributionKind::Manufactured => write!(f, "Manufactured"),
        }
    }
}

// ==========================================
// 未解析组件策略 (Unresolved Policy)
// ==========================================
// 组件既无采购目录条目又无 BOM 子行时的处理策略
// 红线: 策略必须显式配置,不允许隐式吞掉成本信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnresolvedPolicy {
    ZeroCostLeaf, // 按零成本叶子处理(记录告警日志,不产生明细行)
    Fail,         // 使本次核算失败并报告组件编码
}

impl fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedPolicy::ZeroCostLeaf => write!(f, "ZERO_COST_LEAF"),
            UnresolvedPolicy::Fail => write!(f, "FAIL"),
        }
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    /// 解析命令行/配置中的策略名称
    ///
    /// 接受 "zero-cost" / "ZERO_COST_LEAF" / "fail" / "FAIL" 等写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "zero_cost" | "zero_cost_leaf" => Ok(UnresolvedPolicy::ZeroCostLeaf),
            "fail" => Ok(UnresolvedPolicy::Fail),
            other => Err(format!("未知的未解析组件策略: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_kind_display() {
        assert_eq!(ContributionKind::Labour.to_string(), "Labour");
        assert_eq!(ContributionKind::Purchased.to_string(), "Purchased");
        assert_eq!(ContributionKind::Manufactured.to_string(), "Manufactured");
    }

    #[test]
    fn test_unresolved_policy_from_str() {
        assert_eq!(
            "zero-cost".parse::<UnresolvedPolicy>().unwrap(),
            UnresolvedPolicy::ZeroCostLeaf
        );
        assert_eq!(
            "ZERO_COST_LEAF".parse::<UnresolvedPolicy>().unwrap(),
            UnresolvedPolicy::ZeroCostLeaf
        );
        assert_eq!(
            "fail".parse::<UnresolvedPolicy>().unwrap(),
            UnresolvedPolicy::Fail
        );
        assert!("drop".parse::<UnresolvedPolicy>().is_err());
    }
}
