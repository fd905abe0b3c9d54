// ==========================================
// BOM 成本核算工具 - 采购成本目录
// ==========================================
// 职责: 采购表的只读查询视图 (code → cost / description)
// 红线: 构建完成后不可变,一次核算期间不允许并发修改
// ==========================================

use crate::domain::purchase::PurchaseRecord;
use std::collections::HashMap;

/// 描述缺失时的回退文案,属于导出契约
pub const DESCRIPTION_FALLBACK: &str = "N/A";

// ==========================================
// PurchaseCatalog - 采购成本目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PurchaseCatalog {
    costs: HashMap<String, f64>,
    descriptions: HashMap<String, String>,
}

impl PurchaseCatalog {
    /// 从采购记录构建目录
    ///
    /// 重复编码按"后写覆盖"处理
    pub fn from_records(records: impl IntoIterator<Item = PurchaseRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            if let Some(desc) = record.description {
                catalog.descriptions.insert(record.code.clone(), desc);
            } else {
                // 后写的无描述记录同样覆盖旧描述
                catalog.descriptions.remove(&record.code);
            }
            catalog.costs.insert(record.code, record.cost);
        }
        catalog
    }

    /// 查询单件成本
    pub fn lookup_cost(&self, code: &str) -> Option<f64> {
        self.costs.get(code).copied()
    }

    /// 查询组件描述,缺失时返回回退文案 "N/A"
    pub fn lookup_description(&self, code: &str) -> &str {
        self.descriptions
            .get(code)
            .map(String::as_str)
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// 编码是否存在目录条目
    pub fn contains(&self, code: &str) -> bool {
        self.costs.contains_key(code)
    }

    /// 目录条目数
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
