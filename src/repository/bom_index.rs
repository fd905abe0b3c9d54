// ==========================================
// BOM 成本核算工具 - BOM 索引
// ==========================================
// 职责: BOM 表的只读查询视图 (assembly → 直接子行)
// 红线: 子行顺序必须保持原始表序,它决定审计明细的视觉嵌套
// ==========================================

use crate::domain::bom::BomEdge;
use std::collections::HashMap;

// ==========================================
// BomIndex - BOM 边索引
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BomIndex {
    edges: HashMap<String, Vec<BomEdge>>,
    edge_count: usize,
}

impl BomIndex {
    /// 从 BOM 边集合构建索引,保持每个装配下的输入顺序
    pub fn from_edges(edges: impl IntoIterator<Item = BomEdge>) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index
                .edges
                .entry(edge.assembly.clone())
                .or_default()
                .push(edge);
            index.edge_count += 1;
        }
        index
    }

    /// 查询装配的直接子行,无子行时返回空切片
    pub fn children_of(&self, assembly: &str) -> &[BomEdge] {
        self.edges.get(assembly).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 装配是否在 BOM 表中出现过(作为父装配)
    pub fn contains(&self, assembly: &str) -> bool {
        self.edges.contains_key(assembly)
    }

    /// 全部装配编码,按字典序排序(供选择层列出候选)
    pub fn assemblies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.edges.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// BOM 边总数
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 索引是否为空
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
