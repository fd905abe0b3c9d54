// ==========================================
// BOM 成本核算工具 - 表格导入器
// ==========================================
// 职责: 编排"解析 → 列校验 → 行映射"完整导入流程
// 输入: BOM 表 / 采购表文件路径
// 输出: 类型化领域实体列表
// 红线: 列校验先于任何行映射;首个行级错误即中止导入
// ==========================================

use crate::domain::bom::BomEdge;
use crate::domain::purchase::PurchaseRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{
    self, BOM_REQUIRED_COLUMNS, BOM_TABLE_NAME, PURCHASE_REQUIRED_COLUMNS, PURCHASE_TABLE_NAME,
};
use crate::importer::file_parser::parser_for_path;
use std::path::Path;

// ==========================================
// TableImporter - 表格导入器
// ==========================================
pub struct TableImporter;

impl TableImporter {
    /// 创建表格导入器
    pub fn new() -> Self {
        Self
    }

    /// 导入 BOM 表
    ///
    /// # 参数
    /// - `path`: BOM 表文件路径 (.csv / .xlsx)
    ///
    /// # 返回
    /// 按文件顺序排列的 BOM 边列表
    pub fn load_bom_table(&self, path: &Path) -> ImportResult<Vec<BomEdge>> {
        let raw = parser_for_path(path)?.parse(path)?;
        field_mapper::require_columns(BOM_TABLE_NAME, &raw, &BOM_REQUIRED_COLUMNS)?;

        let mut edges = Vec::with_capacity(raw.records.len());
        for (idx, record) in raw.records.iter().enumerate() {
            // 文件行号: 表头占第 1 行,数据从第 2 行起
            edges.push(field_mapper::map_bom_edge(record, idx + 2)?);
        }

        tracing::info!(
            path = %path.display(),
            edge_count = edges.len(),
            "BOM 表导入完成"
        );
        Ok(edges)
    }

    /// 导入采购成本表
    ///
    /// # 参数
    /// - `path`: 采购表文件路径 (.csv / .xlsx)
    pub fn load_purchase_table(&self, path: &Path) -> ImportResult<Vec<PurchaseRecord>> {
        let raw = parser_for_path(path)?.parse(path)?;
        field_mapper::require_columns(PURCHASE_TABLE_NAME, &raw, &PURCHASE_REQUIRED_COLUMNS)?;

        let mut records = Vec::with_capacity(raw.records.len());
        for (idx, record) in raw.records.iter().enumerate() {
            records.push(field_mapper::map_purchase_record(record, idx + 2)?);
        }

        tracing::info!(
            path = %path.display(),
            record_count = records.len(),
            "采购表导入完成"
        );
        Ok(records)
    }
}

impl Default for TableImporter {
    fn default() -> Self {
        Self::new()
    }
}
