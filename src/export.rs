// ==========================================
// BOM 成本核算工具 - 审计明细导出
// ==========================================
// 职责: 审计明细 → CSV
// 红线: 列集合与列序是下游导出层依赖的契约,不得改动
// ==========================================

use crate::domain::costing::ExplosionResult;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// 导出列契约,顺序固定
pub const EXPORT_COLUMNS: [&str; 9] = [
    "Level",
    "Parent",
    "Component",
    "Description",
    "Quantity",
    "Type",
    "Unit Cost",
    "Labour Cost",
    "Total Cost",
];

// ==========================================
// 导出错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件写出失败: {0}")]
    Io(#[from] std::io::Error),
}

// ==========================================
// CSV 写出
// ==========================================

/// 把审计明细写出到任意 Writer
pub fn write_breakdown_csv<W: Write>(
    result: &ExplosionResult,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;

    for row in &result.rows {
        csv_writer.write_record([
            row.level.to_string(),
            row.parent.clone(),
            row.item.clone(),
            row.description.clone(),
            row.quantity.to_string(),
            row.kind.to_string(),
            row.unit_cost.to_string(),
            row.labour_cost.to_string(),
            row.total_cost.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 把审计明细序列化为 CSV 字节串(供下载/传输层使用)
pub fn breakdown_to_csv_bytes(result: &ExplosionResult) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_breakdown_csv(result, &mut buffer)?;
    Ok(buffer)
}

/// 把审计明细写出到文件
pub fn write_breakdown_file(result: &ExplosionResult, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_breakdown_csv(result, file)?;
    tracing::info!(path = %path.display(), row_count = result.rows.len(), "审计明细已导出");
    Ok(())
}
