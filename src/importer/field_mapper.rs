// ==========================================
// BOM 成本核算工具 - 字段映射器
// ==========================================
// 职责: 列存在性校验 + 原始字符串记录 → 类型化领域实体
// 红线: 缺列在映射任何数据行之前报错;
//       行级错误必须携带行号与字段名
// ==========================================

use crate::domain::bom::BomEdge;
use crate::domain::purchase::PurchaseRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;
use std::collections::HashMap;

// ==========================================
// 列名常量 (输入表契约)
// ==========================================

// BOM 表
pub const BOM_TABLE_NAME: &str = "BOM";
pub const BOM_COL_ASSEMBLY: &str = "BOM Variant";
pub const BOM_COL_COMPONENT: &str = "Component Variant";
pub const BOM_COL_QUANTITY: &str = "Quantity";
pub const BOM_COL_BUILD_PER: &str = "Build per";
pub const BOM_COL_TIME_HOURS: &str = "Time (hrs)"; // 可选列

// 采购表
pub const PURCHASE_TABLE_NAME: &str = "Purchase";
pub const PURCHASE_COL_CODE: &str = "Variant code";
pub const PURCHASE_COL_COST: &str = "Estimated cost";
pub const PURCHASE_COL_DESCRIPTION: &str = "Variant description"; // 可选列

/// BOM 表必需列
pub const BOM_REQUIRED_COLUMNS: [&str; 4] = [
    BOM_COL_ASSEMBLY,
    BOM_COL_COMPONENT,
    BOM_COL_QUANTITY,
    BOM_COL_BUILD_PER,
];

/// 采购表必需列
pub const PURCHASE_REQUIRED_COLUMNS: [&str; 2] = [PURCHASE_COL_CODE, PURCHASE_COL_COST];

// ==========================================
// 表结构校验
// ==========================================

/// 校验原始表包含全部必需列
///
/// # 参数
/// - `table_name`: 表名(用于错误信息)
/// - `raw`: 解析后的原始表
/// - `required`: 必需列名
pub fn require_columns(table_name: &str, raw: &RawTable, required: &[&str]) -> ImportResult<()> {
    for column in required {
        if !raw.headers.iter().any(|h| h == column) {
            return Err(ImportError::MissingColumn {
                table: table_name.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

// ==========================================
// 行级映射
// ==========================================

/// 映射一行 BOM 记录
///
/// # 参数
/// - `record`: 列名→单元格 映射
/// - `row`: 文件中的行号(含表头,从 2 起),仅用于错误定位
pub fn map_bom_edge(record: &HashMap<String, String>, row: usize) -> ImportResult<BomEdge> {
    let assembly = require_identifier(record, row, BOM_COL_ASSEMBLY)?;
    let component = require_identifier(record, row, BOM_COL_COMPONENT)?;

    let quantity = parse_required_f64(record, row, BOM_COL_QUANTITY)?;
    check_range(row, BOM_COL_QUANTITY, quantity, quantity > 0.0, "> 0")?;

    let build_per = parse_required_f64(record, row, BOM_COL_BUILD_PER)?;
    check_range(row, BOM_COL_BUILD_PER, build_per, build_per > 0.0, "> 0")?;

    let time_hours = parse_optional_f64(record, row, BOM_COL_TIME_HOURS)?;
    if let Some(t) = time_hours {
        check_range(row, BOM_COL_TIME_HOURS, t, t >= 0.0, ">= 0")?;
    }

    Ok(BomEdge {
        assembly,
        component,
        quantity,
        build_per,
        time_hours,
    })
}

/// 映射一行采购记录
pub fn map_purchase_record(
    record: &HashMap<String, String>,
    row: usize,
) -> ImportResult<PurchaseRecord> {
    let code = require_identifier(record, row, PURCHASE_COL_CODE)?;

    let cost = parse_required_f64(record, row, PURCHASE_COL_COST)?;
    check_range(row, PURCHASE_COL_COST, cost, cost.is_finite(), "有限值")?;

    let description = record
        .get(PURCHASE_COL_DESCRIPTION)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string());

    Ok(PurchaseRecord {
        code,
        cost,
        description,
    })
}

// ==========================================
// 取值与转换辅助
// ==========================================

fn cell<'a>(record: &'a HashMap<String, String>, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("").trim()
}

fn require_identifier(
    record: &HashMap<String, String>,
    row: usize,
    column: &str,
) -> ImportResult<String> {
    let value = cell(record, column);
    if value.is_empty() {
        return Err(ImportError::MissingIdentifier {
            row,
            field: column.to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_required_f64(
    record: &HashMap<String, String>,
    row: usize,
    column: &str,
) -> ImportResult<f64> {
    let value = cell(record, column);
    value
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversionError {
            row,
            field: column.to_string(),
            value: value.to_string(),
        })
}

/// 空单元格按缺失处理,非空必须可解析
fn parse_optional_f64(
    record: &HashMap<String, String>,
    row: usize,
    column: &str,
) -> ImportResult<Option<f64>> {
    let value = cell(record, column);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ImportError::TypeConversionError {
            row,
            field: column.to_string(),
            value: value.to_string(),
        })
}

fn check_range(
    row: usize,
    column: &str,
    value: f64,
    ok: bool,
    requirement: &str,
) -> ImportResult<()> {
    if !ok || !value.is_finite() {
        return Err(ImportError::ValueRangeError {
            row,
            field: column.to_string(),
            value,
            requirement: requirement.to_string(),
        });
    }
    Ok(())
}
