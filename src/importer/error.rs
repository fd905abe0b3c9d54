// ==========================================
// BOM 成本核算工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 缺列必须在任何核算开始前快速失败
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("缺少必需列 (表 {table}): {column}")]
    MissingColumn { table: String, column: String },

    // ===== 数据映射错误 =====
    #[error("标识符缺失 (行 {row}, 字段 {field}): 不允许为空")]
    MissingIdentifier { row: usize, field: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法将 {value} 解析为数值")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    #[error("数值范围错误 (行 {row}, 字段 {field}): 值 {value} 不满足 {requirement}")]
    ValueRangeError {
        row: usize,
        field: String,
        value: f64,
        requirement: String,
    },
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
