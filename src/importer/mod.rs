// ==========================================
// BOM 成本核算工具 - 导入层
// ==========================================
// 职责: 外部表格文件 → 类型化领域实体
// 流程: 文件解析 → 列校验 → 字段映射/类型转换
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod table_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{parser_for_path, CsvParser, ExcelParser, RawTable, TableParser};
pub use table_importer::TableImporter;
