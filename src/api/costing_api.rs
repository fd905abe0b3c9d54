// ==========================================
// BOM 成本核算工具 - 成本核算 API
// ==========================================
// 职责: 编排"导入 → 视图构建 → 成本展开 → 导出"业务接口
// 输入: 表格文件路径 + 顶层装配编码
// 输出: ExplosionResult / 装配候选列表 / CSV 明细
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::CostingConfig;
use crate::domain::costing::ExplosionResult;
use crate::engine::CostExplosionEngine;
use crate::export;
use crate::importer::TableImporter;
use crate::repository::{BomIndex, PurchaseCatalog};
use std::path::Path;
use std::time::Instant;

// ==========================================
// CostingApi - 成本核算接口
// ==========================================
pub struct CostingApi {
    engine: CostExplosionEngine,
}

impl CostingApi {
    /// 创建成本核算 API
    pub fn new(config: CostingConfig) -> Self {
        Self {
            engine: CostExplosionEngine::new(config),
        }
    }

    /// 导入两张输入表并构建核算期间不可变的查询视图
    ///
    /// # 参数
    /// - `bom_path`: BOM 表文件路径
    /// - `purchase_path`: 采购成本表文件路径
    ///
    /// # 返回
    /// (BOM 索引, 采购目录)
    pub fn load_tables(
        &self,
        bom_path: &Path,
        purchase_path: &Path,
    ) -> ApiResult<(BomIndex, PurchaseCatalog)> {
        let importer = TableImporter::new();
        let edges = importer.load_bom_table(bom_path)?;
        let records = importer.load_purchase_table(purchase_path)?;

        let bom = BomIndex::from_edges(edges);
        let catalog = PurchaseCatalog::from_records(records);

        tracing::info!(
            assembly_count = bom.assemblies().len(),
            edge_count = bom.edge_count(),
            catalog_count = catalog.len(),
            "查询视图构建完成"
        );
        Ok((bom, catalog))
    }

    /// 列出可核算的装配编码(字典序)
    pub fn list_assemblies<'a>(&self, bom: &'a BomIndex) -> Vec<&'a str> {
        bom.assemblies()
    }

    /// 核算制造一件装配的总成本
    ///
    /// # 参数
    /// - `catalog`: 采购目录
    /// - `bom`: BOM 索引
    /// - `assembly`: 顶层装配编码
    pub fn price_assembly(
        &self,
        catalog: &PurchaseCatalog,
        bom: &BomIndex,
        assembly: &str,
    ) -> ApiResult<ExplosionResult> {
        let assembly = assembly.trim();
        if assembly.is_empty() {
            return Err(ApiError::InvalidInput(
                "装配编码不允许为空".to_string(),
            ));
        }

        let started = Instant::now();
        let result = self.engine.explode(catalog, bom, assembly)?;
        tracing::info!(
            assembly = assembly,
            total_cost = result.total_cost,
            row_count = result.rows.len(),
            elapsed_ms = started.elapsed().as_millis() as i64,
            "成本核算完成"
        );
        Ok(result)
    }

    /// 导出审计明细 CSV 文件
    pub fn export_breakdown(&self, result: &ExplosionResult, path: &Path) -> ApiResult<()> {
        export::write_breakdown_file(result, path)?;
        Ok(())
    }
}
