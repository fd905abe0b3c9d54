// ==========================================
// BOM 成本核算工具 - 成本展开引擎核心
// ==========================================
// 职责: 递归展开装配成本,产出合计与审计明细
// 输入: 采购目录 + BOM 索引 + 装配编码 + 数量
// 输出: ExplosionResult (合计成本 + 明细行)
// 红线: 无状态引擎,输入视图只读;目录命中优先于 BOM 递归
// ==========================================

use crate::config::CostingConfig;
use crate::domain::costing::{ContributionRow, ExplosionResult, ROOT_PARENT};
use crate::domain::types::UnresolvedPolicy;
use crate::engine::error::{CostingError, CostingResult};
use crate::repository::{BomIndex, PurchaseCatalog};

// ==========================================
// CostExplosionEngine - 成本展开引擎
// ==========================================
pub struct CostExplosionEngine {
    config: CostingConfig,
}

impl CostExplosionEngine {
    /// 创建成本展开引擎
    pub fn new(config: CostingConfig) -> Self {
        Self { config }
    }

    /// 当前引擎配置
    pub fn config(&self) -> &CostingConfig {
        &self.config
    }

    /// 核算制造一件装配的总成本
    pub fn explode(
        &self,
        catalog: &PurchaseCatalog,
        bom: &BomIndex,
        assembly: &str,
    ) -> CostingResult<ExplosionResult> {
        self.explode_quantity(catalog, bom, assembly, 1.0)
    }

    /// 核算制造指定数量装配的总成本
    ///
    /// # 参数
    /// - `catalog`: 采购成本目录(只读)
    /// - `bom`: BOM 索引(只读)
    /// - `assembly`: 顶层装配编码
    /// - `quantity`: 需要制造的数量
    ///
    /// # 返回
    /// 合计成本与按发现顺序排列的审计明细
    ///
    /// # 错误
    /// 顶层编码在两张表中都不存在、批量基数为 0、BOM 成环、
    /// 深度超限,以及 Fail 策略下的未解析组件,都会使本次核算失败
    pub fn explode_quantity(
        &self,
        catalog: &PurchaseCatalog,
        bom: &BomIndex,
        assembly: &str,
        quantity: f64,
    ) -> CostingResult<ExplosionResult> {
        // 目录优先: 顶层编码本身就是外购件时直接按采购价核算
        if let Some(unit_cost) = catalog.lookup_cost(assembly) {
            let row = ContributionRow::purchased(
                0,
                ROOT_PARENT,
                assembly,
                catalog.lookup_description(assembly),
                quantity,
                unit_cost,
            );
            let total_cost = row.total_cost;
            return Ok(ExplosionResult {
                assembly: assembly.to_string(),
                total_cost,
                rows: vec![row],
            });
        }

        if !bom.contains(assembly) {
            return Err(CostingError::UnknownAssembly {
                assembly: assembly.to_string(),
            });
        }

        let mut rows = Vec::new();
        let mut path: Vec<String> = Vec::new();
        let total_cost =
            self.explode_node(catalog, bom, assembly, quantity, 0, ROOT_PARENT, &mut rows, &mut path)?;

        tracing::debug!(
            assembly = assembly,
            total_cost = total_cost,
            row_count = rows.len(),
            "成本展开完成"
        );

        Ok(ExplosionResult {
            assembly: assembly.to_string(),
            total_cost,
            rows,
        })
    }

    /// 展开单个装配节点(递归)
    ///
    /// 明细行追加顺序: 人工行(若有子行)在前,随后按表序逐个组件;
    /// 自制件的子树行先于其汇总行追加,该顺序决定审计明细的视觉嵌套
    fn explode_node(
        &self,
        catalog: &PurchaseCatalog,
        bom: &BomIndex,
        assembly: &str,
        quantity: f64,
        level: u32,
        parent: &str,
        rows: &mut Vec<ContributionRow>,
        path: &mut Vec<String>,
    ) -> CostingResult<f64> {
        if level as usize >= self.config.max_depth {
            return Err(CostingError::DepthExceeded {
                assembly: assembly.to_string(),
                max_depth: self.config.max_depth,
            });
        }
        if path.iter().any(|seen| seen == assembly) {
            return Err(CostingError::CyclicBom {
                component: assembly.to_string(),
                path: path.join(" -> "),
            });
        }
        path.push(assembly.to_string());

        let edges = bom.children_of(assembly);
        let mut total_cost = 0.0;

        // 人工步骤: 同一装配的工时取各行声明值的最大者作为权威构建时间
        // (单层单值策略,多行不求和)
        if !edges.is_empty() {
            let build_time = edges
                .iter()
                .filter_map(|edge| edge.time_hours)
                .fold(None::<f64>, |acc, t| match acc {
                    Some(max) => Some(max.max(t)),
                    None => Some(t),
                });
            let labour_cost =
                build_time.map_or(0.0, |t| t * self.config.labour_rate * quantity);
            rows.push(ContributionRow::labour(
                level, parent, assembly, quantity, labour_cost,
            ));
            total_cost += labour_cost;
        }

        // 组件步骤: 按表序逐边折算数量并分类计价
        for edge in edges {
            if edge.build_per == 0.0 {
                return Err(CostingError::DivisionByZeroBuildRatio {
                    assembly: assembly.to_string(),
                    component: edge.component.clone(),
                    level,
                });
            }
            let adj_qty = quantity * edge.quantity / edge.build_per;

            if let Some(unit_cost) = catalog.lookup_cost(&edge.component) {
                // 外购件: 目录命中优先,即使该编码同时有 BOM 子行
                let row = ContributionRow::purchased(
                    level,
                    assembly,
                    &edge.component,
                    catalog.lookup_description(&edge.component),
                    adj_qty,
                    unit_cost,
                );
                total_cost += row.total_cost;
                rows.push(row);
            } else if bom.contains(&edge.component) {
                // 自制件: 递归展开,子树行先入,汇总行后入
                let sub_cost = self.explode_node(
                    catalog,
                    bom,
                    &edge.component,
                    adj_qty,
                    level + 1,
                    assembly,
                    rows,
                    path,
                )?;
                // 折算数量为 0 时反算单价按 0 处理:
                // 零数量对父装配无成本贡献,单价无意义
                let unit_cost = if adj_qty != 0.0 { sub_cost / adj_qty } else { 0.0 };
                rows.push(ContributionRow::manufactured(
                    level,
                    assembly,
                    &edge.component,
                    adj_qty,
                    unit_cost,
                    sub_cost,
                ));
                total_cost += sub_cost;
            } else {
                // 未解析组件: 既无目录条目也无 BOM 子行
                match self.config.unresolved_policy {
                    UnresolvedPolicy::ZeroCostLeaf => {
                        tracing::warn!(
                            component = edge.component.as_str(),
                            parent = assembly,
                            level = level,
                            "未解析组件按零成本叶子处理,不产生明细行"
                        );
                    }
                    UnresolvedPolicy::Fail => {
                        return Err(CostingError::UnresolvedComponent {
                            component: edge.component.clone(),
                            parent: assembly.to_string(),
                            level,
                        });
                    }
                }
            }
        }

        path.pop();
        Ok(total_cost)
    }
}
