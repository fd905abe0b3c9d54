// ==========================================
// BOM 成本核算工具 - 命令行入口
// ==========================================
// 流程: 导入两张表 → 选择装配 → 成本展开 → 打印/导出明细
// ==========================================

use anyhow::Result;
use bom_costing::domain::ExplosionResult;
use bom_costing::{logging, CostingApi, CostingConfig, UnresolvedPolicy, APP_NAME, VERSION};
use clap::Parser;
use std::path::PathBuf;

// ==========================================
// 命令行参数
// ==========================================
#[derive(Parser, Debug)]
#[command(name = "bom-costing", version, about = "BOM 成本核算工具 - 多层级物料清单成本展开")]
struct Cli {
    /// BOM 表文件路径 (.csv/.xlsx)
    #[arg(long)]
    bom: PathBuf,

    /// 采购成本表文件路径 (.csv/.xlsx)
    #[arg(long)]
    purchase: PathBuf,

    /// 顶层装配编码;省略时列出全部可核算装配
    #[arg(long)]
    assembly: Option<String>,

    /// 人工费率 (£/小时),覆盖配置文件取值
    #[arg(long)]
    labour_rate: Option<f64>,

    /// 未解析组件策略: zero-cost 或 fail
    #[arg(long)]
    unresolved: Option<UnresolvedPolicy>,

    /// 最大展开深度
    #[arg(long)]
    max_depth: Option<usize>,

    /// JSON 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 审计明细导出路径 (CSV)
    #[arg(long)]
    out: Option<PathBuf>,

    /// 导出审计明细;未指定 --out 时使用带时间戳的默认文件名
    #[arg(long)]
    export: bool,
}

impl Cli {
    /// 合并配置: 文件/默认值为底,命令行显式参数覆盖
    fn build_config(&self) -> Result<CostingConfig> {
        let mut config = match &self.config {
            Some(path) => CostingConfig::from_json_file(path)?,
            None => CostingConfig::default(),
        };
        if let Some(rate) = self.labour_rate {
            config.labour_rate = rate;
        }
        if let Some(policy) = self.unresolved {
            config.unresolved_policy = policy;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        config.validate()?;
        Ok(config)
    }

    /// 导出目标路径;未要求导出时为 None
    fn export_path(&self, assembly: &str) -> Option<PathBuf> {
        if let Some(path) = &self.out {
            return Some(path.clone());
        }
        if self.export {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            return Some(PathBuf::from(format!(
                "{}_cost_breakdown_{}.csv",
                assembly, stamp
            )));
        }
        None
    }
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    let cli = Cli::parse();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let config = cli.build_config()?;
    tracing::info!(
        labour_rate = config.labour_rate,
        unresolved_policy = %config.unresolved_policy,
        max_depth = config.max_depth,
        "核算配置就绪"
    );

    let api = CostingApi::new(config);
    let (bom, catalog) = api.load_tables(&cli.bom, &cli.purchase)?;

    let assembly = match &cli.assembly {
        Some(assembly) => assembly,
        None => {
            // 未指定装配: 列出候选后退出
            println!("可核算装配 ({} 个):", bom.assemblies().len());
            for code in api.list_assemblies(&bom) {
                println!("  {}", code);
            }
            return Ok(());
        }
    };

    let result = api.price_assembly(&catalog, &bom, assembly)?;
    print_breakdown(&result);

    if let Some(path) = cli.export_path(&result.assembly) {
        api.export_breakdown(&result, &path)?;
        println!("审计明细已导出: {}", path.display());
    }

    Ok(())
}

/// 打印审计明细表与合计
fn print_breakdown(result: &ExplosionResult) {
    println!(
        "{:<6} {:<14} {:<14} {:<24} {:>10} {:<13} {:>10} {:>12} {:>11}",
        "Level",
        "Parent",
        "Component",
        "Description",
        "Quantity",
        "Type",
        "Unit Cost",
        "Labour Cost",
        "Total Cost"
    );
    for row in &result.rows {
        println!(
            "{:<6} {:<14} {:<14} {:<24} {:>10.3} {:<13} {:>10.2} {:>12.2} {:>11.2}",
            row.level,
            row.parent,
            row.item,
            row.description,
            row.quantity,
            row.kind.to_string(),
            row.unit_cost,
            row.labour_cost,
            row.total_cost
        );
    }
    println!();
    println!(
        "制造 1 件 {} 的总成本: £{:.2}",
        result.assembly, result.total_cost
    );
}
