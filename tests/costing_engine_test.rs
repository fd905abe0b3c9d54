// ==========================================
// BOM 成本核算工具 - 成本展开引擎集成测试
// ==========================================
// 场景: 平铺装配 / 嵌套装配 / 策略切换,经由公开库接口驱动
// ==========================================

use bom_costing::{
    BomEdge, BomIndex, ContributionKind, CostExplosionEngine, CostingConfig, CostingError,
    PurchaseCatalog, PurchaseRecord, UnresolvedPolicy, ROOT_PARENT,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "期望 {} 实际 {}",
        expected,
        actual
    );
}

/// 嵌套场景的两张输入表
fn nested_tables() -> (PurchaseCatalog, BomIndex) {
    let catalog = PurchaseCatalog::from_records(vec![
        PurchaseRecord::new("B001", 5.0, Some("Hex bolt M8".to_string())),
        PurchaseRecord::new("D001", 1.0, Some("Washer 8mm".to_string())),
    ]);
    let bom = BomIndex::from_edges(vec![
        BomEdge::new("A100", "B001", 2.0, 1.0, Some(1.0)),
        BomEdge::new("A100", "S200", 1.0, 1.0, Some(1.0)),
        BomEdge::new("S200", "D001", 4.0, 2.0, None),
    ]);
    (catalog, bom)
}

fn engine_with_rate(labour_rate: f64) -> CostExplosionEngine {
    CostExplosionEngine::new(CostingConfig {
        labour_rate,
        ..CostingConfig::default()
    })
}

// ==========================================
// 场景: 平铺装配
// ==========================================

#[test]
fn test_flat_assembly_totals_to_23() {
    // A = 2×B + 1×C, 工时 1hr, 费率 £10/hr
    // 总成本 = 人工 £10 + B £10 + C £3 = £23,共 3 行
    let catalog = PurchaseCatalog::from_records(vec![
        PurchaseRecord::new("B", 5.0, None),
        PurchaseRecord::new("C", 3.0, None),
    ]);
    let bom = BomIndex::from_edges(vec![
        BomEdge::new("A", "B", 2.0, 1.0, Some(1.0)),
        BomEdge::new("A", "C", 1.0, 1.0, Some(1.0)),
    ]);

    let result = engine_with_rate(10.0).explode(&catalog, &bom, "A").unwrap();

    assert_close(result.total_cost, 23.0);
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.rows[0].kind, ContributionKind::Labour);
    assert_eq!(result.rows[0].parent, ROOT_PARENT);
}

#[test]
fn test_purchased_children_without_time_have_no_labour_contribution() {
    // 全外购子件且无工时: 合计 = Σ 折算数量 × 单价,人工贡献为 0
    let catalog = PurchaseCatalog::from_records(vec![
        PurchaseRecord::new("B", 5.0, None),
        PurchaseRecord::new("C", 3.0, None),
    ]);
    let bom = BomIndex::from_edges(vec![
        BomEdge::new("A", "B", 3.0, 2.0, None),
        BomEdge::new("A", "C", 5.0, 1.0, None),
    ]);

    let result = engine_with_rate(10.0).explode(&catalog, &bom, "A").unwrap();

    // 3/2×5 + 5×3 = 7.5 + 15 = 22.5
    assert_close(result.total_cost, 22.5);
    assert_close(result.rows.iter().map(|r| r.labour_cost).sum::<f64>(), 0.0);
}

// ==========================================
// 场景: 嵌套装配
// ==========================================

#[test]
fn test_nested_assembly_audit_trail() {
    let (catalog, bom) = nested_tables();

    let result = engine_with_rate(10.0)
        .explode(&catalog, &bom, "A100")
        .unwrap();

    // 人工 £10 + B001 £10 + S200 子树 £2
    assert_close(result.total_cost, 22.0);

    let items: Vec<&str> = result.rows.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["A100", "B001", "S200", "D001", "S200"]);

    // 子树行缩进一层,汇总行回到父层级
    assert_eq!(result.rows[3].level, 1);
    assert_eq!(result.rows[4].level, 0);
    assert_eq!(result.rows[4].kind, ContributionKind::Manufactured);
    assert_close(result.rows[4].unit_cost, 2.0);
    assert_close(result.rows[4].total_cost, 2.0);
}

#[test]
fn test_labour_rows_precede_component_rows_per_level() {
    let (catalog, bom) = nested_tables();

    let result = engine_with_rate(10.0)
        .explode(&catalog, &bom, "A100")
        .unwrap();

    // 每个装配的首行是其人工行
    for assembly in ["A100", "S200"] {
        let first_for_assembly = result
            .rows
            .iter()
            .find(|r| r.parent == assembly || (r.item == assembly && r.kind == ContributionKind::Labour))
            .unwrap();
        assert_eq!(first_for_assembly.kind, ContributionKind::Labour);
        assert_eq!(first_for_assembly.item, assembly);
    }
}

// ==========================================
// 策略与防护
// ==========================================

#[test]
fn test_fail_policy_reports_unresolved_component() {
    let catalog = PurchaseCatalog::from_records(vec![PurchaseRecord::new("B", 5.0, None)]);
    let bom = BomIndex::from_edges(vec![
        BomEdge::new("A", "B", 1.0, 1.0, None),
        BomEdge::new("A", "GHOST", 1.0, 1.0, None),
    ]);
    let engine = CostExplosionEngine::new(CostingConfig {
        labour_rate: 10.0,
        unresolved_policy: UnresolvedPolicy::Fail,
        ..CostingConfig::default()
    });

    let err = engine.explode(&catalog, &bom, "A").unwrap_err();
    assert!(
        matches!(err, CostingError::UnresolvedComponent { component, .. } if component == "GHOST")
    );
}

#[test]
fn test_cycle_reported_not_stack_overflow() {
    let catalog = PurchaseCatalog::default();
    let bom = BomIndex::from_edges(vec![
        BomEdge::new("A", "B", 1.0, 1.0, None),
        BomEdge::new("B", "C", 1.0, 1.0, None),
        BomEdge::new("C", "A", 1.0, 1.0, None),
    ]);

    let err = engine_with_rate(10.0).explode(&catalog, &bom, "A").unwrap_err();
    match err {
        CostingError::CyclicBom { component, path } => {
            assert_eq!(component, "A");
            assert_eq!(path, "A -> B -> C");
        }
        other => panic!("期望 CyclicBom,实际 {:?}", other),
    }
}
