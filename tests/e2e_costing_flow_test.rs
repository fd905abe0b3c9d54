// ==========================================
// BOM 成本核算工具 - 全流程端到端测试
// ==========================================
// 流程: CSV 文件 → 导入 → 视图构建 → 成本展开 → 明细导出 → 回读校验
// ==========================================


use bom_costing::{logging, ApiError, CostingApi, CostingConfig, CostingError, EXPORT_COLUMNS};
use tempfile::Builder;

const EPSILON: f64 = 1e-9;

fn api_with_rate(labour_rate: f64) -> CostingApi {
    CostingApi::new(CostingConfig {
        labour_rate,
        ..CostingConfig::default()
    })
}

#[test]
fn test_full_costing_flow() {
    logging::init_test();

    let bom_file = test_helpers::write_temp_csv(test_helpers::sample_bom_csv());
    let purchase_file = test_helpers::write_temp_csv(test_helpers::sample_purchase_csv());
    let api = api_with_rate(10.0);

    // 导入与视图构建
    let (bom, catalog) = api.load_tables(bom_file.path(), purchase_file.path()).unwrap();
    assert_eq!(api.list_assemblies(&bom), vec!["A100", "S200"]);

    // 成本展开: 人工 £10 + B001 £10 + S200 子树 £2
    let result = api.price_assembly(&catalog, &bom, "A100").unwrap();
    assert!((result.total_cost - 22.0).abs() < EPSILON);
    assert_eq!(result.rows.len(), 5);

    // 导出并回读
    let out_file = Builder::new().suffix(".csv").tempfile().unwrap();
    api.export_breakdown(&result, out_file.path()).unwrap();

    let mut reader = csv::Reader::from_path(out_file.path()).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(headers, EXPORT_COLUMNS);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 5);

    // 行序契约: A100 人工行在首,S200 子树行先于其汇总行
    let items: Vec<&str> = records.iter().map(|r| r.get(2).unwrap()).collect();
    assert_eq!(items, vec!["A100", "B001", "S200", "D001", "S200"]);
    let levels: Vec<&str> = records.iter().map(|r| r.get(0).unwrap()).collect();
    assert_eq!(levels, vec!["0", "0", "1", "1", "0"]);
    let kinds: Vec<&str> = records.iter().map(|r| r.get(5).unwrap()).collect();
    assert_eq!(
        kinds,
        vec!["Labour", "Purchased", "Labour", "Purchased", "Manufactured"]
    );

    // 描述列: 人工/自制行用固定文案,外购行用目录描述
    let descriptions: Vec<&str> = records.iter().map(|r| r.get(3).unwrap()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Assembly Labour",
            "Hex bolt M8",
            "Assembly Labour",
            "Washer 8mm",
            "Manufactured"
        ]
    );
}

#[test]
fn test_pricing_twice_is_deterministic() {
    let bom_file = test_helpers::write_temp_csv(test_helpers::sample_bom_csv());
    let purchase_file = test_helpers::write_temp_csv(test_helpers::sample_purchase_csv());
    let api = api_with_rate(10.0);

    let (bom, catalog) = api.load_tables(bom_file.path(), purchase_file.path()).unwrap();
    let first = api.price_assembly(&catalog, &bom, "A100").unwrap();
    let second = api.price_assembly(&catalog, &bom, "A100").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_assembly_surfaces_api_error() {
    let bom_file = test_helpers::write_temp_csv(test_helpers::sample_bom_csv());
    let purchase_file = test_helpers::write_temp_csv(test_helpers::sample_purchase_csv());
    let api = api_with_rate(10.0);

    let (bom, catalog) = api.load_tables(bom_file.path(), purchase_file.path()).unwrap();
    let err = api.price_assembly(&catalog, &bom, "Z999").unwrap_err();

    assert!(matches!(
        err,
        ApiError::Costing(CostingError::UnknownAssembly { assembly }) if assembly == "Z999"
    ));
}

#[test]
fn test_blank_assembly_rejected_as_invalid_input() {
    let bom_file = test_helpers::write_temp_csv(test_helpers::sample_bom_csv());
    let purchase_file = test_helpers::write_temp_csv(test_helpers::sample_purchase_csv());
    let api = api_with_rate(10.0);

    let (bom, catalog) = api.load_tables(bom_file.path(), purchase_file.path()).unwrap();
    let err = api.price_assembly(&catalog, &bom, "   ").unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_purchased_top_level_code_priced_from_catalog() {
    // 顶层编码直接命中采购目录: 单行外购明细
    let bom_file = test_helpers::write_temp_csv(test_helpers::sample_bom_csv());
    let purchase_file = test_helpers::write_temp_csv(test_helpers::sample_purchase_csv());
    let api = api_with_rate(10.0);

    let (bom, catalog) = api.load_tables(bom_file.path(), purchase_file.path()).unwrap();
    let result = api.price_assembly(&catalog, &bom, "B001").unwrap();

    assert!((result.total_cost - 5.0).abs() < EPSILON);
    assert_eq!(result.rows.len(), 1);
}
