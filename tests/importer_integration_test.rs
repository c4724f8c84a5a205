// ==========================================
// CatalogImporter 集成测试
// ==========================================
// 测试目标: 验证 CSV / TSV / XLSX 从上传字节到目录的完整流程
// ==========================================


use parts_quotation::config::CatalogConfig;
use parts_quotation::domain::{CanonicalField, FileKind, UploadedFile};
use parts_quotation::importer::{CatalogImporter, CatalogImporterImpl, IngestError};
use parts_quotation::logging;
use std::io::Write;
use test_helpers::{
    build_xlsx, build_xlsx_with_sheets, default_importer, delimited_content, part_row,
    text_rows, Cell, STANDARD_HEADERS, VARIANT_HEADERS,
};

#[tokio::test]
async fn test_import_csv_basic() {
    logging::init_test();

    let rows = vec![
        part_row("AB-123", "Oil Filter", "₹100"),
        part_row("CD-456", "Fuel Filter", "₹250"),
        part_row("EF-789", "Hydraulic Seal Kit", "₹1,250.50"),
    ];
    let content = delimited_content(&STANDARD_HEADERS, &rows, ',');

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .expect("CSV 导入应成功");

    assert_eq!(outcome.catalog.len(), 3);
    assert_eq!(outcome.report.file_kind, FileKind::Csv);
    assert_eq!(outcome.report.records_kept, 3);
    assert_eq!(outcome.report.file_name, "catalog.csv");
    assert!(!outcome.report.batch_id.is_empty());

    let first = &outcome.catalog.records()[0];
    assert_eq!(first.item_no, "AB-123");
    assert_eq!(first.item_description, "Oil Filter");
    assert_eq!(first.hsn_tax, "18%");
    assert_eq!(first.mrp, "₹100");
    // 数值列保持原始文本
    assert_eq!(outcome.catalog.records()[2].mrp, "₹1,250.50");
}

#[tokio::test]
async fn test_import_csv_header_variants_and_extra_columns() {
    logging::init_test();

    // 表头写法与顺序均不同，附加一列未知列
    let mut headers: Vec<&str> = VARIANT_HEADERS.to_vec();
    headers.push("Warehouse");
    let rows = vec![vec![
        "₹100".to_string(),
        "Oil Filter".to_string(),
        "AB-123".to_string(),
        "18%".to_string(),
        "₹80".to_string(),
        "BHL".to_string(),
        "3DX".to_string(),
        "ENGINE".to_string(),
        "WH-7".to_string(),
    ]];
    let content = delimited_content(&headers, &rows, ',');

    let outcome = default_importer()
        .ingest(UploadedFile::new("Catalog.CSV", content))
        .await
        .expect("表头变体应被识别");

    let part = &outcome.catalog.records()[0];
    assert_eq!(part.item_no, "AB-123");
    assert_eq!(part.item_description, "Oil Filter");
    assert_eq!(part.item_group, "ENGINE");
    assert_eq!(part.model, "3DX");
    assert_eq!(part.bhl_hln_flag, "BHL");
    assert_eq!(part.hsn_tax, "18%");
    assert_eq!(part.sale_rate, "₹80");
    assert_eq!(part.mrp, "₹100");
    assert_eq!(outcome.report.ignored_headers, vec!["Warehouse".to_string()]);
}

#[tokio::test]
async fn test_import_tsv_basic() {
    logging::init_test();

    let rows = vec![
        part_row("AB-123", "Filter, Oil", "₹100"),
        part_row("CD-456", "Seal", "₹50"),
    ];
    let content = delimited_content(&STANDARD_HEADERS, &rows, '\t');

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.tsv", content))
        .await
        .expect("TSV 导入应成功");

    assert_eq!(outcome.report.file_kind, FileKind::Tsv);
    assert_eq!(outcome.catalog.len(), 2);
    // 逗号在 TSV 中只是普通字符
    assert_eq!(outcome.catalog.records()[0].item_description, "Filter, Oil");
}

#[tokio::test]
async fn test_import_csv_missing_values_become_empty() {
    logging::init_test();

    let content = format!(
        "{}\nAB-123,Oil Filter,,,,,,\n",
        STANDARD_HEADERS.join(",")
    );

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .expect("空单元格不影响导入");

    let part = &outcome.catalog.records()[0];
    assert_eq!(part.item_no, "AB-123");
    assert_eq!(part.model, "");
    assert_eq!(part.mrp, "");
}

#[tokio::test]
async fn test_import_xlsx_basic() {
    logging::init_test();

    let mut rows = text_rows(
        &VARIANT_HEADERS,
        &[vec![
            "₹100".to_string(),
            "Oil Filter".to_string(),
            "AB-123".to_string(),
            "18%".to_string(),
            "₹80".to_string(),
            "BHL".to_string(),
            "3DX".to_string(),
            "ENGINE".to_string(),
        ]],
    );
    // 数值单元格: 物料号与 MRP
    rows.push(vec![
        Cell::from(250.0),
        Cell::from("Fuel Filter"),
        Cell::from(40123.0),
        Cell::from("18%"),
        Cell::from(199.5),
        Cell::from("HLN"),
        Cell::from("3DX"),
        Cell::from("FUEL"),
    ]);
    let bytes = build_xlsx(&rows).expect("构造 xlsx 失败");

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.xlsx", bytes))
        .await
        .expect("XLSX 导入应成功");

    assert_eq!(outcome.report.file_kind, FileKind::Xlsx);
    assert_eq!(outcome.catalog.len(), 2);

    let first = &outcome.catalog.records()[0];
    assert_eq!(first.item_no, "AB-123");
    assert_eq!(first.mrp, "₹100");

    let second = &outcome.catalog.records()[1];
    assert_eq!(second.item_no, "40123");
    assert_eq!(second.mrp, "250");
    assert_eq!(second.sale_rate, "199.5");
}

#[tokio::test]
async fn test_import_csv_header_only_yields_empty_catalog() {
    logging::init_test();

    let content = delimited_content(&STANDARD_HEADERS, &[], ',');

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .expect("只有表头的 CSV 应导入为空目录");

    assert!(outcome.catalog.is_empty());
    assert_eq!(outcome.report.data_rows, 0);
    assert_eq!(outcome.report.records_kept, 0);
}

#[tokio::test]
async fn test_import_csv_ragged_rows() {
    logging::init_test();

    // 第一行多出两个单元格，第二行缺少末尾三列
    let content = format!(
        "{}\nAB-123,Oil Filter,ENGINE,3DX,BHL,18%,₹80,₹100,extra,more\nCD-456,Seal,SEAL,3DX,HLN\n",
        STANDARD_HEADERS.join(",")
    );

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .expect("行长度不一致不影响导入");

    assert_eq!(outcome.catalog.len(), 2);
    let first = &outcome.catalog.records()[0];
    assert_eq!(first.mrp, "₹100");
    assert_eq!(first.item_description, "Oil Filter");

    let second = &outcome.catalog.records()[1];
    assert_eq!(second.bhl_hln_flag, "HLN");
    assert_eq!(second.hsn_tax, "");
    assert_eq!(second.sale_rate, "");
    assert_eq!(second.mrp, "");
}

#[tokio::test]
async fn test_import_xlsx_skips_blank_rows() {
    logging::init_test();

    let mut rows = text_rows(&STANDARD_HEADERS, &[part_row("AB-123", "Oil Filter", "₹100")]);
    rows.push(vec![Cell::Empty, Cell::Empty]);
    rows.push(vec![Cell::from("  "), Cell::Empty, Cell::from("")]);
    rows.extend(
        text_rows(&STANDARD_HEADERS, &[part_row("CD-456", "Fuel Filter", "₹50")])
            .into_iter()
            .skip(1),
    );
    let bytes = build_xlsx(&rows).expect("构造 xlsx 失败");

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.xlsx", bytes))
        .await
        .expect("XLSX 导入应成功");

    assert_eq!(outcome.catalog.len(), 2);
    assert_eq!(outcome.report.data_rows, 2);
    assert_eq!(outcome.report.blank_rows_skipped, 2);
    assert_eq!(outcome.catalog.records()[1].item_no, "CD-456");
}

#[tokio::test]
async fn test_import_xlsx_reads_only_first_sheet() {
    logging::init_test();

    let first = text_rows(&STANDARD_HEADERS, &[part_row("AB-123", "Oil Filter", "₹100")]);
    let second = text_rows(&STANDARD_HEADERS, &[part_row("ZZ-999", "Ignored", "₹1")]);
    let bytes = build_xlsx_with_sheets(&[&first, &second]).expect("构造 xlsx 失败");

    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.xlsx", bytes))
        .await
        .expect("XLSX 导入应成功");

    assert_eq!(outcome.catalog.len(), 1);
    assert!(outcome.catalog.get("ZZ-999").is_none());
}

#[tokio::test]
async fn test_import_xlsx_header_only_rejected() {
    logging::init_test();

    let bytes = build_xlsx(&text_rows(&STANDARD_HEADERS, &[])).expect("构造 xlsx 失败");

    let result = default_importer()
        .ingest(UploadedFile::new("catalog.xlsx", bytes))
        .await;

    assert_eq!(result.unwrap_err(), IngestError::EmptyOrHeaderOnly);
}

#[tokio::test]
async fn test_import_xlsx_corrupt_bytes() {
    logging::init_test();

    let result = default_importer()
        .ingest(UploadedFile::new("catalog.xlsx", b"PK\x03\x04 truncated".to_vec()))
        .await;

    assert!(matches!(result, Err(IngestError::MalformedFile(_))));
}

#[tokio::test]
async fn test_import_missing_columns_lists_every_absent_field() {
    logging::init_test();

    let headers = ["Item No", "Description", "Model", "Sale Rate", "Remarks"];
    let rows = vec![vec![
        "AB-123".to_string(),
        "Oil Filter".to_string(),
        "3DX".to_string(),
        "₹80".to_string(),
        "n/a".to_string(),
    ]];
    let content = delimited_content(&headers, &rows, ',');

    let err = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        IngestError::MissingColumns(vec![
            CanonicalField::ItemGroup,
            CanonicalField::BhlHlnFlag,
            CanonicalField::HsnTax,
            CanonicalField::Mrp,
        ])
    );
    let message = err.to_string();
    assert!(message.contains("itemGroup"));
    assert!(message.contains("mrp"));
}

#[tokio::test]
async fn test_import_unsupported_format() {
    logging::init_test();

    let result = default_importer()
        .ingest(UploadedFile::new("catalog.pdf", b"%PDF-1.7".to_vec()))
        .await;

    assert_eq!(
        result.unwrap_err(),
        IngestError::UnsupportedFormat("pdf".to_string())
    );
}

#[tokio::test]
async fn test_import_size_limit_default_boundary() {
    logging::init_test();

    let header = STANDARD_HEADERS.join(",");
    let mut content = String::with_capacity(65_001 * 40);
    content.push_str(&header);
    for i in 0..65_000 {
        content.push_str(&format!("\nP-{i},Part {i},G,M,BHL,18%,10,12"));
    }

    // 恰好 65,000 条: 接受
    let outcome = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content.clone()))
        .await
        .expect("65,000 条应被接受");
    assert_eq!(outcome.catalog.len(), 65_000);

    // 65,001 条: 整体拒绝
    content.push_str("\nP-65000,Part 65000,G,M,BHL,18%,10,12");
    let err = default_importer()
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        IngestError::SizeExceeded {
            count: 65_001,
            limit: 65_000
        }
    );
}

#[tokio::test]
async fn test_import_custom_limit_from_config() {
    logging::init_test();

    let importer = CatalogImporterImpl::new(CatalogConfig {
        max_records: 1,
        ..Default::default()
    });
    let rows = vec![part_row("A", "x", "1"), part_row("B", "y", "2")];
    let content = delimited_content(&STANDARD_HEADERS, &rows, ',');

    let err = importer
        .ingest(UploadedFile::new("catalog.csv", content))
        .await
        .unwrap_err();

    assert_eq!(err, IngestError::SizeExceeded { count: 2, limit: 1 });
}

#[tokio::test]
async fn test_ingest_path_reads_file() {
    logging::init_test();

    let rows = vec![part_row("AB-123", "Oil Filter", "₹100")];
    let content = delimited_content(&STANDARD_HEADERS, &rows, ',');

    let mut temp_file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("创建临时文件失败");
    temp_file
        .write_all(content.as_bytes())
        .expect("写入临时文件失败");

    let outcome = default_importer()
        .ingest_path(temp_file.path())
        .await
        .expect("按路径导入应成功");

    assert_eq!(outcome.catalog.len(), 1);
    assert!(outcome.report.file_name.ends_with(".csv"));
}

#[tokio::test]
async fn test_ingest_path_missing_file() {
    logging::init_test();

    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let result = default_importer()
        .ingest_path(dir.path().join("missing.csv"))
        .await;

    assert!(matches!(result, Err(IngestError::MalformedFile(_))));
}

#[tokio::test]
async fn test_ingest_path_unsupported_extension() {
    logging::init_test();

    let result = default_importer().ingest_path("catalog.docx").await;

    assert_eq!(
        result.unwrap_err(),
        IngestError::UnsupportedFormat("docx".to_string())
    );
}
