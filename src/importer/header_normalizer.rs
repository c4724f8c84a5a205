// ==========================================
// 配件目录报价系统 - 表头标准化
// ==========================================
// 职责: 原始表头 → 标准字段（大小写/空白不敏感，支持多种写法）
// 未识别的表头不报错，对应列被忽略
// ==========================================

use crate::domain::types::CanonicalField;
use serde::Serialize;

/// 表头同义词表（键为标准化后的写法）
const HEADER_SYNONYMS: &[(&str, CanonicalField)] = &[
    ("item no", CanonicalField::ItemNo),
    ("item no.", CanonicalField::ItemNo),
    ("item number", CanonicalField::ItemNo),
    ("item description", CanonicalField::ItemDescription),
    ("description", CanonicalField::ItemDescription),
    ("item group", CanonicalField::ItemGroup),
    ("model", CanonicalField::Model),
    ("bhl/hln flag", CanonicalField::BhlHlnFlag),
    ("bhl / hln flag", CanonicalField::BhlHlnFlag),
    ("hsn tax %", CanonicalField::HsnTax),
    ("hsn tax%", CanonicalField::HsnTax),
    ("hsn tax", CanonicalField::HsnTax),
    ("sale rate", CanonicalField::SaleRate),
    ("mrp", CanonicalField::Mrp),
];

/// 表头文本标准化（去 BOM、TRIM、小写、连续空白折叠为单个空格）
pub fn normalize_header_text(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// 原始表头 → 标准字段
///
/// # 返回
/// - Some(CanonicalField): 已识别
/// - None: 未识别（该列被忽略）
pub fn normalize_header(raw: &str) -> Option<CanonicalField> {
    let normalized = normalize_header_text(raw);
    HEADER_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == normalized)
        .map(|(_, field)| *field)
}

// ==========================================
// HeaderMapping - 列 → 标准字段映射
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderMapping {
    /// 与表头逐列对齐，None 表示忽略该列
    pub columns: Vec<Option<CanonicalField>>,

    /// 未识别的原始表头（非空者）
    pub ignored: Vec<String>,
}

impl HeaderMapping {
    /// 解析表头行
    pub fn from_headers(headers: &[String]) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        let mut ignored = Vec::new();

        for header in headers {
            let field = normalize_header(header);
            if field.is_none() && !header.trim().is_empty() {
                ignored.push(header.trim().to_string());
            }
            columns.push(field);
        }

        Self { columns, ignored }
    }

    /// 缺失的标准字段（按标准顺序）
    pub fn missing_fields(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .iter()
            .copied()
            .filter(|field| !self.columns.contains(&Some(*field)))
            .collect()
    }
}
