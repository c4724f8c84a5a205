// ==========================================
// 配件目录报价系统 - 记录提取器实现
// ==========================================
// 职责: (原始单元格序列, 列映射) → 配件记录
// 规则: 严格按列下标对齐；缺失单元格 → 空字符串；值做 TRIM
// ==========================================

use crate::domain::part::PartRecord;
use crate::importer::catalog_importer_trait::RecordExtractor as RecordExtractorTrait;
use crate::importer::header_normalizer::HeaderMapping;

pub struct RecordExtractor;

impl RecordExtractorTrait for RecordExtractor {
    fn extract(&self, cells: &[String], mapping: &HeaderMapping) -> PartRecord {
        let mut record = PartRecord::default();

        // 同一字段出现多列时，靠右的列覆盖
        for (idx, field) in mapping.columns.iter().enumerate() {
            let Some(field) = field else {
                continue;
            };
            let value = cells
                .get(idx)
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default();
            record.set_field(*field, value);
        }

        record
    }
}
