// ==========================================
// 配件目录报价系统 - 导入领域模型
// ==========================================
// 职责: 上传文件、原始表格、导入报告
// ==========================================

use crate::domain::part::Catalog;
use crate::domain::types::FileKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// UploadedFile - 上传文件
// ==========================================
// 用途: 展示层传入的文件（文件名决定格式，内容为原始字节）
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

// ==========================================
// RawTable - 原始表格
// ==========================================
// 用途: 读取层输出，所有单元格已转为文本
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,   // 首行表头
    pub rows: Vec<Vec<String>>, // 数据行（已跳过全空行）
    pub blank_rows_skipped: usize,
}

// ==========================================
// IngestReport - 导入报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub batch_id: String,             // 本次导入批次 ID
    pub file_name: String,            // 文件名
    pub file_kind: FileKind,          // 文件类型
    pub data_rows: usize,             // 读取的数据行数
    pub records_kept: usize,          // 去重后的目录记录数
    pub blank_rows_skipped: usize,    // 跳过的全空行数
    pub duplicate_rows: usize,        // 被合并的重复 item_no 行数
    pub ignored_headers: Vec<String>, // 未识别（被忽略）的表头
    pub ingested_at: DateTime<Utc>,   // 导入完成时间
    pub elapsed_ms: u64,              // 导入耗时（毫秒）
}

// ==========================================
// IngestOutcome - 导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub catalog: Catalog,
    pub report: IngestReport,
}
