// ==========================================
// 配件目录报价系统 - 目录导入 Trait
// ==========================================
// 职责: 定义目录导入接口（不包含实现）
// ==========================================

use crate::domain::ingest::{IngestOutcome, RawTable, UploadedFile};
use crate::domain::part::PartRecord;
use crate::importer::error::IngestResult;
use crate::importer::header_normalizer::HeaderMapping;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录导入主接口
// 实现者: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// 导入上传文件
    ///
    /// # 参数
    /// - file: 上传文件（文件名 + 原始字节）
    ///
    /// # 返回
    /// - Ok(IngestOutcome): 新目录 + 导入报告
    /// - Err(IngestError): 五类导入错误之一，本次导入终止
    ///
    /// # 导入流程
    /// 1. 按扩展名选择读取器
    /// 2. 读取表头与数据行（单元格全部转文本）
    /// 3. 表头标准化 + 必需列校验
    /// 4. 逐行提取配件记录
    /// 5. 记录数上限校验
    /// 6. item_no 去重（后出现者覆盖）
    async fn ingest(&self, file: UploadedFile) -> IngestResult<IngestOutcome>;

    /// 从磁盘文件导入
    ///
    /// # 参数
    /// - file_path: 文件路径（文件名决定格式）
    async fn ingest_path<P: AsRef<Path> + Send>(&self, file_path: P)
        -> IngestResult<IngestOutcome>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件读取接口（阶段 0）
// 实现者: DelimitedParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件内容为原始表格
    ///
    /// # 参数
    /// - bytes: 文件原始字节
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 数据行（单元格均为文本）
    /// - Err: EmptyOrHeaderOnly / MalformedFile
    fn parse_to_raw_table(&self, bytes: &[u8]) -> IngestResult<RawTable>;
}

// ==========================================
// RecordExtractor Trait
// ==========================================
// 用途: 行 → 配件记录（阶段 2）
// 实现者: RecordExtractorImpl
pub trait RecordExtractor: Send + Sync {
    /// 按列映射提取配件记录
    ///
    /// # 参数
    /// - cells: 原始单元格（与表头逐列对齐）
    /// - mapping: 表头映射
    ///
    /// # 返回
    /// - PartRecord: 缺失单元格一律为空字符串
    fn extract(&self, cells: &[String], mapping: &HeaderMapping) -> PartRecord;
}
