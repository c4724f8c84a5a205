// ==========================================
// 配件目录报价系统 - 目录导入器实现
// ==========================================
// 职责: 整合导入流程，从上传文件到目录
// 流程: 类型判定 → 解析 → 表头标准化 → 必需列校验 → 提取 → 上限校验 → 去重
// ==========================================

use crate::config::CatalogConfigReader;
use crate::domain::ingest::{IngestOutcome, IngestReport, RawTable, UploadedFile};
use crate::domain::part::Catalog;
use crate::domain::types::FileKind;
use crate::importer::catalog_importer_trait::{CatalogImporter, RecordExtractor};
use crate::importer::error::{IngestError, IngestResult};
use crate::importer::file_parser::parser_for;
use crate::importer::header_normalizer::HeaderMapping;
use crate::importer::record_extractor::RecordExtractor as RecordExtractorImpl;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// CatalogImporterImpl - 目录导入器实现
// ==========================================
pub struct CatalogImporterImpl<C>
where
    C: CatalogConfigReader,
{
    // 配置读取器
    config: C,

    // 导入组件
    record_extractor: Box<dyn RecordExtractor>,
}

impl<C> CatalogImporterImpl<C>
where
    C: CatalogConfigReader,
{
    /// 创建新的 CatalogImporter 实例（使用默认记录提取器）
    pub fn new(config: C) -> Self {
        Self::with_extractor(config, Box::new(RecordExtractorImpl))
    }

    /// 创建新的 CatalogImporter 实例
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - record_extractor: 记录提取器
    pub fn with_extractor(config: C, record_extractor: Box<dyn RecordExtractor>) -> Self {
        Self {
            config,
            record_extractor,
        }
    }

    /// 表格 → 目录（同步部分：标准化、校验、提取、去重）
    fn build_catalog(&self, table: RawTable) -> IngestResult<(Catalog, usize, HeaderMapping)> {
        // === 步骤 2: 表头标准化 ===
        let mapping = HeaderMapping::from_headers(&table.headers);
        if !mapping.ignored.is_empty() {
            debug!(ignored = ?mapping.ignored, "忽略未识别的表头");
        }

        // === 步骤 3: 必需列校验 ===
        let missing = mapping.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "缺少必需列，拒绝整个文件");
            return Err(IngestError::MissingColumns(missing));
        }

        // === 步骤 4: 逐行提取 ===
        let records: Vec<_> = table
            .rows
            .iter()
            .map(|row| self.record_extractor.extract(row, &mapping))
            .collect();
        debug!(count = records.len(), "记录提取完成");

        // === 步骤 5: 上限校验（解析成本已付出，结果整体丢弃）===
        let limit = self.config.max_records();
        if records.len() > limit {
            warn!(count = records.len(), limit = limit, "记录数超过上限");
            return Err(IngestError::SizeExceeded {
                count: records.len(),
                limit,
            });
        }

        // === 步骤 6: item_no 去重 ===
        let (catalog, duplicates) = Catalog::from_records(records);
        if duplicates > 0 {
            warn!(duplicates = duplicates, "存在重复物料号，保留最后出现的记录");
        }

        Ok((catalog, duplicates, mapping))
    }
}

#[async_trait::async_trait]
impl<C> CatalogImporter for CatalogImporterImpl<C>
where
    C: CatalogConfigReader,
{
    #[instrument(skip(self, file), fields(file_name = %file.name, batch_id))]
    async fn ingest(&self, file: UploadedFile) -> IngestResult<IngestOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        // === 步骤 0: 按扩展名判定类型 ===
        let kind = FileKind::from_file_name(&file.name).ok_or_else(|| {
            warn!("文件格式不支持");
            IngestError::UnsupportedFormat(unsupported_label(&file.name))
        })?;
        info!(kind = %kind, size = file.bytes.len(), "开始导入目录");

        // === 步骤 1: 解析文件（阻塞线程池，不占用事件循环）===
        let UploadedFile { name, bytes } = file;
        let table = tokio::task::spawn_blocking(move || parser_for(kind).parse_to_raw_table(&bytes))
            .await
            .map_err(|e| IngestError::MalformedFile(format!("解析任务异常终止: {}", e)))?
            .map_err(|e| {
                warn!(error = %e, "文件解析失败");
                e
            })?;

        let data_rows = table.rows.len();
        let blank_rows_skipped = table.blank_rows_skipped;
        info!(data_rows = data_rows, blank_rows = blank_rows_skipped, "文件解析完成");

        let (catalog, duplicate_rows, mapping) = self.build_catalog(table)?;

        let report = IngestReport {
            batch_id,
            file_name: name,
            file_kind: kind,
            data_rows,
            records_kept: catalog.len(),
            blank_rows_skipped,
            duplicate_rows,
            ignored_headers: mapping.ignored,
            ingested_at: Utc::now(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            records = report.records_kept,
            elapsed_ms = report.elapsed_ms,
            "目录导入完成"
        );

        Ok(IngestOutcome { catalog, report })
    }

    async fn ingest_path<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> IngestResult<IngestOutcome> {
        let path = file_path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        // 先判定类型，不支持的文件无需读取
        if FileKind::from_file_name(&name).is_none() {
            return Err(IngestError::UnsupportedFormat(unsupported_label(&name)));
        }

        let bytes = tokio::fs::read(path).await?;
        self.ingest(UploadedFile::new(name, bytes)).await
    }
}

/// 错误信息中展示的格式标签：有扩展名取扩展名，否则取文件名
fn unsupported_label(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| name.to_string())
}
