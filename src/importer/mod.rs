// ==========================================
// 配件目录报价系统 - 导入层
// ==========================================
// 职责: 上传文件 → 经校验的统一配件目录
// 支持: Excel (.xlsx), CSV, TSV
// ==========================================

// 模块声明
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod error;
pub mod file_parser;
pub mod header_normalizer;
pub mod record_extractor;

// 重导出核心类型
pub use catalog_importer_impl::CatalogImporterImpl;
pub use error::{IngestError, IngestResult};
pub use file_parser::{parser_for, DelimitedParser, ExcelParser};
pub use header_normalizer::{normalize_header, HeaderMapping};
pub use record_extractor::RecordExtractor as RecordExtractorImpl;

// 重导出 Trait 接口
pub use catalog_importer_trait::{CatalogImporter, FileParser, RecordExtractor};
