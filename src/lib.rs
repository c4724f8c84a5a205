// ==========================================
// 配件目录报价系统 - 核心库
// ==========================================
// 职责: 配件目录导入与标准化、模糊检索、报价核算
// 系统定位: 单会话、纯内存；展示层通过 AppState 调用
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 文件 → 目录
pub mod importer;

// 引擎层 - 检索与报价
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 应用层 - 会话状态
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CanonicalField, Catalog, FileKind, IngestOutcome, IngestReport, PartRecord, QuotationLine,
    QuotationTotals, UploadedFile,
};

// 导入
pub use importer::{CatalogImporter, CatalogImporterImpl, IngestError, IngestResult};

// 引擎
pub use engine::{format_amount, resolve_query, QuotationLedger, SearchIndex};

// 配置
pub use config::{CatalogConfig, CatalogConfigReader, ConfigManager};

// 应用状态
pub use app::{AppState, IngestStatus, UploadOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "配件目录报价系统";
