// ==========================================
// 配件目录报价系统 - 领域模型层
// ==========================================
// 职责: 定义配件、目录、导入、报价实体与类型
// 红线: 不含文件解析逻辑，不含检索/核算逻辑
// ==========================================

pub mod ingest;
pub mod part;
pub mod quotation;
pub mod types;

// 重导出核心类型
pub use ingest::{IngestOutcome, IngestReport, RawTable, UploadedFile};
pub use part::{Catalog, PartRecord};
pub use quotation::{parse_amount, QuotationLine, QuotationTotals};
pub use types::{CanonicalField, FileKind};
