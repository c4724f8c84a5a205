// ==========================================
// 配件目录报价系统 - 引擎层
// ==========================================
// 职责: 模糊检索、查询解析、报价核算
// 红线: 引擎不读文件，不持有全局状态
// ==========================================

pub mod currency_format;
pub mod fuzzy_score;
pub mod query_resolver;
pub mod quotation_ledger;
pub mod search_index;

// 重导出核心引擎
pub use currency_format::format_amount;
pub use query_resolver::resolve_query;
pub use quotation_ledger::QuotationLedger;
pub use search_index::{SearchHit, SearchIndex};
