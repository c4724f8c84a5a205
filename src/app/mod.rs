// ==========================================
// 配件目录报价系统 - 应用层
// ==========================================
// 职责: 展示层持有的会话状态，串联导入、检索、报价
// ==========================================

pub mod state;

// 重导出
pub use state::{AppState, IngestStatus, UploadOutcome, UploadTicket};
