// ==========================================
// 配件目录报价系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有错误仅终止本次导入，不重试、不中断进程
// ==========================================

use crate::domain::types::CanonicalField;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    #[error("文件格式不支持: {0}（仅支持 .xlsx/.csv/.tsv）")]
    UnsupportedFormat(String),

    #[error("工作表为空或只有表头行，没有数据行")]
    EmptyOrHeaderOnly,

    #[error("缺少必需列: {}", format_fields(.0))]
    MissingColumns(Vec<CanonicalField>),

    #[error("文件解析失败: {0}")]
    MalformedFile(String),

    #[error("记录数 {count} 超过上限 {limit}")]
    SizeExceeded { count: usize, limit: usize },
}

fn format_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// 读取层内部错误统一归为 MalformedFile，只保留首条错误文本

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::MalformedFile(err.to_string())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::MalformedFile(err.to_string())
    }
}

impl From<calamine::XlsxError> for IngestError {
    fn from(err: calamine::XlsxError) -> Self {
        IngestError::MalformedFile(err.to_string())
    }
}

impl From<std::str::Utf8Error> for IngestError {
    fn from(err: std::str::Utf8Error) -> Self {
        IngestError::MalformedFile(format!("文本编码不是 UTF-8: {}", err))
    }
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;
