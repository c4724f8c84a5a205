// ==========================================
// 配件目录报价系统 - 文件解析器实现
// ==========================================
// 支持: 分隔文本 (.csv/.tsv) / Excel (.xlsx，仅第一个工作表)
// 输出: 表头 + 数据行，单元格全部转为文本，全空行跳过
// ==========================================

use crate::domain::ingest::RawTable;
use crate::domain::types::FileKind;
use crate::importer::catalog_importer_trait::FileParser;
use crate::importer::error::{IngestError, IngestResult};
use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveTime;
use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::debug;

// ==========================================
// 分隔文本 Parser 实现
// ==========================================
pub struct DelimitedParser {
    // None 表示按表头行自动识别（逗号 / 制表符）
    delimiter: Option<u8>,
}

impl DelimitedParser {
    /// CSV：分隔符自动识别
    pub fn csv() -> Self {
        Self { delimiter: None }
    }

    /// TSV：固定制表符
    pub fn tsv() -> Self {
        Self {
            delimiter: Some(b'\t'),
        }
    }
}

impl FileParser for DelimitedParser {
    fn parse_to_raw_table(&self, bytes: &[u8]) -> IngestResult<RawTable> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.trim_start_matches('\u{feff}');

        let delimiter = self
            .delimiter
            .unwrap_or_else(|| detect_delimiter(text.lines().next().unwrap_or("")));
        debug!(delimiter = %(delimiter as char).escape_default(), "分隔符确定");

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut table = RawTable {
            headers,
            ..Default::default()
        };
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();

            // 跳过完全空白的行
            if is_blank_row(&row) {
                table.blank_rows_skipped += 1;
                continue;
            }

            table.rows.push(row);
        }

        Ok(table)
    }
}

/// 按表头行识别分隔符：含制表符且制表符多于逗号时为制表符，否则逗号
fn detect_delimiter(header_line: &str) -> u8 {
    let tabs = header_line.matches('\t').count();
    let commas = header_line.matches(',').count();
    if tabs > 0 && tabs > commas {
        b'\t'
    } else {
        b','
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_table(&self, bytes: &[u8]) -> IngestResult<RawTable> {
        // 打开 Excel 工作簿
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        // 读取第一个 sheet
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngestError::MalformedFile("Excel 文件无工作表".to_string()))??;

        let mut rows = range.rows();

        // 提取表头（第一行）
        let header_row = rows.next().ok_or(IngestError::EmptyOrHeaderOnly)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell_to_string(cell).trim().to_string())
            .collect();

        // 读取数据行
        let mut table = RawTable {
            headers,
            ..Default::default()
        };
        for data_row in rows {
            let row: Vec<String> = data_row.iter().map(cell_to_string).collect();

            if is_blank_row(&row) {
                table.blank_rows_skipped += 1;
                continue;
            }

            table.rows.push(row);
        }

        if table.rows.is_empty() {
            return Err(IngestError::EmptyOrHeaderOnly);
        }

        Ok(table)
    }
}

/// 单元格转文本
///
/// - 整数值浮点数不带小数部分
/// - 日期单元格: 零点为 "YYYY-MM-DD"，否则 "YYYY-MM-DD HH:MM:SS"
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

// ==========================================
// 按文件类型选择解析器
// ==========================================
pub fn parser_for(kind: FileKind) -> Box<dyn FileParser> {
    match kind {
        FileKind::Csv => Box::new(DelimitedParser::csv()),
        FileKind::Tsv => Box::new(DelimitedParser::tsv()),
        FileKind::Xlsx => Box::new(ExcelParser),
    }
}
