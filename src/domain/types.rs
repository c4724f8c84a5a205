// ==========================================
// 配件目录报价系统 - 领域类型定义
// ==========================================
// 职责: 标准字段枚举、上传文件类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 标准字段 (Canonical Field)
// ==========================================
// 红线: 8 个字段全部必须以列的形式出现在源文件中
// 序列化格式: camelCase (与前端字段名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    ItemNo,          // 物料号（目录主键）
    ItemDescription, // 物料描述
    ItemGroup,       // 物料组
    Model,           // 机型
    BhlHlnFlag,      // BHL/HLN 标记
    HsnTax,          // HSN 税率（文本，如 "18%"）
    SaleRate,        // 销售价（文本，保留货币符号）
    Mrp,             // 最高零售价（文本，保留货币符号）
}

impl CanonicalField {
    /// 全部标准字段（标准顺序，缺列报告按此顺序输出）
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::ItemNo,
        CanonicalField::ItemDescription,
        CanonicalField::ItemGroup,
        CanonicalField::Model,
        CanonicalField::BhlHlnFlag,
        CanonicalField::HsnTax,
        CanonicalField::SaleRate,
        CanonicalField::Mrp,
    ];

    /// 标准字段名（camelCase）
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::ItemNo => "itemNo",
            CanonicalField::ItemDescription => "itemDescription",
            CanonicalField::ItemGroup => "itemGroup",
            CanonicalField::Model => "model",
            CanonicalField::BhlHlnFlag => "bhlHlnFlag",
            CanonicalField::HsnTax => "hsnTax",
            CanonicalField::SaleRate => "saleRate",
            CanonicalField::Mrp => "mrp",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 上传文件类型 (File Kind)
// ==========================================
// 仅按扩展名判定，不嗅探文件内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileKind {
    Csv,  // 逗号分隔（分隔符按表头自动识别）
    Tsv,  // 制表符分隔
    Xlsx, // Excel 工作簿（仅读取第一个工作表）
}

impl FileKind {
    /// 按文件名扩展名判定文件类型（大小写不敏感）
    ///
    /// # 返回
    /// - Some(FileKind): 支持的类型
    /// - None: 无扩展名或不支持
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();

        match ext.as_str() {
            "csv" => Some(FileKind::Csv),
            "tsv" => Some(FileKind::Tsv),
            "xlsx" => Some(FileKind::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Csv => write!(f, "CSV"),
            FileKind::Tsv => write!(f, "TSV"),
            FileKind::Xlsx => write!(f, "XLSX"),
        }
    }
}
