// ==========================================
// 配件目录报价系统 - 目录配置读取 Trait
// ==========================================
// 职责: 定义导入/检索/报价所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use serde::{Deserialize, Serialize};

/// 目录记录数上限默认值
pub const DEFAULT_MAX_RECORDS: usize = 65_000;

/// 模糊检索默认阈值（可编辑字符占查询长度的比例）
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.4;

/// 模糊检索最短查询长度
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

// ==========================================
// SearchConfig - 检索参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub threshold: f64,             // 容错阈值 [0, 1]，0 表示仅子串精确命中
    pub min_query_chars: usize,     // 低于该长度不做模糊检索
    pub max_results: Option<usize>, // 结果上限（None 不限）
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SEARCH_THRESHOLD,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: None,
        }
    }
}

// ==========================================
// CurrencyFormat - 金额显示格式
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub symbol: String, // 货币符号
    pub decimals: u32,  // 小数位数
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            decimals: 2,
        }
    }
}

// ==========================================
// CatalogConfigReader Trait
// ==========================================
// 用途: 导入管道、检索索引、金额格式化读取配置
// 实现者: ConfigManager（JSON 覆写）、CatalogConfig（纯默认值）
pub trait CatalogConfigReader: Send + Sync {
    /// 获取目录记录数上限
    ///
    /// # 默认值
    /// - 65000
    fn max_records(&self) -> usize;

    /// 获取检索参数
    fn search_config(&self) -> SearchConfig;

    /// 获取金额显示格式
    fn currency_format(&self) -> CurrencyFormat;
}

// ==========================================
// CatalogConfig - 完整配置快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    pub max_records: usize,
    pub search: SearchConfig,
    pub currency: CurrencyFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            search: SearchConfig::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl CatalogConfigReader for CatalogConfig {
    fn max_records(&self) -> usize {
        self.max_records
    }

    fn search_config(&self) -> SearchConfig {
        self.search
    }

    fn currency_format(&self) -> CurrencyFormat {
        self.currency.clone()
    }
}
