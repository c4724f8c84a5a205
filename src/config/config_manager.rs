// ==========================================
// 配件目录报价系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、查询
// 存储: JSON 键值文件（扁平对象，键见 config_keys）
// ==========================================

use crate::config::catalog_config_trait::{
    CatalogConfig, CatalogConfigReader, CurrencyFormat, SearchConfig,
};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("配置文件格式错误: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("未知配置项: {0}")]
    UnknownKey(String),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
// 加载时即完成全部校验，读取接口不再返回错误
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    resolved: CatalogConfig,
}

impl ConfigManager {
    /// 使用全部默认值创建
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置覆写
    ///
    /// # 参数
    /// - path: JSON 文件路径，内容为扁平对象，如 {"search.threshold": 0.3}
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "加载配置文件");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 从 JSON 文本加载配置覆写
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(content)?;

        let mut values = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            if !config_keys::ALL.contains(&key.as_str()) {
                return Err(ConfigError::UnknownKey(key));
            }
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => continue,
                other => other.to_string(),
            };
            values.insert(key, text);
        }

        let resolved = resolve(&values)?;
        debug!(overrides = values.len(), "配置解析完成");
        Ok(Self { values, resolved })
    }

    /// 读取原始配置值（未覆写返回 None）
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }
}

impl CatalogConfigReader for ConfigManager {
    fn max_records(&self) -> usize {
        self.resolved.max_records
    }

    fn search_config(&self) -> SearchConfig {
        self.resolved.search
    }

    fn currency_format(&self) -> CurrencyFormat {
        self.resolved.currency.clone()
    }
}

fn resolve(values: &HashMap<String, String>) -> Result<CatalogConfig, ConfigError> {
    let mut config = CatalogConfig::default();

    if let Some(v) = values.get(config_keys::MAX_RECORDS) {
        let parsed = parse_value::<usize>(config_keys::MAX_RECORDS, v)?;
        if parsed == 0 {
            return Err(value_error(config_keys::MAX_RECORDS, v, "必须大于 0"));
        }
        config.max_records = parsed;
    }

    if let Some(v) = values.get(config_keys::SEARCH_THRESHOLD) {
        let parsed = parse_value::<f64>(config_keys::SEARCH_THRESHOLD, v)?;
        if !(0.0..=1.0).contains(&parsed) {
            return Err(value_error(config_keys::SEARCH_THRESHOLD, v, "必须位于 [0, 1]"));
        }
        config.search.threshold = parsed;
    }

    if let Some(v) = values.get(config_keys::SEARCH_MIN_QUERY_CHARS) {
        config.search.min_query_chars =
            parse_value::<usize>(config_keys::SEARCH_MIN_QUERY_CHARS, v)?;
    }

    if let Some(v) = values.get(config_keys::SEARCH_MAX_RESULTS) {
        let parsed = parse_value::<usize>(config_keys::SEARCH_MAX_RESULTS, v)?;
        // 0 表示不限
        config.search.max_results = (parsed > 0).then_some(parsed);
    }

    if let Some(v) = values.get(config_keys::CURRENCY_SYMBOL) {
        config.currency.symbol = v.clone();
    }

    if let Some(v) = values.get(config_keys::CURRENCY_DECIMALS) {
        let parsed = parse_value::<u32>(config_keys::CURRENCY_DECIMALS, v)?;
        if parsed > 6 {
            return Err(value_error(config_keys::CURRENCY_DECIMALS, v, "不能超过 6"));
        }
        config.currency.decimals = parsed;
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| value_error(key, value, "无法解析"))
}

fn value_error(key: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::ValueError {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 导入
    pub const MAX_RECORDS: &str = "max_records";

    // 检索
    pub const SEARCH_THRESHOLD: &str = "search.threshold";
    pub const SEARCH_MIN_QUERY_CHARS: &str = "search.min_query_chars";
    pub const SEARCH_MAX_RESULTS: &str = "search.max_results";

    // 金额显示
    pub const CURRENCY_SYMBOL: &str = "currency.symbol";
    pub const CURRENCY_DECIMALS: &str = "currency.decimals";

    pub const ALL: [&str; 6] = [
        MAX_RECORDS,
        SEARCH_THRESHOLD,
        SEARCH_MIN_QUERY_CHARS,
        SEARCH_MAX_RESULTS,
        CURRENCY_SYMBOL,
        CURRENCY_DECIMALS,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::new();
        assert_eq!(manager.max_records(), 65_000);
        assert_eq!(manager.search_config().threshold, 0.4);
        assert_eq!(manager.search_config().min_query_chars, 2);
        assert_eq!(manager.search_config().max_results, None);
        assert_eq!(manager.currency_format().symbol, "₹");
    }

    #[test]
    fn test_overrides_from_json() {
        let manager = ConfigManager::from_json_str(
            r#"{"max_records": 10, "search.threshold": "0.25", "search.max_results": 20, "currency.symbol": "$"}"#,
        )
        .unwrap();

        assert_eq!(manager.max_records(), 10);
        assert_eq!(manager.search_config().threshold, 0.25);
        assert_eq!(manager.search_config().max_results, Some(20));
        assert_eq!(manager.currency_format().symbol, "$");
        assert_eq!(manager.get_global_config_value("max_records"), Some("10"));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let result = ConfigManager::from_json_str(r#"{"search.threshold": 1.5}"#);
        assert!(matches!(result, Err(ConfigError::ValueError { .. })));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ConfigManager::from_json_str(r#"{"season_mode": "AUTO"}"#);
        assert!(matches!(result, Err(ConfigError::UnknownKey(k)) if k == "season_mode"));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"search.min_query_chars": 3}}"#).unwrap();

        let manager = ConfigManager::from_file(temp_file.path()).unwrap();
        assert_eq!(manager.search_config().min_query_chars, 3);
    }
}
