// ==========================================
// 配件目录报价系统 - 配置层
// ==========================================
// 职责: 导入上限、检索容错、金额格式配置
// 存储: 内置默认值 + 可选 JSON 覆写
// ==========================================

pub mod catalog_config_trait;
pub mod config_manager;

// 重导出核心配置类型
pub use catalog_config_trait::{
    CatalogConfig, CatalogConfigReader, CurrencyFormat, SearchConfig, DEFAULT_MAX_RECORDS,
};
pub use config_manager::{config_keys, ConfigError, ConfigManager};
