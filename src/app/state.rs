// ==========================================
// 配件目录报价系统 - 应用状态
// ==========================================
// 职责: 持有目录、检索索引、报价台账（单会话、仅内存）
// 所有者: 展示层；核心不持有任何全局单例
// ==========================================

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CatalogConfigReader, CurrencyFormat, SearchConfig};
use crate::domain::ingest::{IngestOutcome, IngestReport, UploadedFile};
use crate::domain::part::{Catalog, PartRecord};
use crate::domain::quotation::QuotationTotals;
use crate::engine::{format_amount, resolve_query, QuotationLedger, SearchIndex};
use crate::importer::{CatalogImporter, IngestError, IngestResult};

/// 上传凭证
///
/// 每次开始上传分配递增编号，只有最新凭证的导入结果会被采纳
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// 导入状态（供展示层渲染）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngestStatus {
    Idle,                  // 尚未上传
    Pending,               // 解析中
    Loaded(IngestReport),  // 导入成功
    Failed(String),        // 导入失败（错误信息）
}

/// 上传完成结果
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Loaded(IngestReport),
    Failed(IngestError),
    /// 期间已开始新的上传，本次结果被丢弃
    Superseded,
}

/// 应用状态
pub struct AppState {
    /// 当前目录
    catalog: Arc<Catalog>,

    /// 检索索引（目录派生状态）
    index: SearchIndex,

    /// 报价台账
    ledger: QuotationLedger,

    /// 上传代次
    generation: u64,

    /// 最近一次导入状态
    status: IngestStatus,

    search_config: SearchConfig,
    currency: CurrencyFormat,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 配置读取器（读取检索参数与金额格式）
    pub fn new<C: CatalogConfigReader + ?Sized>(config: &C) -> Self {
        let search_config = config.search_config();
        Self {
            catalog: Arc::new(Catalog::default()),
            index: SearchIndex::empty(search_config),
            ledger: QuotationLedger::new(),
            generation: 0,
            status: IngestStatus::Idle,
            search_config,
            currency: config.currency_format(),
        }
    }

    // ==========================================
    // 目录导入
    // ==========================================

    /// 开始上传：清空目录、索引、报价与折扣，并签发新凭证
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.generation += 1;
        self.reset_catalog();
        self.status = IngestStatus::Pending;
        UploadTicket(self.generation)
    }

    /// 完成上传：仅当凭证仍为最新时采纳结果
    ///
    /// # 说明
    /// - 成功: 安装新目录并立即重建索引
    /// - 失败: 目录与报价保持为空
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: IngestResult<IngestOutcome>,
    ) -> UploadOutcome {
        if ticket.0 != self.generation {
            warn!(ticket = ticket.0, current = self.generation, "导入结果已过期，丢弃");
            return UploadOutcome::Superseded;
        }

        match result {
            Ok(IngestOutcome { catalog, report }) => {
                self.catalog = Arc::new(catalog);
                self.ledger.clear();
                self.rebuild_index();
                info!(records = self.catalog.len(), "目录已加载");
                self.status = IngestStatus::Loaded(report.clone());
                UploadOutcome::Loaded(report)
            }
            Err(e) => {
                warn!(error = %e, "目录导入失败，状态已清空");
                self.reset_catalog();
                self.status = IngestStatus::Failed(e.to_string());
                UploadOutcome::Failed(e)
            }
        }
    }

    /// 上传并导入（独占借用期间无法开始新的上传）
    pub async fn upload<I: CatalogImporter>(
        &mut self,
        importer: &I,
        file: UploadedFile,
    ) -> UploadOutcome {
        let ticket = self.begin_upload();
        let result = importer.ingest(file).await;
        self.complete_upload(ticket, result)
    }

    /// 按当前目录整体重建检索索引
    pub fn rebuild_index(&mut self) {
        self.index = SearchIndex::build(Arc::clone(&self.catalog), self.search_config);
    }

    fn reset_catalog(&mut self) {
        self.catalog = Arc::new(Catalog::default());
        self.index = SearchIndex::empty(self.search_config);
        self.ledger.clear();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> &IngestStatus {
        &self.status
    }

    // ==========================================
    // 检索
    // ==========================================

    /// 执行查询（None 表示无查询，展示层清空结果区）
    pub fn query(&self, text: &str) -> Option<Vec<&PartRecord>> {
        resolve_query(&self.index, text)
    }

    // ==========================================
    // 报价
    // ==========================================

    /// 按物料号把目录中的配件加入报价
    ///
    /// # 返回
    /// - true: 目录中存在该物料（已加入或原本已在报价中）
    /// - false: 目录中无此物料
    pub fn add_to_quotation(&mut self, item_no: &str) -> bool {
        match self.catalog.get(item_no) {
            Some(part) => {
                self.ledger.add(part.clone());
                true
            }
            None => false,
        }
    }

    pub fn ledger(&self) -> &QuotationLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut QuotationLedger {
        &mut self.ledger
    }

    pub fn totals(&self) -> QuotationTotals {
        self.ledger.totals()
    }

    /// 按配置的货币格式显示金额
    pub fn format_amount(&self, value: f64) -> String {
        format_amount(value, &self.currency)
    }
}
