// ==========================================
// 配件目录报价系统 - 检索索引
// ==========================================
// 职责: 基于 item_no / item_description 的模糊检索索引
// 红线: 目录变化时整体重建，不做增量更新；建好后只读
// ==========================================

use crate::config::SearchConfig;
use crate::domain::part::{Catalog, PartRecord};
use crate::engine::fuzzy_score::{approximate_substring_distance, SubsequenceScorer};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// 单条记录的索引键（已转小写）
#[derive(Debug, Clone)]
struct IndexEntry {
    item_no: Vec<char>,
    description: Vec<char>,
}

// ==========================================
// SearchHit - 检索命中
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub position: usize, // 目录内下标
    pub score: f64,      // 编辑距离 / 查询长度，越小越好
    pub quality: u32,    // 子序列匹配质量，越大越好
}

// ==========================================
// SearchIndex - 检索索引
// ==========================================
#[derive(Debug, Clone)]
pub struct SearchIndex {
    catalog: Arc<Catalog>,
    entries: Vec<IndexEntry>,
    config: SearchConfig,
}

impl SearchIndex {
    /// 为目录构建索引
    #[instrument(skip(catalog, config), fields(records = catalog.len()))]
    pub fn build(catalog: Arc<Catalog>, config: SearchConfig) -> Self {
        let entries = catalog
            .iter()
            .map(|record| IndexEntry {
                item_no: record.item_no.to_lowercase().chars().collect(),
                description: record.item_description.to_lowercase().chars().collect(),
            })
            .collect();

        debug!("检索索引构建完成");
        Self {
            catalog,
            entries,
            config,
        }
    }

    /// 空索引（未加载目录）
    pub fn empty(config: SearchConfig) -> Self {
        Self::build(Arc::new(Catalog::default()), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn record(&self, position: usize) -> Option<&PartRecord> {
        self.catalog.records().get(position)
    }

    /// 模糊检索（按得分排序，最佳在前）
    ///
    /// # 参数
    /// - query: 已 TRIM 的查询文本
    ///
    /// # 返回
    /// - Vec<SearchHit>: 得分 <= 阈值的候选；查询短于 min_query_chars 时为空
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let pattern: Vec<char> = query.to_lowercase().chars().collect();
        if pattern.is_empty() || pattern.len() < self.config.min_query_chars {
            return Vec::new();
        }

        let max_errors = (self.config.threshold * pattern.len() as f64).floor() as usize;
        let mut scorer = SubsequenceScorer::new(query);
        let mut hits = Vec::new();

        for (position, entry) in self.entries.iter().enumerate() {
            let best = [&entry.item_no, &entry.description]
                .into_iter()
                .filter(|text| !text.is_empty())
                .filter_map(|text| approximate_substring_distance(&pattern, text, max_errors))
                .min();

            let Some(distance) = best else {
                continue;
            };

            let record = &self.catalog.records()[position];
            let quality = scorer
                .score(&record.item_no)
                .max(scorer.score(&record.item_description));

            hits.push(SearchHit {
                position,
                score: distance as f64 / pattern.len() as f64,
                quality,
            });
        }

        hits.sort_by(compare_hits);
        if let Some(limit) = self.config.max_results {
            hits.truncate(limit);
        }

        debug!(query = %query, hits = hits.len(), "模糊检索完成");
        hits
    }
}

/// 排序: 得分升序 → 子序列质量降序 → 目录顺序
fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| b.quality.cmp(&a.quality))
        .then_with(|| a.position.cmp(&b.position))
}
