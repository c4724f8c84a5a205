// ==========================================
// 配件目录报价系统 - 查询解析
// ==========================================
// 职责: 执行用户查询，精确物料号优先于模糊结果
// 红线: 输入完整且正确的物料号时，只返回该物料，绝不返回列表
// ==========================================

use crate::domain::part::PartRecord;
use crate::engine::search_index::SearchIndex;
use tracing::debug;

/// 执行查询
///
/// # 参数
/// - index: 检索索引
/// - text: 用户输入
///
/// # 返回
/// - None: 输入为空或全空白（“无查询”，展示层据此清空结果区）
/// - Some(vec![record]): 物料号精确命中（大小写不敏感）
/// - Some(records): 模糊候选（按得分排序，可能为空）
pub fn resolve_query<'a>(index: &'a SearchIndex, text: &str) -> Option<Vec<&'a PartRecord>> {
    let query = text.trim();
    if query.is_empty() {
        return None;
    }

    // 精确命中短路（查询短于最小长度时同样生效）
    if let Some(position) = index.catalog().position(query) {
        debug!(query = %query, "物料号精确命中");
        return index.record(position).map(|record| vec![record]);
    }

    Some(
        index
            .search(query)
            .iter()
            .filter_map(|hit| index.record(hit.position))
            .collect(),
    )
}
