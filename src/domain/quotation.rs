// ==========================================
// 配件目录报价系统 - 报价领域模型
// ==========================================
// 职责: 报价行、报价汇总、金额文本解析
// ==========================================

use crate::domain::part::PartRecord;
use serde::{Deserialize, Serialize};

// ==========================================
// QuotationLine - 报价行
// ==========================================
// 红线: quantity >= 1；数量 0 表示移除，不作为存储状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLine {
    #[serde(flatten)]
    pub part: PartRecord,
    pub quantity: u32,
}

impl QuotationLine {
    pub fn new(part: PartRecord) -> Self {
        Self { part, quantity: 1 }
    }

    /// 单价（由 mrp 文本解析）
    pub fn unit_price(&self) -> f64 {
        parse_amount(&self.part.mrp)
    }

    /// 行金额 = 单价 × 数量
    pub fn line_amount(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

// ==========================================
// QuotationTotals - 报价汇总
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationTotals {
    pub line_count: usize,     // 报价行数
    pub total_quantity: u64,   // 总数量
    pub subtotal: f64,         // 小计 = Σ(mrp × 数量)
    pub discount_pct: f64,     // 折扣百分比 [0, 100]
    pub discount_amount: f64,  // 折扣金额 = 小计 × 折扣 / 100
    pub total: f64,            // 合计 = 小计 - 折扣金额
}

/// 解析金额文本
///
/// # 规则
/// - 仅保留数字、'.'、'-'，其余字符（货币符号、千分位、空白）全部剔除
/// - 剩余文本无法解析为数值时按 0 处理
///
/// # 示例
/// - "₹1,250.50" → 1250.5
/// - "N/A" → 0
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
