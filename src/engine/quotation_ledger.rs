// ==========================================
// 配件目录报价系统 - 报价台账
// ==========================================
// 职责: 报价行增删改、全局折扣、汇总核算
// 红线: 所有操作同步且全函数，非法输入一律钳制或忽略，不返回错误
// ==========================================

use crate::domain::part::PartRecord;
use crate::domain::quotation::{QuotationLine, QuotationTotals};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// QuotationLedger - 报价台账
// ==========================================
// 按加入顺序保存报价行，item_no 唯一
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLedger {
    lines: Vec<QuotationLine>,
    discount_pct: f64,
}

impl QuotationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入配件（数量 1）
    ///
    /// 已存在同 item_no 时不做任何修改（不是更新）
    pub fn add(&mut self, part: PartRecord) {
        if self.contains(&part.item_no) {
            debug!(item_no = %part.item_no, "配件已在报价中，忽略");
            return;
        }
        self.lines.push(QuotationLine::new(part));
    }

    /// 移除报价行（不存在时忽略）
    pub fn remove(&mut self, item_no: &str) {
        self.lines.retain(|line| line.part.item_no != item_no);
    }

    /// 设置数量
    ///
    /// # 规则
    /// - n 钳制到 >= 0
    /// - 结果为 0 等同于 remove
    /// - item_no 不存在时忽略
    pub fn set_quantity(&mut self, item_no: &str, n: i64) {
        let quantity = n.clamp(0, i64::from(u32::MAX)) as u32;
        if quantity == 0 {
            self.remove(item_no);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.part.item_no == item_no) {
            line.quantity = quantity;
        }
    }

    /// 清空报价，折扣归零
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_pct = 0.0;
    }

    /// 设置折扣百分比（钳制到 [0, 100]，NaN 视为 0）
    pub fn set_discount(&mut self, pct: f64) {
        self.discount_pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
    }

    pub fn discount_pct(&self) -> f64 {
        self.discount_pct
    }

    pub fn contains(&self, item_no: &str) -> bool {
        self.lines.iter().any(|l| l.part.item_no == item_no)
    }

    pub fn line(&self, item_no: &str) -> Option<&QuotationLine> {
        self.lines.iter().find(|l| l.part.item_no == item_no)
    }

    pub fn lines(&self) -> &[QuotationLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 汇总核算
    ///
    /// - subtotal = Σ(mrp × 数量)
    /// - discount_amount = subtotal × 折扣 / 100
    /// - total = subtotal - discount_amount
    pub fn totals(&self) -> QuotationTotals {
        let subtotal: f64 = self.lines.iter().map(QuotationLine::line_amount).sum();
        let discount_amount = subtotal * (self.discount_pct / 100.0);

        QuotationTotals {
            line_count: self.lines.len(),
            total_quantity: self.lines.iter().map(|l| u64::from(l.quantity)).sum(),
            subtotal,
            discount_pct: self.discount_pct,
            discount_amount,
            total: subtotal - discount_amount,
        }
    }
}
