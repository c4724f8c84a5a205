// ==========================================
// 配件目录报价系统 - 金额格式化
// ==========================================
// 规则: 货币符号 + 印度数位分组（末三位一组，其余两位一组）+ 固定小数位
// 示例: 123456.5 → "₹1,23,456.50"
// ==========================================

use crate::config::CurrencyFormat;

/// 格式化金额
pub fn format_amount(value: f64, format: &CurrencyFormat) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let decimals = format.decimals as usize;
    let fixed = format!("{:.*}", decimals, value.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    // 四舍五入后为零时不显示负号
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&group_indian(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
