// ==========================================
// 配件目录报价系统 - 模糊匹配评分
// ==========================================
// 职责: 近似子串编辑距离（插入/删除/替换）+ 子序列匹配质量
// 输入: 已转小写的字符序列
// ==========================================

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// 近似子串编辑距离
///
/// 在 text 的任意位置寻找与 pattern 编辑距离最小的子串。
///
/// # 参数
/// - pattern: 查询字符
/// - text: 字段字符
/// - max_errors: 允许的最大编辑次数
///
/// # 返回
/// - Some(d): 最小编辑距离 d <= max_errors
/// - None: 超出容错
pub fn approximate_substring_distance(
    pattern: &[char],
    text: &[char],
    max_errors: usize,
) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // column[i] = pattern[..i] 与以当前文本位置结尾的子串的最小距离
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = column[m];

    for &t in text {
        let mut diagonal = column[0]; // 文本起点任意，首行恒为 0
        for i in 1..=m {
            let substitution = diagonal + usize::from(pattern[i - 1] != t);
            let deletion = column[i] + 1;
            let insertion = column[i - 1] + 1;
            diagonal = column[i];
            column[i] = substitution.min(deletion).min(insertion);
        }
        best = best.min(column[m]);
        if best == 0 {
            break;
        }
    }

    (best <= max_errors).then_some(best)
}

// ==========================================
// SubsequenceScorer - 子序列匹配质量
// ==========================================
// 用途: 同等编辑距离下的排序依据（连续命中、词首命中得分更高）
pub struct SubsequenceScorer {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl SubsequenceScorer {
    pub fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy),
            buf: Vec::new(),
        }
    }

    /// 子序列得分，未命中为 0
    pub fn score(&mut self, haystack: &str) -> u32 {
        self.buf.clear();
        let haystack = Utf32Str::new(haystack, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher).unwrap_or(0)
    }
}
