//! 手工挑选的关卡牌组，下标从 1 开始，难度逐渐增加。
//!
//! 每一组都必须能在整除、非负中间结果的规则下算出 24，运行时不再校验；
//! 修改表格时由 `generator::tests` 中的用例兜底。

pub type Deal = [u32; 4];

/// 随机抽牌用尽尝试次数时返回的牌组：1 × 2 × 3 × 4 = 24
pub const FALLBACK_DEAL: Deal = [1, 2, 3, 4];

pub const CURATED_DEALS: [Deal; 25] = [
    // 1-5
    [12, 12, 1, 1],
    [3, 8, 2, 2],
    [4, 6, 1, 1],
    [10, 10, 4, 1],
    [5, 5, 5, 9],
    // 6-10
    [2, 3, 4, 1],
    [2, 2, 10, 2],
    [8, 3, 3, 7],
    [9, 9, 6, 1],
    [11, 13, 1, 1],
    // 11-20
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [2, 3, 8, 8],
    [4, 4, 10, 10],
    [1, 6, 5, 5],
    [3, 4, 10, 10],
    [2, 4, 5, 6],
    [2, 3, 4, 6],
    [3, 3, 5, 12],
    [6, 10, 12, 13],
    // 21+
    [4, 3, 7, 7],
    [1, 3, 9, 10],
    [5, 4, 7, 7],
    [6, 5, 5, 1],
    [9, 8, 3, 3],
];

/// 关卡号超出范围（包括 0）时返回 `None`。
pub fn curated_deal(level: u32) -> Option<Deal> {
    let index = usize::try_from(level).ok()?.checked_sub(1)?;
    CURATED_DEALS.get(index).copied()
}

pub fn curated_level_count() -> usize {
    CURATED_DEALS.len()
}
