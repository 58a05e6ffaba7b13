use super::{Suit, Tile};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// 每种牌的数量表（按 `Tile::to_index` 索引）
///
/// 判定前先把牌转换为数量表，相当于排序后按值分组，之后的搜索只看数量，
/// 与输入顺序无关。计数不设上限（`forms_melds` 接受任意张数）
pub type TileCounts = [usize; Tile::KIND_COUNT];

/// 胡牌时的手牌张数
pub const COMPLETE_HAND_SIZE: usize = 14;

/// 牌组（顺子或刻子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Meld {
    /// 顺子（同一数牌花色的连续三张）
    Sequence { suit: Suit, start: u8 },
    /// 刻子（三张相同牌）
    Triplet { tile: Tile },
}

impl Meld {
    /// 牌组包含的牌（按牌序）
    pub fn tiles(&self) -> SmallVec<[Tile; 3]> {
        match *self {
            Meld::Triplet { tile } => SmallVec::from_buf([tile; 3]),
            Meld::Sequence { suit, start } => (start..start + 3)
                .filter_map(|rank| Tile::new(suit, rank))
                .collect(),
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.tiles().iter().map(|t| t.to_string()).collect();
        write!(f, "[{}]", labels.join(" "))
    }
}

/// 胡牌拆解结果：1 个对子 + 4 个牌组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// 对子（将牌）
    pub pair: Tile,
    /// 顺子/刻子，按拆出的顺序（从小到大）
    pub melds: SmallVec<[Meld; 4]>,
}

/// 把一组牌转换为数量表
///
/// 含有非法牌（点数越界）时返回 `None`
pub fn tile_counts(tiles: &[Tile]) -> Option<TileCounts> {
    let mut counts = [0usize; Tile::KIND_COUNT];
    for tile in tiles {
        if !tile.is_valid() {
            return None;
        }
        counts[tile.to_index()] += 1;
    }
    Some(counts)
}

/// 判定 14 张牌是否胡牌（1 个对子 + 4 个顺子/刻子）
///
/// 牌数不是 14 张时返回 `false`，不会 panic。纯函数，可在任意线程调用。
pub fn is_complete(tiles: &[Tile]) -> bool {
    decompose(tiles).is_some()
}

/// 拆解 14 张牌，返回找到的第一种拆法
///
/// # 算法
///
/// 1. 转换为数量表
/// 2. 依次尝试每一种数量 >= 2 的牌作为对子（去掉两张）
/// 3. 对剩余 12 张递归回溯，拆成 4 个牌组
pub fn decompose(tiles: &[Tile]) -> Option<Decomposition> {
    if tiles.len() != COMPLETE_HAND_SIZE {
        return None;
    }
    let counts = tile_counts(tiles)?;
    decompose_counts(&counts)
}

/// 判定一组牌（张数为 3 的倍数）能否全部拆成顺子/刻子
///
/// 空集合返回 `true`
pub fn forms_melds(tiles: &[Tile]) -> bool {
    if tiles.len() % 3 != 0 {
        return false;
    }
    match tile_counts(tiles) {
        Some(counts) => find_melds(&counts).is_some(),
        None => false,
    }
}

fn decompose_counts(counts: &TileCounts) -> Option<Decomposition> {
    for (index, &count) in counts.iter().enumerate() {
        if count < 2 {
            continue;
        }
        let mut rest = *counts;
        rest[index] -= 2;

        let pair = Tile::from_index(index)?;
        log::trace!("尝试对子 {}", pair);
        if let Some(melds) = find_melds(&rest) {
            return Some(Decomposition { pair, melds });
        }
    }
    None
}

/// 递归查找顺子/刻子组合
///
/// 总是从最小的牌开始：它要么组成刻子，要么作为顺子的第一张。两条分支都会尝试，
/// 每次递归都在数量表的副本上进行
fn find_melds(counts: &TileCounts) -> Option<SmallVec<[Meld; 4]>> {
    let lowest = match counts.iter().position(|&c| c > 0) {
        Some(index) => index,
        None => return Some(SmallVec::new()),
    };
    let tile = Tile::from_index(lowest)?;

    // 刻子
    if counts[lowest] >= 3 {
        let mut rest = *counts;
        rest[lowest] -= 3;
        if let Some(mut melds) = find_melds(&rest) {
            melds.insert(0, Meld::Triplet { tile });
            return Some(melds);
        }
    }

    // 顺子（字牌没有）
    if let Some((second, third)) = sequence_successors(tile) {
        if counts[second] > 0 && counts[third] > 0 {
            let mut rest = *counts;
            rest[lowest] -= 1;
            rest[second] -= 1;
            rest[third] -= 1;
            if let Some(mut melds) = find_melds(&rest) {
                melds.insert(0, Meld::Sequence { suit: tile.suit(), start: tile.rank() });
                return Some(melds);
            }
        }
    }

    None
}

/// 以 `tile` 开头的顺子的后两张牌的索引
fn sequence_successors(tile: Tile) -> Option<(usize, usize)> {
    if !tile.suit().is_numbered() || tile.rank() + 2 > Tile::MAX_RANK {
        return None;
    }
    let index = tile.to_index();
    Some((index + 1, index + 2))
}

/// 胡牌判定器
///
/// 在 `decompose` 外包一层结果缓存，适合对大量相近手牌反复判定（如听牌计算）。
/// 缓存只影响速度，不影响结果
pub struct WinChecker {
    /// 结果缓存（以数量表为键）
    result_cache: HashMap<TileCounts, Option<Decomposition>>,
    /// 最大缓存大小（超过后清空缓存）
    max_cache_size: usize,
}

impl WinChecker {
    /// 创建新的胡牌判定器
    pub fn new() -> Self {
        Self::with_cache_size(1000)
    }

    /// 创建新的胡牌判定器（自定义缓存大小）
    pub fn with_cache_size(max_cache_size: usize) -> Self {
        Self {
            result_cache: HashMap::new(),
            max_cache_size,
        }
    }

    /// 判定并返回拆解结果
    pub fn check(&mut self, tiles: &[Tile]) -> Option<Decomposition> {
        if tiles.len() != COMPLETE_HAND_SIZE {
            return None;
        }
        let counts = tile_counts(tiles)?;

        if let Some(cached) = self.result_cache.get(&counts) {
            return cached.clone();
        }

        let result = decompose_counts(&counts);
        if self.result_cache.len() >= self.max_cache_size {
            self.result_cache.clear();
        }
        if self.max_cache_size > 0 {
            self.result_cache.insert(counts, result.clone());
        }
        result
    }

    /// 判定是否胡牌
    #[inline]
    pub fn is_complete(&mut self, tiles: &[Tile]) -> bool {
        self.check(tiles).is_some()
    }

    /// 当前缓存条目数
    pub fn cache_len(&self) -> usize {
        self.result_cache.len()
    }
}

impl Default for WinChecker {
    fn default() -> Self {
        Self::new()
    }
}
