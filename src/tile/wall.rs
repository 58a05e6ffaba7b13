use super::tile::Tile;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 牌墙（Wall）
///
/// 存储所有 136 张牌，支持洗牌和抽牌操作
///
/// 使用 Box<[Tile]> 替代 Vec<Tile>：牌墙大小固定，只通过 `drawn_count` 缩减
#[repr(C)]
#[derive(Debug, Clone)]
pub struct Wall {
    /// 牌堆（从后往前抽取）
    tiles: Box<[Tile]>,
    /// 已抽取的牌数
    drawn_count: usize,
}

impl Wall {
    /// 创建一副完整的牌墙（136 张，未洗牌）
    ///
    /// 这是唯一创建牌的地方，只会生成合法的（花色，点数）组合
    pub fn new() -> Self {
        let mut tiles = Vec::with_capacity(Tile::TOTAL_COUNT);

        // 每种牌 4 张
        for tile in Tile::all() {
            for _ in 0..Tile::COPIES {
                tiles.push(tile);
            }
        }

        Self {
            tiles: tiles.into_boxed_slice(),
            drawn_count: 0,
        }
    }

    /// 用给定种子创建并洗好的牌墙（可复现）
    pub fn shuffled_from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut wall = Self::new();
        wall.shuffle_with(&mut rng);
        wall
    }

    /// 洗牌（使用外部传入的随机数生成器）
    ///
    /// Fisher-Yates 洗牌，时间复杂度 O(n)。只打乱尚未抽取的部分。
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let remaining = self.remaining_count();
        self.tiles[..remaining].shuffle(rng);
    }

    /// 洗牌（使用系统熵源作为种子，不可复现）
    pub fn shuffle(&mut self) {
        let mut rng = ChaCha8Rng::from_entropy();
        self.shuffle_with(&mut rng);
    }

    /// 抽取一张牌（从牌堆末尾）
    ///
    /// 时间复杂度：O(1)
    ///
    /// # Returns
    ///
    /// - `Some(Tile)`：成功抽取一张牌
    /// - `None`：牌堆已空
    pub fn draw(&mut self) -> Option<Tile> {
        if self.drawn_count >= self.tiles.len() {
            return None;
        }
        let index = self.tiles.len() - 1 - self.drawn_count;
        self.drawn_count += 1;
        Some(self.tiles[index])
    }

    /// 查询剩余牌数
    pub fn remaining_count(&self) -> usize {
        self.tiles.len().saturating_sub(self.drawn_count)
    }

    /// 检查牌堆是否为空
    pub fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }

    /// 获取已抽取的牌数
    pub fn drawn_count(&self) -> usize {
        self.drawn_count
    }

    /// 获取总牌数（应该是 136）
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }

    /// 剩余的牌（按抽取顺序的逆序，下一张在末尾）
    pub fn remaining_tiles(&self) -> &[Tile] {
        &self.tiles[..self.remaining_count()]
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}
