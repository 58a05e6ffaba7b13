use super::tile::Tile;
use crate::error::GameError;
use smallvec::SmallVec;

/// 手牌（Hand）
///
/// 持有的牌始终按牌序排列（摸牌后最多 14 张），另外记录该玩家打出的牌
///
/// 使用 SmallVec 优化：手牌最多 14 张，全部在栈上分配
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// 手中的牌（有序）
    tiles: SmallVec<[Tile; 14]>,
    /// 弃牌记录（只追加）
    discarded: Vec<Tile>,
}

impl Hand {
    /// 创建空手牌
    pub fn new() -> Self {
        Self::default()
    }

    /// 从若干张牌创建手牌（会自动排序）
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut hand = Self::new();
        for tile in tiles {
            hand.add_tile(tile);
        }
        hand
    }

    /// 添加一张牌，并保持牌序
    ///
    /// 插入到相同牌的最后一张之后，返回插入的位置
    pub fn add_tile(&mut self, tile: Tile) -> usize {
        let index = self.tiles.partition_point(|t| *t <= tile);
        self.tiles.insert(index, tile);
        index
    }

    /// 按位置打出一张牌，放入弃牌记录
    ///
    /// # 错误
    ///
    /// 位置越界时返回 `GameError::InvalidPosition`，手牌保持不变
    pub fn discard(&mut self, index: usize) -> Result<Tile, GameError> {
        if index >= self.tiles.len() {
            return Err(GameError::InvalidPosition {
                index,
                len: self.tiles.len(),
            });
        }
        let tile = self.tiles.remove(index);
        self.discarded.push(tile);
        Ok(tile)
    }

    /// 查找某张牌在手牌中的位置（第一张）
    pub fn position(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|t| *t == tile)
    }

    /// 查询某张牌的数量
    pub fn tile_count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// 获取总牌数
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }

    /// 手中的牌（已排序）
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// 打出过的牌（按打出顺序）
    pub fn discarded(&self) -> &[Tile] {
        &self.discarded
    }

    /// 检查手牌是否为空
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
