use crate::error::GameError;
use crate::tile::{Hand, Tile};

/// 玩家状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 玩家 ID（0-3）
    pub id: u8,
    /// 手牌（含弃牌记录）
    pub hand: Hand,
}

impl Player {
    /// 创建新玩家
    pub fn new(id: u8) -> Self {
        Self {
            id,
            hand: Hand::new(),
        }
    }

    /// 显示用的编号（从 1 开始）
    pub fn seat_number(player_id: u8) -> u8 {
        player_id + 1
    }

    /// 摸一张牌到手牌，返回它在手牌中的位置
    pub fn draw_tile(&mut self, tile: Tile) -> usize {
        self.hand.add_tile(tile)
    }

    /// 按位置打出一张牌
    pub fn discard_tile(&mut self, index: usize) -> Result<Tile, GameError> {
        self.hand.discard(index)
    }
}
