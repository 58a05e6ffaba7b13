use crate::game::constants::{COPIES_PER_TILE, HAND_SIZE};
use crate::tile::win_check::is_complete;
use crate::tile::{Hand, Tile};

/// 听牌判定器
pub struct ReadyChecker;

impl ReadyChecker {
    /// 13 张手牌还差哪些牌就能胡
    ///
    /// 已经在手中有 4 张的牌不会再出现，所以不计入。
    /// 手牌不是 13 张时返回空向量
    pub fn waiting_tiles(hand: &Hand) -> Vec<Tile> {
        if hand.total_count() != HAND_SIZE {
            return Vec::new();
        }

        let mut tiles: Vec<Tile> = hand.tiles().to_vec();
        let mut waiting = Vec::new();

        for candidate in Tile::all() {
            if hand.tile_count(candidate) >= COPIES_PER_TILE as usize {
                continue;
            }
            tiles.push(candidate);
            if is_complete(&tiles) {
                waiting.push(candidate);
            }
            tiles.pop();
        }

        waiting
    }

    /// 是否听牌
    pub fn is_ready(hand: &Hand) -> bool {
        !Self::waiting_tiles(hand).is_empty()
    }
}
