/// 游戏常量定义
///
/// 集中管理所有魔法数字

/// 玩家数量
pub const NUM_PLAYERS: usize = 4;

/// 起手牌数
pub const HAND_SIZE: usize = 13;

/// 摸牌后的手牌数（胡牌判定只针对这个张数）
pub const HAND_SIZE_AFTER_DRAW: usize = HAND_SIZE + 1;

const _: () = assert!(HAND_SIZE_AFTER_DRAW == crate::tile::COMPLETE_HAND_SIZE);

/// 总牌数（136 张：34 种牌各 4 张）
pub const TOTAL_TILES: usize = 136;

/// 牌的种类数（27 张数牌 + 4 风 + 3 箭）
pub const NUM_TILE_TYPES: usize = 34;

/// 每种牌的数量
pub const COPIES_PER_TILE: u8 = 4;

/// 发牌后牌墙剩余张数
pub const WALL_AFTER_DEAL: usize = TOTAL_TILES - NUM_PLAYERS * HAND_SIZE;

/// 一局最多的摸牌轮数（每轮 4 人各摸一张）
pub const MAX_DRAW_ROUNDS: usize = TOTAL_TILES / NUM_PLAYERS;
