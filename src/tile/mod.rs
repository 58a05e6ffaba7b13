/// 牌相关模块
///
/// 包含牌（Tile）、牌墙（Wall）、手牌（Hand）和胡牌判定

pub mod tile;
pub mod wall;
pub mod hand;
pub mod win_check;

// 重新导出常用类型
pub use tile::{Tile, Suit, Wind, Dragon};
pub use wall::Wall;
pub use hand::Hand;
pub use win_check::{COMPLETE_HAND_SIZE, WinChecker, Decomposition, Meld, is_complete, forms_melds, decompose};
