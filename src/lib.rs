/// 四人麻将对局模拟
///
/// 牌墙、发牌、摸打循环，核心是胡牌判定（1 个对子 + 4 个顺子/刻子）

pub mod error;
pub mod tile;
pub mod game;

// 重新导出常用类型
pub use tile::{Tile, Suit, Wind, Dragon, Wall, Hand};
pub use tile::win_check::{is_complete, decompose, forms_melds, Decomposition, Meld, WinChecker};
pub use game::config::GameConfig;
pub use game::state::{GameState, TurnPhase, DiscardRecord};
pub use game::player::Player;
pub use game::discard_policy::{DiscardPolicy, DiscardLastDrawn, FnDiscardPolicy};
pub use game::report::{GameEvent, GameReporter, ConsoleReporter, SilentReporter, RecordingReporter};
pub use game::ready::ReadyChecker;
pub use error::GameError;
pub use game::game_engine::{GameEngine, GameOutcome, GameResult, StepResult};

// Python 绑定模块
#[cfg(feature = "python")]
pub mod python;
