/// 游戏逻辑模块
///
/// 包含游戏状态、玩家、出牌策略、输出和回合控制

pub mod constants;
pub mod config;
pub mod state;
pub mod player;
pub mod discard_policy;
pub mod report;
pub mod ready;
pub mod game_engine;
