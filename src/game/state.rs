use crate::game::constants::NUM_PLAYERS;
use crate::game::player::Player;
use crate::tile::Tile;

/// 回合阶段（状态机）
///
/// `AwaitingDraw(p)` → `AwaitingDiscard(p)` → `AwaitingDraw((p + 1) % 4)`，
/// 直到有人胡牌（`Won`）或牌墙摸完（`Drawn`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// 等待玩家摸牌
    AwaitingDraw(u8),
    /// 玩家已摸牌（14 张），等待判定与出牌
    AwaitingDiscard(u8),
    /// 玩家胡牌（终局）
    Won(u8),
    /// 牌墙摸完，流局（终局）
    Drawn,
}

impl TurnPhase {
    /// 是否为终局状态
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Won(_) | TurnPhase::Drawn)
    }
}

/// 弃牌记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardRecord {
    /// 弃牌玩家 ID
    pub player_id: u8,
    /// 弃的牌
    pub tile: Tile,
    /// 弃牌回合数
    pub turn: u32,
}

/// 游戏状态
#[derive(Debug, Clone)]
pub struct GameState {
    /// 玩家（4 个玩家）
    pub players: [Player; NUM_PLAYERS],
    /// 当前玩家 ID
    pub current_player: u8,
    /// 当前阶段
    pub phase: TurnPhase,
    /// 最近摸到的牌（默认出牌策略使用）
    pub last_drawn: Option<Tile>,
    /// 当前回合数（每次出牌后加一）
    pub turn: u32,
    /// 弃牌历史记录（按顺序记录所有弃牌）
    pub discard_history: Vec<DiscardRecord>,
}

impl GameState {
    /// 创建新的游戏状态
    pub fn new() -> Self {
        Self {
            players: [Player::new(0), Player::new(1), Player::new(2), Player::new(3)],
            current_player: 0,
            phase: TurnPhase::AwaitingDraw(0),
            last_drawn: None,
            turn: 0,
            discard_history: Vec::new(),
        }
    }

    /// 获取玩家（不可变引用）
    pub fn player_ref(&self, player_id: u8) -> Option<&Player> {
        self.players.get(player_id as usize)
    }

    /// `player_id` 之后的下一个玩家（轮转）
    pub fn next_player(player_id: u8) -> u8 {
        (player_id + 1) % NUM_PLAYERS as u8
    }

    /// 检查游戏是否结束
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// 胡牌玩家（如果有）
    pub fn winner(&self) -> Option<u8> {
        match self.phase {
            TurnPhase::Won(p) => Some(p),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase, TurnPhase::AwaitingDraw(0));
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert!(state.players.iter().enumerate().all(|(i, p)| p.id as usize == i));
    }

    #[test]
    fn test_next_player_wraps() {
        let mut state = GameState::new();
        let mut order = Vec::new();
        for _ in 0..6 {
            order.push(state.current_player);
            state.current_player = GameState::next_player(state.current_player);
        }
        assert_eq!(order, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(TurnPhase::Won(2).is_terminal());
        assert!(TurnPhase::Drawn.is_terminal());
        assert!(!TurnPhase::AwaitingDiscard(1).is_terminal());
    }
}
