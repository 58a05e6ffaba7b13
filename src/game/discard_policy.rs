use crate::game::state::GameState;

/// 出牌策略 trait
///
/// 根据游戏状态返回当前玩家要打出的牌在手牌中的位置。
/// 引擎会校验位置，越界时返回 `GameError::InvalidPosition`
pub trait DiscardPolicy {
    /// 选择出牌位置
    ///
    /// # 参数
    ///
    /// - `state`: 当前游戏状态（当前玩家手牌为 14 张）
    /// - `player_id`: 玩家 ID
    fn choose_discard(&mut self, state: &GameState, player_id: u8) -> usize;
}

/// 默认策略：打出刚摸到的牌
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLastDrawn;

impl DiscardPolicy for DiscardLastDrawn {
    fn choose_discard(&mut self, state: &GameState, player_id: u8) -> usize {
        let hand = &state.players[player_id as usize].hand;
        state
            .last_drawn
            .and_then(|tile| hand.position(tile))
            // 没有摸牌记录时打最后一张
            .unwrap_or_else(|| hand.total_count().saturating_sub(1))
    }
}

/// 函数式出牌策略适配器
///
/// 将闭包转换为 DiscardPolicy trait
pub struct FnDiscardPolicy<F> {
    callback: F,
}

impl<F> FnDiscardPolicy<F>
where
    F: FnMut(&GameState, u8) -> usize,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DiscardPolicy for FnDiscardPolicy<F>
where
    F: FnMut(&GameState, u8) -> usize,
{
    fn choose_discard(&mut self, state: &GameState, player_id: u8) -> usize {
        (self.callback)(state, player_id)
    }
}
