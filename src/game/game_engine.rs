use crate::error::GameError;
use crate::game::config::GameConfig;
use crate::game::constants::{HAND_SIZE, NUM_PLAYERS};
use crate::game::discard_policy::{DiscardLastDrawn, DiscardPolicy};
use crate::game::report::{GameEvent, GameReporter};
use crate::game::state::{DiscardRecord, GameState, TurnPhase};
use crate::tile::win_check::{self, Decomposition};
use crate::tile::{Tile, Wall};

/// 终局结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// 有玩家胡牌
    Won {
        player_id: u8,
        decomposition: Decomposition,
    },
    /// 牌墙摸完，无人胡牌
    Exhausted,
}

/// 游戏结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// 终局结果
    pub outcome: GameOutcome,
    /// 发牌后的摸牌次数
    pub draws: u32,
    /// 摸牌轮数（4 次摸牌为一轮，不足一轮按一轮计）
    pub rounds: u32,
}

impl GameResult {
    /// 胡牌玩家（如果有）
    pub fn winner(&self) -> Option<u8> {
        match self.outcome {
            GameOutcome::Won { player_id, .. } => Some(player_id),
            GameOutcome::Exhausted => None,
        }
    }
}

/// 单步推进的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// 摸到一张牌
    Drew { player_id: u8, tile: Tile },
    /// 打出一张牌，轮到下一位
    Discarded { player_id: u8, tile: Tile, next_player: u8 },
    /// 胡牌（终局）
    Won { player_id: u8, decomposition: Decomposition },
    /// 牌墙已空（终局）
    Exhausted,
}

/// 游戏引擎
///
/// 独占牌墙和所有玩家的手牌，按 摸牌 → 胡牌判定 → 出牌 → 轮转 的顺序推进
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// 游戏状态
    pub state: GameState,
    /// 牌墙
    pub wall: Wall,
    config: GameConfig,
    draws: u32,
    winning: Option<Decomposition>,
}

impl GameEngine {
    /// 创建新的游戏引擎：洗牌并发牌
    ///
    /// 配置中有种子时结果可复现
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let wall = match config.seed {
            Some(seed) => Wall::shuffled_from_seed(seed),
            None => {
                let mut wall = Wall::new();
                wall.shuffle();
                wall
            }
        };
        Self::with_wall(wall, config)
    }

    /// 使用给定的牌墙创建引擎并发牌
    pub fn with_wall(wall: Wall, config: GameConfig) -> Result<Self, GameError> {
        let mut engine = Self {
            state: GameState::new(),
            wall,
            config,
            draws: 0,
            winning: None,
        };
        engine.deal()?;
        Ok(engine)
    }

    /// 发牌：每人 13 张，按座位轮流每次一张
    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..HAND_SIZE {
            for player in self.state.players.iter_mut() {
                let tile = self.wall.draw().ok_or(GameError::GameOver)?;
                player.draw_tile(tile);
            }
        }
        log::debug!("发牌完成，牌墙剩余 {} 张", self.wall.remaining_count());
        Ok(())
    }

    /// 配置
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 发牌后的摸牌次数
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// 处理摸牌（`AwaitingDraw` → `AwaitingDiscard`）
    ///
    /// 牌墙为空时进入流局
    pub fn handle_draw(&mut self) -> Result<StepResult, GameError> {
        let player_id = match self.state.phase {
            TurnPhase::AwaitingDraw(p) => p,
            phase if phase.is_terminal() => return Err(GameError::GameOver),
            _ => return Err(GameError::InvalidPhase),
        };

        let tile = match self.wall.draw() {
            Some(tile) => tile,
            None => {
                log::debug!("牌墙已空，流局");
                self.state.phase = TurnPhase::Drawn;
                return Ok(StepResult::Exhausted);
            }
        };

        self.state.players[player_id as usize].draw_tile(tile);
        self.state.last_drawn = Some(tile);
        self.state.phase = TurnPhase::AwaitingDiscard(player_id);
        self.draws += 1;
        log::debug!("玩家 {} 摸到 {}，牌墙剩余 {} 张", player_id, tile, self.wall.remaining_count());

        Ok(StepResult::Drew { player_id, tile })
    }

    /// 处理出牌（`AwaitingDiscard` → `Won` 或 `AwaitingDraw`）
    ///
    /// 先对出牌前的 14 张手牌做胡牌判定，胡牌则不再出牌；
    /// 否则打出 `index` 位置的牌并轮到下一位
    pub fn handle_discard(&mut self, index: usize) -> Result<StepResult, GameError> {
        self.settle_or_discard(|_, _| index)
    }

    fn settle_or_discard<F>(&mut self, choose: F) -> Result<StepResult, GameError>
    where
        F: FnOnce(&GameState, u8) -> usize,
    {
        let player_id = match self.state.phase {
            TurnPhase::AwaitingDiscard(p) => p,
            phase if phase.is_terminal() => return Err(GameError::GameOver),
            _ => return Err(GameError::InvalidPhase),
        };

        let hand = &self.state.players[player_id as usize].hand;
        if let Some(decomposition) = win_check::decompose(hand.tiles()) {
            log::debug!("玩家 {} 胡牌，将 {}", player_id, decomposition.pair);
            self.state.phase = TurnPhase::Won(player_id);
            self.winning = Some(decomposition.clone());
            return Ok(StepResult::Won { player_id, decomposition });
        }

        let index = choose(&self.state, player_id);
        let tile = self.state.players[player_id as usize].discard_tile(index)?;

        self.state.discard_history.push(DiscardRecord {
            player_id,
            tile,
            turn: self.state.turn,
        });
        self.state.turn += 1;
        self.state.last_drawn = None;

        let next_player = GameState::next_player(player_id);
        self.state.current_player = next_player;
        self.state.phase = TurnPhase::AwaitingDraw(next_player);
        log::debug!("玩家 {} 打出 {}，轮到玩家 {}", player_id, tile, next_player);

        Ok(StepResult::Discarded { player_id, tile, next_player })
    }

    /// 推进一次状态转换，并把对应事件交给 reporter
    pub fn step<P, R>(&mut self, policy: &mut P, reporter: &mut R) -> Result<StepResult, GameError>
    where
        P: DiscardPolicy + ?Sized,
        R: GameReporter + ?Sized,
    {
        let result = match self.state.phase {
            TurnPhase::AwaitingDraw(_) => self.handle_draw()?,
            TurnPhase::AwaitingDiscard(_) => {
                self.settle_or_discard(|state, player_id| policy.choose_discard(state, player_id))?
            }
            TurnPhase::Won(_) | TurnPhase::Drawn => return Err(GameError::GameOver),
        };

        match &result {
            StepResult::Drew { player_id, tile } => {
                reporter.report(&GameEvent::Drew { player_id: *player_id, tile: *tile });
                if self.config.verbose {
                    let player = &self.state.players[*player_id as usize];
                    reporter.report(&GameEvent::Snapshot {
                        wall_remaining: self.wall.remaining_count(),
                        player_id: *player_id,
                        hand: player.hand.tiles().to_vec(),
                        discarded: player.hand.discarded().to_vec(),
                    });
                }
            }
            StepResult::Discarded { player_id, tile, .. } => {
                reporter.report(&GameEvent::Discarded { player_id: *player_id, tile: *tile });
            }
            StepResult::Won { player_id, decomposition } => {
                reporter.report(&GameEvent::Won {
                    player_id: *player_id,
                    hand: self.state.players[*player_id as usize].hand.tiles().to_vec(),
                    decomposition: decomposition.clone(),
                });
            }
            StepResult::Exhausted => reporter.report(&GameEvent::Exhausted),
        }

        Ok(result)
    }

    /// 运行到终局
    pub fn run<P, R>(&mut self, policy: &mut P, reporter: &mut R) -> Result<GameResult, GameError>
    where
        P: DiscardPolicy + ?Sized,
        R: GameReporter + ?Sized,
    {
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        reporter.report(&GameEvent::Started {
            wall_remaining: self.wall.remaining_count(),
        });

        while !self.state.is_game_over() {
            self.step(policy, reporter)?;
        }

        self.result().ok_or(GameError::InvalidPhase)
    }

    /// 使用默认策略（打出刚摸到的牌）运行到终局
    pub fn play<R: GameReporter + ?Sized>(&mut self, reporter: &mut R) -> Result<GameResult, GameError> {
        self.run(&mut DiscardLastDrawn, reporter)
    }

    /// 终局后的结果；对局未结束时返回 `None`
    pub fn result(&self) -> Option<GameResult> {
        let outcome = match self.state.phase {
            TurnPhase::Won(player_id) => GameOutcome::Won {
                player_id,
                decomposition: self.winning.clone()?,
            },
            TurnPhase::Drawn => GameOutcome::Exhausted,
            _ => return None,
        };
        Some(GameResult {
            outcome,
            draws: self.draws,
            rounds: (self.draws + NUM_PLAYERS as u32 - 1) / NUM_PLAYERS as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::{TOTAL_TILES, WALL_AFTER_DEAL};
    use crate::tile::{Dragon, Hand, Wind};

    fn engine(seed: u64) -> GameEngine {
        GameEngine::new(GameConfig::with_seed(seed)).unwrap()
    }

    fn winning_hand() -> Hand {
        let mut tiles = vec![Tile::Wan(5), Tile::Wan(5)];
        tiles.extend([Tile::Wan(1); 3]);
        tiles.extend([Tile::Tiao(9); 3]);
        tiles.extend([Tile::Wind(Wind::East); 3]);
        tiles.extend([Tile::Dragon(Dragon::Red); 3]);
        Hand::from_tiles(tiles)
    }

    #[test]
    fn test_deal() {
        let engine = engine(1);
        assert_eq!(engine.wall.remaining_count(), WALL_AFTER_DEAL);
        assert_eq!(engine.wall.drawn_count() + engine.wall.remaining_count(), TOTAL_TILES);
        for player in &engine.state.players {
            assert_eq!(player.hand.total_count(), HAND_SIZE);
            assert!(player.hand.discarded().is_empty());
        }
        assert_eq!(engine.state.phase, TurnPhase::AwaitingDraw(0));
    }

    #[test]
    fn test_draw_then_discard() {
        let mut engine = engine(2);
        // 保证不会胡牌
        engine.state.players[0].hand = Hand::from_tiles((1..=9).map(Tile::Wan).chain([
            Tile::Tiao(1),
            Tile::Tiao(5),
            Tile::Tong(9),
            Tile::Dragon(Dragon::Green),
        ]));

        let drawn = match engine.handle_draw().unwrap() {
            StepResult::Drew { player_id, tile } => {
                assert_eq!(player_id, 0);
                tile
            }
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(engine.state.phase, TurnPhase::AwaitingDiscard(0));
        assert_eq!(engine.state.players[0].hand.total_count(), 14);
        assert_eq!(engine.state.last_drawn, Some(drawn));
        assert_eq!(engine.wall.remaining_count(), WALL_AFTER_DEAL - 1);

        // 摸牌阶段不能再摸
        assert_eq!(engine.handle_draw(), Err(GameError::InvalidPhase));

        let result = engine.handle_discard(0).unwrap();
        assert!(matches!(result, StepResult::Discarded { player_id: 0, next_player: 1, .. }));
        assert_eq!(engine.state.players[0].hand.total_count(), 13);
        assert_eq!(engine.state.players[0].hand.discarded().len(), 1);
        assert_eq!(engine.state.phase, TurnPhase::AwaitingDraw(1));
    }

    #[test]
    fn test_win_checked_before_discard() {
        let mut engine = engine(3);
        engine.state.players[2].hand = winning_hand();
        engine.state.current_player = 2;
        engine.state.phase = TurnPhase::AwaitingDiscard(2);

        let result = engine.handle_discard(0).unwrap();
        match result {
            StepResult::Won { player_id, decomposition } => {
                assert_eq!(player_id, 2);
                assert_eq!(decomposition.pair, Tile::Wan(5));
            }
            other => panic!("unexpected {:?}", other),
        }
        // 胡牌手牌保持 14 张，不再出牌
        assert_eq!(engine.state.players[2].hand.total_count(), 14);
        assert!(engine.state.players[2].hand.discarded().is_empty());
        assert_eq!(engine.state.winner(), Some(2));
        assert_eq!(engine.result().unwrap().winner(), Some(2));

        assert_eq!(engine.handle_draw(), Err(GameError::GameOver));
        assert_eq!(engine.handle_discard(0), Err(GameError::GameOver));
    }

    #[test]
    fn test_invalid_discard_position_fails_loudly() {
        let mut engine = engine(4);
        engine.state.players[0].hand = Hand::from_tiles((1..=9).map(Tile::Tong).chain([
            Tile::Wan(1),
            Tile::Wan(5),
            Tile::Tiao(9),
            Tile::Wind(Wind::West),
        ]));
        engine.handle_draw().unwrap();

        assert_eq!(
            engine.handle_discard(14),
            Err(GameError::InvalidPosition { index: 14, len: 14 })
        );
        // 状态不变，仍可正常出牌
        assert_eq!(engine.state.phase, TurnPhase::AwaitingDiscard(0));
        assert!(engine.handle_discard(13).is_ok());
    }

    #[test]
    fn test_next_player_follows_phase() {
        let mut engine = engine(7);
        engine.state.players[0].hand = Hand::from_tiles((1..=9).map(Tile::Wan).chain([
            Tile::Tiao(1),
            Tile::Tiao(5),
            Tile::Tong(9),
            Tile::Dragon(Dragon::Green),
        ]));
        engine.handle_draw().unwrap();
        // current_player 与阶段不一致时，以阶段中的玩家为准
        engine.state.current_player = 3;

        let result = engine.handle_discard(0).unwrap();
        assert!(matches!(result, StepResult::Discarded { player_id: 0, next_player: 1, .. }));
        assert_eq!(engine.state.phase, TurnPhase::AwaitingDraw(1));
        assert_eq!(engine.state.current_player, 1);
        assert_eq!(engine.state.discard_history[0].player_id, 0);
    }

    #[test]
    fn test_exhausted_wall() {
        let mut engine = engine(5);
        while engine.wall.draw().is_some() {}

        assert_eq!(engine.handle_draw(), Ok(StepResult::Exhausted));
        assert_eq!(engine.state.phase, TurnPhase::Drawn);
        assert_eq!(engine.result().unwrap().outcome, GameOutcome::Exhausted);
        assert_eq!(engine.handle_draw(), Err(GameError::GameOver));
    }

    #[test]
    fn test_result_before_end_is_none() {
        let engine = engine(6);
        assert!(engine.result().is_none());
    }
}
