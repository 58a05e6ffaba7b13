use crate::game::player::Player;
use crate::tile::win_check::Decomposition;
use crate::tile::Tile;
use std::fmt;

/// 对局事件（只用于输出，不会影响游戏状态）
///
/// 玩家编号在显示时从 1 开始
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// 发牌完成，开始对局
    Started { wall_remaining: usize },
    /// 玩家摸牌
    Drew { player_id: u8, tile: Tile },
    /// 摸牌后的牌局状态（详细模式）
    Snapshot {
        wall_remaining: usize,
        player_id: u8,
        hand: Vec<Tile>,
        discarded: Vec<Tile>,
    },
    /// 玩家出牌
    Discarded { player_id: u8, tile: Tile },
    /// 玩家胡牌
    Won {
        player_id: u8,
        hand: Vec<Tile>,
        decomposition: Decomposition,
    },
    /// 牌墙摸完，流局
    Exhausted,
}

fn join_tiles(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Started { wall_remaining } => {
                write!(f, "麻将游戏开始！墙牌剩余 {} 张", wall_remaining)
            }
            GameEvent::Drew { player_id, tile } => {
                writeln!(f, "\n--- 玩家{}的回合 ---", Player::seat_number(*player_id))?;
                write!(f, "玩家{}摸到: {}", Player::seat_number(*player_id), tile)
            }
            GameEvent::Snapshot { wall_remaining, player_id, hand, discarded } => {
                writeln!(f, "当前墙牌数量: {}", wall_remaining)?;
                writeln!(f, "玩家{}的手牌: {}", Player::seat_number(*player_id), join_tiles(hand))?;
                write!(f, "弃牌堆: {}", join_tiles(discarded))
            }
            GameEvent::Discarded { player_id, tile } => {
                write!(f, "玩家{}打出: {}", Player::seat_number(*player_id), tile)
            }
            GameEvent::Won { player_id, hand, decomposition } => {
                writeln!(f, "\n玩家{}胡牌了！游戏结束！", Player::seat_number(*player_id))?;
                writeln!(f, "胡牌手牌: {}", join_tiles(hand))?;
                write!(f, "将: {} {}", decomposition.pair, decomposition.pair)?;
                for meld in &decomposition.melds {
                    write!(f, " {}", meld)?;
                }
                Ok(())
            }
            GameEvent::Exhausted => write!(f, "墙牌已摸完，流局！"),
        }
    }
}

/// 对局输出 trait
pub trait GameReporter {
    /// 接收一个对局事件
    fn report(&mut self, event: &GameEvent);
}

/// 控制台输出
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl GameReporter for ConsoleReporter {
    fn report(&mut self, event: &GameEvent) {
        println!("{}", event);
    }
}

/// 丢弃所有事件（测试、基准）
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl GameReporter for SilentReporter {
    fn report(&mut self, _event: &GameEvent) {}
}

/// 记录所有事件，用于断言
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<GameEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameReporter for RecordingReporter {
    fn report(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<R: GameReporter + ?Sized> GameReporter for &mut R {
    fn report(&mut self, event: &GameEvent) {
        (**self).report(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::win_check::Meld;
    use crate::tile::{Dragon, Suit};
    use smallvec::smallvec;

    #[test]
    fn test_event_display() {
        let drew = GameEvent::Drew { player_id: 0, tile: Tile::Wan(5) };
        assert!(drew.to_string().ends_with("玩家1摸到: 5万"));

        let discarded = GameEvent::Discarded { player_id: 3, tile: Tile::Dragon(Dragon::Green) };
        assert_eq!(discarded.to_string(), "玩家4打出: 发箭");

        assert_eq!(GameEvent::Exhausted.to_string(), "墙牌已摸完，流局！");
    }

    #[test]
    fn test_won_display_names_player_and_melds() {
        let event = GameEvent::Won {
            player_id: 1,
            hand: vec![Tile::Wan(1), Tile::Wan(1)],
            decomposition: Decomposition {
                pair: Tile::Wan(1),
                melds: smallvec![Meld::Sequence { suit: Suit::Tong, start: 2 }],
            },
        };
        let text = event.to_string();
        assert!(text.contains("玩家2胡牌了"));
        assert!(text.contains("[2筒 3筒 4筒]"));
    }

    #[test]
    fn test_recording_reporter() {
        fn emit<R: GameReporter>(mut reporter: R) {
            reporter.report(&GameEvent::Exhausted);
        }

        let mut recorder = RecordingReporter::new();
        emit(&mut recorder);
        emit(&mut recorder);
        assert_eq!(recorder.events, vec![GameEvent::Exhausted, GameEvent::Exhausted]);
    }
}
