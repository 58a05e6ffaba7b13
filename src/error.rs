use std::fmt;

/// 游戏引擎错误
///
/// 牌、手牌和对局引擎共用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 无效的玩家 ID
    InvalidPlayer,
    /// 出牌位置不在手牌范围内
    InvalidPosition { index: usize, len: usize },
    /// 当前阶段不允许该操作
    InvalidPhase,
    /// 游戏已结束（或牌墙不足以发牌）
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlayer => write!(f, "无效的玩家 ID"),
            GameError::InvalidPosition { index, len } => {
                write!(f, "出牌位置 {} 超出手牌范围（共 {} 张）", index, len)
            }
            GameError::InvalidPhase => write!(f, "当前阶段不允许该操作"),
            GameError::GameOver => write!(f, "游戏已结束"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidPosition { index: 20, len: 14 };
        assert_eq!(err.to_string(), "出牌位置 20 超出手牌范围（共 14 张）");
        assert_eq!(GameError::GameOver.to_string(), "游戏已结束");
    }
}
