use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::game::config::GameConfig;
use crate::game::discard_policy::DiscardLastDrawn;
use crate::error::GameError;
use crate::game::game_engine::{GameEngine, StepResult};
use crate::game::report::SilentReporter;

fn to_py_err(e: GameError) -> PyErr {
    match e {
        GameError::InvalidPosition { .. } | GameError::InvalidPlayer => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

/// Python 绑定的游戏引擎
#[pyclass]
pub struct PyGameEngine {
    inner: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// 创建新的游戏引擎（洗牌并发牌）
    ///
    /// # 参数
    ///
    /// - `seed`: 洗牌种子（可选，None 表示随机）
    #[new]
    #[pyo3(signature = (seed=None))]
    pub fn new(seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig { seed, ..GameConfig::default() };
        let inner = GameEngine::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// 使用默认策略推进一步，返回事件类型
    /// ("drew", "discarded", "won", "exhausted")
    pub fn step(&mut self) -> PyResult<&'static str> {
        let result = self
            .inner
            .step(&mut DiscardLastDrawn, &mut SilentReporter)
            .map_err(to_py_err)?;
        Ok(match result {
            StepResult::Drew { .. } => "drew",
            StepResult::Discarded { .. } => "discarded",
            StepResult::Won { .. } => "won",
            StepResult::Exhausted => "exhausted",
        })
    }

    /// 按位置出牌（当前玩家已摸牌时）
    pub fn discard(&mut self, index: usize) -> PyResult<&'static str> {
        let result = self.inner.handle_discard(index).map_err(to_py_err)?;
        Ok(match result {
            StepResult::Won { .. } => "won",
            _ => "discarded",
        })
    }

    /// 运行到终局，返回胡牌玩家 ID（流局为 None）
    pub fn run(&mut self) -> PyResult<Option<u8>> {
        let result = self.inner.play(&mut SilentReporter).map_err(to_py_err)?;
        Ok(result.winner())
    }

    /// 当前玩家 ID
    pub fn current_player(&self) -> u8 {
        self.inner.state.current_player
    }

    /// 牌墙剩余张数
    pub fn wall_remaining(&self) -> usize {
        self.inner.wall.remaining_count()
    }

    /// 是否已终局
    pub fn is_game_over(&self) -> bool {
        self.inner.state.is_game_over()
    }

    /// 玩家手牌（种类索引，已排序）
    pub fn hand(&self, player_id: u8) -> PyResult<Vec<usize>> {
        let player = self
            .inner
            .state
            .player_ref(player_id)
            .ok_or_else(|| to_py_err(GameError::InvalidPlayer))?;
        Ok(player.hand.tiles().iter().map(|t| t.to_index()).collect())
    }

    /// 玩家弃牌（种类索引，按打出顺序）
    pub fn discarded(&self, player_id: u8) -> PyResult<Vec<usize>> {
        let player = self
            .inner
            .state
            .player_ref(player_id)
            .ok_or_else(|| to_py_err(GameError::InvalidPlayer))?;
        Ok(player.hand.discarded().iter().map(|t| t.to_index()).collect())
    }
}
