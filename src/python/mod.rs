//! Python 绑定模块
//!
//! 提供 PyO3 接口，将胡牌判定和对局引擎暴露给 Python

// 允许 PyO3 宏生成的 non-local impl 定义（这是 PyO3 的正常行为）
#![allow(non_local_definitions)]

#[cfg(feature = "python")]
pub mod game_engine;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;

#[cfg(feature = "python")]
use crate::tile::Tile;

/// 把种类索引（0-33）列表转换为牌
#[cfg(feature = "python")]
pub(crate) fn tiles_from_indices(indices: &[usize]) -> PyResult<Vec<Tile>> {
    indices
        .iter()
        .map(|&i| {
            Tile::from_index(i)
                .ok_or_else(|| PyValueError::new_err(format!("Invalid tile index: {}", i)))
        })
        .collect()
}

/// 判定 14 张牌（种类索引表示）是否胡牌
#[cfg(feature = "python")]
#[pyfunction]
fn is_complete(indices: Vec<usize>) -> PyResult<bool> {
    let tiles = tiles_from_indices(&indices)?;
    Ok(crate::tile::win_check::is_complete(&tiles))
}

/// 牌的显示名
#[cfg(feature = "python")]
#[pyfunction]
fn tile_label(index: usize) -> PyResult<String> {
    let tiles = tiles_from_indices(&[index])?;
    Ok(tiles[0].to_string())
}

/// Python 模块初始化
#[cfg(feature = "python")]
#[pymodule]
fn mahjong_sim(_py: Python, m: &PyModule) -> PyResult<()> {
    use game_engine::PyGameEngine;

    m.add_class::<PyGameEngine>()?;
    m.add_function(pyo3::wrap_pyfunction!(is_complete, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(tile_label, m)?)?;
    Ok(())
}
