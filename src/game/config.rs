use serde::{Deserialize, Serialize};

/// 读取种子的环境变量名
pub const SEED_ENV_VAR: &str = "MAHJONG_SIM_SEED";

/// 对局配置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// 洗牌种子（None 表示使用系统熵源，结果不可复现）
    pub seed: Option<u64>,
    /// 是否在每次摸牌后输出牌局状态
    pub verbose: bool,
}

impl GameConfig {
    /// 使用固定种子的配置
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// 从命令行参数和环境变量读取配置
    ///
    /// 第一个参数为种子，其次读取 `MAHJONG_SIM_SEED`；`-v`/`--verbose` 打开详细输出。
    /// 无法解析的种子会被忽略。
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-v" | "--verbose" => config.verbose = true,
                other => {
                    if let Ok(seed) = other.parse::<u64>() {
                        config.seed.get_or_insert(seed);
                    } else {
                        log::warn!("忽略无法识别的参数：{}", other);
                    }
                }
            }
        }
        if config.seed.is_none() {
            config.seed = std::env::var(SEED_ENV_VAR)
                .ok()
                .and_then(|value| value.trim().parse().ok());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_args() {
        let config = GameConfig::from_args(["42", "--verbose"]);
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);

        // 只取第一个种子
        let config = GameConfig::from_args(["7", "8"]);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig {
            seed: Some(9),
            verbose: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
