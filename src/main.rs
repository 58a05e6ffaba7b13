/// 可执行文件入口：运行一局对局并在控制台输出
///
/// 用法：`mahjong_sim [种子] [-v|--verbose]`，也可以通过 `MAHJONG_SIM_SEED` 指定种子

use mahjong_sim::{ConsoleReporter, GameConfig, GameEngine, GameOutcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = GameConfig::from_args(std::env::args().skip(1));
    if let Some(seed) = config.seed {
        println!("种子：{}", seed);
    }

    let mut engine = match GameEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("初始化失败：{}", e);
            return ExitCode::FAILURE;
        }
    };

    match engine.play(&mut ConsoleReporter) {
        Ok(result) => {
            if let GameOutcome::Won { .. } = result.outcome {
                println!("共摸牌 {} 次（{} 轮）", result.draws, result.rounds);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("对局异常结束：{}", e);
            ExitCode::FAILURE
        }
    }
}
