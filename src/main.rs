//! # 程序说明
//!
//! 24 点命令行：按关卡或随机出题、给出下一步提示、列出完整解法，
//! 以及随机抽牌并把 "有解" 或 "无解" 的结果写入 `log/24_game_log.txt` 日志。
//!
//! ## 规则
//! - 每一步从剩下的牌里取两张，用加减乘除合成一张新牌，直到只剩一张；
//! - 减法不允许出现负数，除法必须整除且除数不能为 0；
//! - 所有运算在 `f64` 中完成，与 24 的比较使用 `EPSILON` 容差。

mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
