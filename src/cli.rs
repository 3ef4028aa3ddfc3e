use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use make24::generator::{curated_level_count, CURATED_DEALS};
use make24::solver::constants::TARGET;
use make24::solver::{format_value, NO_SOLUTION_MESSAGE};
use make24::{try_get_hint, try_solve, GeneratorConfig, ProblemGenerator, Solver, Step};

pub const DEFAULT_LOG_PATH: &str = "log/24_game_log.txt";

/// 命令行可选的日志级别
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// 命令行参数；帮助文本通过 `about` / `help` 单独给出
#[derive(Parser, Debug)]
#[command(name = "make-twenty-four")]
#[command(about = "Deal, solve and hint four-card make-24 puzzles")]
#[command(version)]
pub struct CliArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value = "warn",
        global = true,
        help = "Log level (default: warn)"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    // 出题：给出关卡号时取关卡表中的牌组
    #[command(about = "Deal four cards, from the curated table when a level is given")]
    Deal {
        #[arg(long, help = "Curated level, 1-based")]
        level: Option<u32>,
    },
    // 对当前局面给出下一步提示
    #[command(about = "Show the next step for the current card values")]
    Hint {
        #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    // 列出第一条可行路径的全部步骤
    #[command(about = "Show the full first-found path for the card values")]
    Solve {
        #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    // 检查关卡表里的每一组牌都有解
    #[command(about = "List the curated deals and check each one is solvable")]
    Levels,
    // 随机抽牌并把结果追加到日志文件
    #[command(about = "Draw random hands, solve them and append the results to a log file")]
    Survey {
        #[arg(short, long, default_value_t = 10, help = "Number of hands to draw")]
        rounds: usize,
        #[arg(long, default_value = DEFAULT_LOG_PATH, help = "Log file to append to")]
        log: PathBuf,
    },
}

/// 按命令行给出的级别初始化 `env_logger`
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// 解析参数并执行子命令
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Deal { level } => deal(level),
        Command::Hint { values } => {
            let hint = try_get_hint(&values).context("Invalid card values")?;
            println!("{}", hint);
            Ok(())
        }
        Command::Solve { values } => {
            match try_solve(&values).context("Invalid card values")? {
                Some(steps) => println!("{}", render_path(&steps)),
                None => println!("{}", NO_SOLUTION_MESSAGE),
            }
            Ok(())
        }
        Command::Levels => levels(),
        Command::Survey { rounds, log } => survey(rounds, &log),
    }
}

fn deal(level: Option<u32>) -> Result<()> {
    let mut generator = ProblemGenerator::new();
    let deal = generator.generate_deal(level);
    info!("Dealt {:?} ({})", deal.numbers, deal.source);
    println!("{:?}\t({})", deal.numbers, deal.source);
    Ok(())
}

fn levels() -> Result<()> {
    let solver = Solver::default();
    let mut failed = Vec::new();

    for (index, deal) in CURATED_DEALS.iter().enumerate() {
        let level = index + 1;
        let values: Vec<f64> = deal.iter().map(|&v| f64::from(v)).collect();
        match solver.solve(&values) {
            Some(steps) => println!("{:3} {:?}\t{}", level, deal, render_path(&steps)),
            None => {
                warn!("Curated level {} {:?} is not solvable", level, deal);
                println!("{:3} {:?}\tUNSOLVABLE", level, deal);
                failed.push(level);
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} curated levels are unsolvable: {:?}",
            failed.len(),
            curated_level_count(),
            failed
        );
    }
    Ok(())
}

/// 随机抽牌、求解，并把有解或无解的结果追加到日志文件。
///
/// 这里的抽牌不经过筛选，用来观察整除规则下的有解比例。
fn survey(rounds: usize, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let mut log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let mut generator = ProblemGenerator::with_rng(rand::thread_rng(), GeneratorConfig::default())?;
    let solver = Solver::default();
    let mut solved = 0;

    for _ in 0..rounds {
        let hand = generator.draw();
        let values: Vec<f64> = hand.iter().map(|&v| f64::from(v)).collect();
        let path_found = solver.solve(&values);

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        write_entry(&mut log_file, &timestamp.to_string(), &hand, path_found.as_deref())
            .context("Failed to write log entry")?;

        let outcome = match &path_found {
            Some(steps) => {
                solved += 1;
                render_path(steps)
            }
            None => "no solution".to_string(),
        };
        println!("Processed hand: {:3?}.\t {}", hand, outcome);
    }

    info!("Survey finished: {}/{} hands solvable", solved, rounds);
    println!("{}/{} hands solvable", solved, rounds);
    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    timestamp: &str,
    hand: &[u32],
    steps: Option<&[Step]>,
) -> std::io::Result<()> {
    writeln!(out, "[{}] Cards: {:?}", timestamp, hand)?;
    match steps {
        Some(steps) => {
            writeln!(out, "Solution:")?;
            for step in steps {
                writeln!(out, "{}", step)?;
            }
        }
        None => writeln!(out, "No solution found.")?,
    }
    writeln!(out, "--------------------")
}

fn render_path(steps: &[Step]) -> String {
    if steps.is_empty() {
        return format!("{} (already solved)", format_value(TARGET));
    }
    steps
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
