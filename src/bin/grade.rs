//! gradiator-grade - 命令行单次 AI 评分
//!
//! 读取题目文件（图片或 PDF）与学生解答图片，调用评分服务后以 JSON 输出结果。
//! 失败时输出 `{"error": ..., "raw_response": ...}` 并以非零状态码退出。

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use gradiator::config::GraderConfig;
use gradiator::services::grading::{GeminiGrader, Grader};

#[derive(Parser)]
#[command(name = "gradiator-grade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Grade a homework solution with the Gemini API", long_about = None)]
struct Cli {
    /// Task file (image or PDF)
    #[arg(short, long)]
    task: PathBuf,

    /// Student solution image
    #[arg(short, long)]
    solution: PathBuf,

    /// Grading criteria text
    #[arg(short, long, conflicts_with = "criteria_file")]
    criteria: Option<String>,

    /// Read grading criteria from a file
    #[arg(long)]
    criteria_file: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    model: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_error(error: impl Into<String>) -> ExitCode {
    let body = serde_json::json!({ "error": error.into() });
    println!("{body:#}");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let criteria = match (&cli.criteria, &cli.criteria_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                return print_error(format!(
                    "Failed to read criteria file {}: {e}",
                    path.display()
                ));
            }
        },
        (None, None) => return print_error("Either --criteria or --criteria-file is required"),
    };

    let config = GraderConfig {
        api_key: cli.api_key,
        model: cli.model,
        timeout_secs: cli.timeout,
        ..GraderConfig::default()
    };

    let grader = match GeminiGrader::from_config(&config) {
        Ok(grader) => grader,
        Err(e) => return print_error(e.format_simple()),
    };

    match grader.grade(&cli.task, &cli.solution, &criteria).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => print_error(e.to_string()),
        },
        Err(failure) => {
            match serde_json::to_string_pretty(&failure) {
                Ok(json) => println!("{json}"),
                Err(_) => println!("{}", failure.error),
            }
            ExitCode::FAILURE
        }
    }
}
