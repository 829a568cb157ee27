use anyhow::{Context, Result};
use charhunter_core::{scan_and_write, ScanOutcome};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "Usage: charhunter <file_path>";

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "charhunter", version, about = "列出文本文件中的所有非 ASCII 字符")]
struct Cli {
    /// 待扫描的文本文件（UTF-8）；允许以 `-` 开头或为空，交由扫描流程判断是否存在
    #[arg(allow_hyphen_values = true, value_parser = clap::builder::OsStringValueParser::new())]
    file_path: OsString,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version 按 clap 默认方式输出
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        // 参数个数不对：打印用法后正常退出，不执行扫描
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let file_path = PathBuf::from(cli.file_path);
    info!(path = ?file_path, "starting scan");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = scan_and_write(&file_path, &mut out)
        .with_context(|| format!("scan of {} failed", file_path.display()))?;
    out.flush().context("flush stdout")?;

    match outcome {
        ScanOutcome::Missing(path) => warn!(?path, "file does not exist, nothing scanned"),
        ScanOutcome::Completed(stats) => info!(
            lines_scanned = stats.lines_scanned,
            chars_scanned = stats.chars_scanned,
            detections = stats.detections,
            "scan finished"
        ),
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免与 stdout 上的报告混在一起；默认仅输出 warn 及以上
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
