//! lipyantar - 레거시 데바나가리 글꼴 텍스트 -> 유니코드 변환 도구

use clap::{Parser, Subcommand};
use lipyantar::batch::convert_records;
use lipyantar::config::{load_config, ConverterConfig};
use lipyantar::{CancelToken, ConfigError, Converter};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lipyantar", version)]
struct Args {
    /// 설정 파일 (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// JSON 레코드 배열 변환
    Convert {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// 진단 보고서 출력 경로
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 레거시 문자열 하나를 변환해 표준 출력으로
    Text { legacy: String },
    /// windows-1252 레거시 텍스트 파일을 변환해 표준 출력으로
    Decode {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 설정 로드
    let config = match &args.config {
        Some(path) => load_config(path),
        None => ConverterConfig::default(),
    };

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &ConverterConfig) -> Result<(), ConfigError> {
    let converter = Converter::from_config(config)?;

    match command {
        Command::Text { legacy } => {
            println!("{}", converter.convert_text(&legacy));
        }
        Command::Decode { input } => {
            let bytes = fs::read(input)?;
            println!("{}", converter.convert_bytes(&bytes));
        }
        Command::Convert {
            input,
            output,
            report,
        } => {
            let content = fs::read_to_string(&input)?;
            let records: Vec<Value> = serde_json::from_str(&content)?;

            let result = convert_records(
                &converter,
                &records,
                &config.fields,
                config.effective_workers(),
                &CancelToken::new(),
            );

            fs::write(&output, serde_json::to_string_pretty(&result.records)?)?;

            if let Some(path) = report {
                let doc = json!({
                    "summary": result.summary,
                    "skipped": result.skipped,
                    "events": result.diagnostics,
                });
                fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
            }

            eprintln!(
                "레코드 {}개 변환 완료, 진단 {}건, 검수 대상 {}건",
                result.records.len(),
                result.summary.total(),
                result.summary.needs_audit.len()
            );
        }
    }

    Ok(())
}
