use chrono::Local;
use clap::{CommandFactory, Parser};
use range_radar::{
    cli::Cli,
    commands::handle_range::run_range,
    common::{OutputFormat, debug_log},
    error::AppError,
};
use std::time::Instant;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Cli::parse();
    run(args).await
}

/// アプリケーションのメインロジック
async fn run(args: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let started = Instant::now();
    let now = Local::now().naive_local();

    match run_range(&args, &now).await {
        Ok(Some(path)) => debug_log(format!("Output file: {}", path.display())),
        Ok(None) => {}
        // 入力エラーは使い方を表示して終了コード1
        Err(e) if e.is_input_error() => exit_with_usage(&e),
        // 書き込み失敗は報告のみ
        Err(e) => eprintln!(
            "Error writing {} output to file: {}",
            OutputFormat::from_str(&args.output).as_str(),
            e
        ),
    }

    println!(
        "Took {} seconds to complete.",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn exit_with_usage(e: &AppError) -> ! {
    eprintln!("Error: {}", e);
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(1);
}
