use crate::cli::Cli;
use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output::write_cidrs;
use crate::parse_ipv4::range_str_to_cidrs;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// 範囲指定モードのメイン処理
/// 解析に失敗した場合はファイルを作らずにエラーを返す
pub async fn run_range(args: &Cli, now: &NaiveDateTime) -> Result<Option<PathBuf>, AppError> {
    let cidrs = range_str_to_cidrs(&args.range)?;
    debug_log(format!("{} -> {} CIDR blocks", args.range, cidrs.len()));

    let format = OutputFormat::from_str(&args.output);
    write_cidrs(&args.range, &cidrs, format, &args.out_dir, now).await
}
