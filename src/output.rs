use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output_common::{make_output_filename, render_csv, render_json, render_terminal};
use chrono::NaiveDateTime;
use ipnet::Ipv4Net;
use std::path::{Path, PathBuf};
use tokio::fs;

/// CIDRリストをJSONまたはCSVでファイルに書き出す (既存ファイルは上書き)
pub async fn write_cidrs_to_file<P: AsRef<Path>>(
    path: P,
    cidrs: &[Ipv4Net],
    format: OutputFormat,
) -> Result<(), AppError> {
    let content = match format {
        OutputFormat::Json => render_json(cidrs)?,
        OutputFormat::Csv => render_csv(cidrs)?,
        OutputFormat::Terminal => {
            return Err(AppError::Other(
                "Terminal output cannot be written to a file".into(),
            ));
        }
    };

    fs::write(path, content).await?;
    Ok(())
}

/// 出力形式に応じてCIDRリストを書き出す。
/// ファイルに書いた場合はそのパスを返す。
pub async fn write_cidrs(
    range_str: &str,
    cidrs: &[Ipv4Net],
    format: OutputFormat,
    out_dir: &Path,
    now: &NaiveDateTime,
) -> Result<Option<PathBuf>, AppError> {
    let Some(file_name) = make_output_filename(range_str, now, format) else {
        print!("{}", render_terminal(cidrs));
        return Ok(None);
    };

    let path = out_dir.join(file_name);
    write_cidrs_to_file(&path, cidrs, format).await?;
    debug_log(format!(
        "Wrote {} CIDRs as {} to {}",
        cidrs.len(),
        format.as_str(),
        path.display()
    ));
    Ok(Some(path))
}
