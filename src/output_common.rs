use crate::common::OutputFormat;
use crate::error::AppError;
use chrono::NaiveDateTime;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

/// ファイル名に埋め込むタイムスタンプの書式
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// JSON出力の1要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidrRecord {
    pub range: String,
}

/// 出力ファイル名を組み立てる: cidrs_<範囲>_<時刻>.<拡張子>
/// 時刻は呼び出し側から受け取る。Terminal の場合はNone。
pub fn make_output_filename(
    range_str: &str,
    now: &NaiveDateTime,
    format: OutputFormat,
) -> Option<String> {
    let ext = format.extension()?;
    Some(format!(
        "cidrs_{}_{}.{}",
        range_str.replace('/', "-"),
        now.format(FILENAME_TIMESTAMP_FORMAT),
        ext
    ))
}

/// 1行に1つのCIDRを並べたテキスト
pub fn render_terminal(cidrs: &[Ipv4Net]) -> String {
    cidrs.iter().map(|net| format!("{}\n", net)).collect()
}

/// {"range": "<cidr>"} の配列を1スペースのインデントで整形する
pub fn render_json(cidrs: &[Ipv4Net]) -> Result<String, AppError> {
    let records: Vec<CidrRecord> = cidrs
        .iter()
        .map(|net| CidrRecord {
            range: net.to_string(),
        })
        .collect();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(|e| AppError::Other(format!("JSON output is not UTF-8: {e}")))
}

/// ヘッダーなし・1列のCSV
pub fn render_csv(cidrs: &[Ipv4Net]) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for net in cidrs {
        wtr.write_record([net.to_string()])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV writer error: {e}")))?;
    String::from_utf8(data).map_err(|e| AppError::Other(format!("CSV output is not UTF-8: {e}")))
}

/// render_json の出力からCIDR文字列を取り出す
pub fn read_json_ranges(text: &str) -> Result<Vec<String>, AppError> {
    let records: Vec<CidrRecord> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(|r| r.range).collect())
}

/// render_csv の出力からCIDR文字列を取り出す
pub fn read_csv_ranges(text: &str) -> Result<Vec<String>, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut ranges = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(field) = record.get(0) {
            ranges.push(field.to_string());
        }
    }
    Ok(ranges)
}
