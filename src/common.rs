/// デバッグ出力を有効にする環境変数
pub const DEBUG_ENV: &str = "RANGE_RADAR_DEBUG";

/// 環境変数 RANGE_RADAR_DEBUG が設定されている時だけ標準エラーへ出力する
pub fn debug_log<S: AsRef<str>>(msg: S) {
    if std::env::var_os(DEBUG_ENV).is_some() {
        eprintln!("[debug] {}", msg.as_ref());
    }
}

/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Terminal, // デフォルトは Terminal
        }
    }

    /// ファイル拡張子 (Terminal はファイルを作らない)
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OutputFormat::Terminal => None,
            OutputFormat::Json => Some("json"),
            OutputFormat::Csv => Some("csv"),
        }
    }

    /// ログやエラーメッセージで使うラベル用
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }
}
