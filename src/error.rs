use std::{io, net::Ipv4Addr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // "<start>-<end>" の形になっていない
    #[error("Invalid IP range format: {0}")]
    InvalidFormat(String),

    // IPv4アドレスとして解釈できないトークン
    #[error("Invalid IP address in range: {0}")]
    InvalidAddress(String),

    // 開始アドレスが終了アドレスより大きい
    #[error("Invalid IP range: start {start} is greater than end {end}")]
    InvalidRange { start: Ipv4Addr, end: Ipv4Addr },

    // IOまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // JSONのシリアライズ・デシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // CSVの読み書き失敗
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // プレフィックス長が0-32の範囲外
    // largest_ipv4_block は常に0-32を返すのでフェイルセーフ
    #[error("Prefix length error: {0}")]
    PrefixLen(#[from] ipnet::PrefixLenError),

    // その他、文字列メッセージだけを格納した汎用エラー
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// 入力の範囲文字列に起因するエラーかどうか
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidFormat(_) | AppError::InvalidAddress(_) | AppError::InvalidRange { .. }
        )
    }
}
