//! "<開始IP>-<終了IP>" 形式の範囲文字列を扱うユーティリティ。
use crate::error::AppError;
use crate::ipv4_utils::convert;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// 範囲の区切り文字
pub const RANGE_SEPARATOR: char = '-';

/// 範囲文字列を開始・終了アドレスに分解する。
/// 区切りで2つに分かれない場合はInvalidFormat、
/// アドレスとして読めない場合はInvalidAddressを返す。
pub fn parse_ip_range(text: &str) -> Result<(Ipv4Addr, Ipv4Addr), AppError> {
    let tokens: Vec<&str> = text.split(RANGE_SEPARATOR).collect();
    let [start_str, end_str] = tokens.as_slice() else {
        return Err(AppError::InvalidFormat(text.to_string()));
    };

    let start = parse_address(start_str)?;
    let end = parse_address(end_str)?;
    Ok((start, end))
}

fn parse_address(token: &str) -> Result<Ipv4Addr, AppError> {
    token
        .parse::<Ipv4Addr>()
        .map_err(|_| AppError::InvalidAddress(token.to_string()))
}

/// 範囲文字列を解析してそのままCIDR列へ展開
pub fn range_str_to_cidrs(text: &str) -> Result<Vec<Ipv4Net>, AppError> {
    let (start, end) = parse_ip_range(text)?;
    convert(start, end)
}
