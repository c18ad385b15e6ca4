use crate::error::AppError;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// 上位`prefix`ビットが立ったIPv4ネットマスクを返す。
/// prefix が 0 の場合は 0、32を超える値は 32 として扱う。
pub fn mask(prefix: u8) -> u32 {
    let host_bits = 32 - u32::from(prefix.min(32));
    u32::MAX.checked_shl(host_bits).unwrap_or(0)
}

/// baseから始まるprefix長のブロックが含む最後のアドレス
pub fn last_address(base: u32, prefix: u8) -> u32 {
    base | !mask(prefix)
}

/// cursorから始まりendを超えない最大のIPv4 CIDRプレフィックス長(≤ 32)を返す。
/// /32 から1段ずつブロックを広げ、cursorの整列が崩れるか
/// endを超える直前のサイズで止める。
pub fn largest_ipv4_block(cursor: u32, end: u32) -> u8 {
    debug_assert!(cursor <= end, "cursor must be <= end");

    let mut prefix: u8 = 32;
    while prefix > 0 {
        let candidate = prefix - 1;
        let aligned = cursor & !mask(candidate) == 0;
        if !aligned || last_address(cursor, candidate) > end {
            break;
        }
        prefix = candidate;
    }
    prefix
}

/// IPv4の範囲[`start`, `end`]を左から貪欲にCIDRの最小セットへ分割する。
pub fn ipv4_range_to_cidrs(start: u32, end: u32) -> Result<Vec<Ipv4Net>, AppError> {
    if start > end {
        return Err(AppError::InvalidRange {
            start: Ipv4Addr::from(start),
            end: Ipv4Addr::from(end),
        });
    }

    let mut cidrs = Vec::new();
    let mut cursor = start;

    loop {
        let prefix = largest_ipv4_block(cursor, end);
        cidrs.push(Ipv4Net::new(Ipv4Addr::from(cursor), prefix)?);

        let last = last_address(cursor, prefix);
        if last == end {
            break;
        }

        // last < end なので桁あふれは起きない
        debug_assert!(last < end);
        cursor = last + 1;
    }

    Ok(cidrs)
}

/// 開始・終了アドレスからCIDR列を求める
pub fn convert(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<Ipv4Net>, AppError> {
    ipv4_range_to_cidrs(u32::from(start), u32::from(end))
}
