use range_radar::error::AppError;
use range_radar::parse_ipv4::{parse_ip_range, range_str_to_cidrs};
use std::net::Ipv4Addr;

#[test]
fn parses_start_and_end() {
    let (start, end) = parse_ip_range("10.0.0.1-10.0.0.10")
        .unwrap_or_else(|e| panic!("unexpected error: {e}"));
    assert_eq!(start, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(end, Ipv4Addr::new(10, 0, 0, 10));
}

#[test]
fn wrong_token_count_is_invalid_format() {
    for input in ["not-an-ip-1.2.3.4", "10.0.0.1", "", "1.1.1.1-2.2.2.2-3.3.3.3"] {
        match parse_ip_range(input) {
            Err(AppError::InvalidFormat(s)) => assert_eq!(s, input),
            other => panic!("expected InvalidFormat for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn bad_address_is_invalid_address() {
    for (input, token) in [
        ("10.0.0.256-10.0.1.0", "10.0.0.256"),
        ("10.0.0.1-foo", "foo"),
        ("10.0.0.1-", ""),
        ("::1-::2", "::1"),
        // 空白を含むトークンはそのままでは読めない
        (" 10.0.0.1 -\t10.0.0.9\n", " 10.0.0.1 "),
        ("10.0.0.1-\t10.0.0.9", "\t10.0.0.9"),
    ] {
        match parse_ip_range(input) {
            Err(AppError::InvalidAddress(s)) => assert_eq!(s, token),
            other => panic!("expected InvalidAddress for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn range_str_to_cidrs_end_to_end() -> Result<(), AppError> {
    let cidrs = range_str_to_cidrs("192.168.0.0-192.168.1.255")?;
    let got: Vec<String> = cidrs.iter().map(|n| n.to_string()).collect();
    assert_eq!(got, vec!["192.168.0.0/23"]);

    let e = range_str_to_cidrs("10.0.0.10-10.0.0.1");
    assert!(matches!(e, Err(AppError::InvalidRange { .. })));
    assert!(e.is_err_and(|e| e.is_input_error()));
    Ok(())
}
