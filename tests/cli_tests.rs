use clap::Parser;
use range_radar::cli::Cli;
use std::path::PathBuf;

#[test]
fn cli_parses_range_with_defaults() {
    let args = ["range-radar", "--range", "10.0.0.0-10.255.255.255"];

    let cli = Cli::parse_from(&args);
    assert_eq!(cli.range, "10.0.0.0-10.255.255.255".to_string());
    assert_eq!(cli.output, "terminal".to_string());
    assert_eq!(cli.out_dir, PathBuf::from("."));
}

#[test]
fn cli_parses_output_and_out_dir() {
    let args = [
        "range-radar",
        "-r",
        "10.0.0.1-10.0.0.10",
        "-o",
        "json",
        "-d",
        "/tmp/cidrs",
    ];
    let cli = Cli::parse_from(&args);
    assert_eq!(cli.range, "10.0.0.1-10.0.0.10".to_string());
    assert_eq!(cli.output, "json".to_string());
    assert_eq!(cli.out_dir, PathBuf::from("/tmp/cidrs"));
}

#[test]
fn cli_requires_range() {
    let res = Cli::try_parse_from(["range-radar", "--output", "csv"]);
    assert!(res.is_err());
}
