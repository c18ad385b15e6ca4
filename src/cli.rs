use clap::Parser;
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert an IP address range to a list of CIDR blocks.",
    after_help = "Examples:\n  range-radar --range \"10.0.0.0-10.255.255.255\" --output json"
)]
pub struct Cli {
    #[arg(
        short = 'r',
        long = "range",
        required = true,
        help = "An IP address range to convert to CIDR blocks.\nExample: 10.0.0.0-10.255.255.255"
    )]
    pub range: String,

    #[arg(
        short = 'o',
        long = "output",
        default_value = "terminal",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'json', 'csv' or 'terminal'.\ndefault: terminal"
    )]
    pub output: String,

    #[arg(
        short = 'd',
        long = "out-dir",
        default_value = ".",
        required = false,
        hide_default_value = true,
        help = "Directory to write JSON/CSV files into.\ndefault: current directory"
    )]
    pub out_dir: PathBuf,
}
