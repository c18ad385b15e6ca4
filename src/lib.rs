pub mod cli;
pub mod commands;
pub mod common;
pub mod error;
pub mod ipv4_utils;
pub mod output;
pub mod output_common;
pub mod parse_ipv4;
