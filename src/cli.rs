use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "tailpad")]
#[command(version)]
#[command(about = "A minimal modal terminal text editor")]
pub struct CliArgs {
    /// File to edit; a default file is created when omitted
    pub file: Option<PathBuf>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
