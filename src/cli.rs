use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parse and compare tool and runtime versions
#[derive(Parser, Debug)]
#[clap(about, author, version)]
pub struct Opts {
    /// Read configuration from this file
    #[clap(long, short)]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub subcommands: SubCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Parse(Parse),
    Compare(Compare),
    Sort(Sort),
    Check(Check),
    /// Print the runtime version reported by the platform
    Current,
}

/// How the given versions should be read
#[derive(Args, Debug)]
pub struct Scheme {
    /// Read versions as major.middle.minor[_update][-identifier]
    #[clap(long, short)]
    pub runtime: bool,
    /// Characters separating generic version sections
    #[clap(long, short, conflicts_with = "runtime")]
    pub delimiters: Option<String>,
}

/// Show the components of a version
#[derive(Args, Debug)]
pub struct Parse {
    pub target: String,
    #[clap(flatten)]
    pub scheme: Scheme,
    /// print as JSON
    #[clap(long)]
    pub json: bool,
}

/// Compare two versions
#[derive(Args, Debug)]
pub struct Compare {
    pub left: String,
    pub right: String,
    #[clap(flatten)]
    pub scheme: Scheme,
}

/// List versions from newer to older
#[derive(Args, Debug)]
pub struct Sort {
    #[clap(required = true)]
    pub targets: Vec<String>,
    #[clap(flatten)]
    pub scheme: Scheme,
}

/// Check that the platform runtime version is recent enough
#[derive(Args, Debug)]
pub struct Check {
    /// minimum runtime version, defaults to the configured one
    pub required: Option<String>,
    /// use this runtime version instead of the platform one
    #[clap(long)]
    pub current: Option<String>,
}
