use clap::{Parser, Subcommand};

/// Depconf - locate third-party build dependencies and emit compiler flags
#[derive(Parser, Debug)]
#[command(name = "depconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute Qwt/Qt include and link flags for a target (warns and continues when absent)
    Locate {
        /// Target platform identifier used in library path layout
        #[arg(long, env = "OPTICKSPLATFORM", value_name = "PLATFORM")]
        platform: String,

        /// Target OS identifier ("windows" selects the Windows layout)
        #[arg(long = "os", env = "OS", value_name = "OS")]
        os: String,

        /// Build mode, consulted on the Windows branch only
        #[arg(long, env = "MODE", default_value = "release", value_name = "MODE")]
        mode: String,

        /// Dependency root override (default: $OPTICKSDEPENDENCIES)
        #[arg(long, value_name = "DIR")]
        deps_root: Option<String>,

        /// Emit the resulting build environment as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Like locate, but a missing dependency tree is fatal (non-zero exit)
    Check {
        /// Target platform identifier used in library path layout
        #[arg(long, env = "OPTICKSPLATFORM", value_name = "PLATFORM")]
        platform: String,

        /// Target OS identifier ("windows" selects the Windows layout)
        #[arg(long = "os", env = "OS", value_name = "OS")]
        os: String,

        /// Build mode, consulted on the Windows branch only
        #[arg(long, env = "MODE", default_value = "release", value_name = "MODE")]
        mode: String,

        /// Dependency root override (default: $OPTICKSDEPENDENCIES)
        #[arg(long, value_name = "DIR")]
        deps_root: Option<String>,

        /// Emit the resulting build environment as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Report whether the qwt build tool is discoverable on PATH
    Probe,
}
