use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Submit captured job logs to the analysis backend
#[derive(Debug, Parser)]
#[clap(name = "logan", version)]
pub struct ArgParser {
    /// The address of the backend, overriding the configuration file
    #[clap(short = 's', long = "server")]
    pub server: Option<String>,

    /// Path to the configuration file
    #[clap(short = 'c', long = "config", env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// The sub-command to use
    #[clap(subcommand)]
    pub sub_command: SubCommand,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SubCommand {
    /// analyze a single job failure
    Analyze {
        /// captured standard error
        #[clap(long, default_value = "", conflicts_with = "stderr-file")]
        stderr: String,

        /// read captured standard error from a file
        #[clap(long = "stderr-file")]
        stderr_file: Option<PathBuf>,

        /// captured standard output
        #[clap(long, default_value = "", conflicts_with = "stdout-file")]
        stdout: String,

        /// read captured standard output from a file
        #[clap(long = "stdout-file")]
        stdout_file: Option<PathBuf>,

        /// exit code of the job
        #[clap(long = "exit-code")]
        exit_code: String,
    },
    /// summarize a batch of job failures
    Summarize {
        /// path to a JSON array of job records
        jobs: PathBuf,
    },
    /// check that the backend is reachable
    Health,
}
