//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use extractsum_core::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "extractsum",
    version,
    about = "Extractive summaries of terms-of-service documents"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file to use instead of ./extractsum.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Root directory for document artifacts and variant folders.
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Word-vector file in GloVe text format.
    #[arg(long, global = true)]
    pub embeddings: Option<PathBuf>,

    /// Requested topic count for both topic models.
    #[arg(long, global = true)]
    pub topics: Option<usize>,

    /// Seed for topic model initialization.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Fallback log level when EXTRACTSUM_LOG is unset (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Machine-readable JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    pub fn overrides(&self, parallel: Option<bool>) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            output_dir: self.output_dir.clone(),
            embeddings: self.embeddings.clone(),
            topics: self.topics,
            seed: self.seed,
            parallel,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every stage for one document and print its combined summary.
    Run {
        document: PathBuf,
    },
    /// Run a single named stage against the document's artifacts.
    Stage {
        /// segment, keywords, topics, grs, surface, content, rhetorical, features, rank or extract.
        name: String,
        document: PathBuf,
    },
    /// Summarize many documents; failures are reported, not fatal.
    Batch {
        #[arg(required = true)]
        documents: Vec<PathBuf>,
        /// Process documents in parallel.
        #[arg(long)]
        parallel: bool,
    },
    /// ROUGE-1/2/L of every variant folder against reference summaries.
    Evaluate {
        #[arg(long)]
        reference_dir: PathBuf,
    },
    /// List the summary variants and their feature sets.
    Variants,
    /// Print the effective configuration.
    Config,
}

impl Command {
    /// The `--parallel` flag, when the command has one and it is set.
    pub fn parallel(&self) -> Option<bool> {
        match self {
            Command::Batch { parallel: true, .. } => Some(true),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "extractsum",
            "stage",
            "grs",
            "terms.txt",
            "--topics",
            "12",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.topics, Some(12));
        assert!(cli.global.json);
        assert!(matches!(cli.command, Command::Stage { ref name, .. } if name == "grs"));
    }

    #[test]
    fn batch_requires_documents() {
        assert!(Cli::try_parse_from(["extractsum", "batch"]).is_err());
        let cli = Cli::try_parse_from(["extractsum", "batch", "a.txt", "b.txt", "--parallel"])
            .unwrap();
        assert_eq!(cli.command.parallel(), Some(true));
        assert_eq!(cli.global.overrides(cli.command.parallel()).parallel, Some(true));
    }
}
