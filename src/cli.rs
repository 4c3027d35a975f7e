use std::{fs, path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};

use crate::authors::DEFAULT_MAX_AUTHORS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse BibTeX sources and print the records as JSON
    Parse {
        #[arg(value_name = "SRC")]
        from: Vec<Source>,
    },
    /// Format a BibTeX author list for display
    Authors {
        /// Author field value, names joined by " and "
        #[arg(value_name = "AUTHORS")]
        authors: String,
        /// Show at most this many names before "et al."
        #[arg(long, default_value_t = DEFAULT_MAX_AUTHORS)]
        max: usize,
    },
}

#[derive(Clone, Debug)]
/// Where BibTeX text comes from: a `.bib` file on disk, or the argument
/// itself taken as inline BibTeX. Anything that resolves to an existing
/// path is treated as a file.
pub enum Source {
    File(PathBuf),
    Inline(String),
}

impl FromStr for Source {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(path) = fs::canonicalize(s) {
            Ok(Source::File(path))
        } else {
            Ok(Source::Inline(s.to_string()))
        }
    }
}
