use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read settings from this TOML file instead of the user configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sketch parameters shared by every subcommand. Unset values come from the
/// configuration file.
#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct SketchOptions {
    /// K-mer length
    #[arg(short = 'k', long)]
    pub kmer_size: Option<usize>,

    /// Number of hashes kept per file
    #[arg(short = 's', long)]
    pub sketch_size: Option<usize>,

    /// Number of files sketched in parallel
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sketch FASTA/FASTQ files and print their fingerprints
    Sketch {
        /// Input files (.fa, .fasta, .fna, .fq, .fastq; optionally compressed)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        options: SketchOptions,

        /// Print JSON instead of tab-separated text
        #[arg(long)]
        json: bool,

        /// Include the retained hash values
        #[arg(long)]
        hashes: bool,
    },

    /// Estimate MinHash distances between FASTA/FASTQ files
    Dist {
        /// Input files; every pair is compared
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        options: SketchOptions,

        /// Report the mean of both comparison directions, once per pair
        #[arg(long)]
        symmetric: bool,

        /// Print JSON instead of tab-separated text
        #[arg(long)]
        json: bool,

        /// Write the report to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
    },
}
