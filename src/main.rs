use clap::Parser;
use seqsketch::cli::{self, SketchOptions};
use seqsketch::commands;
use seqsketch::config::{Config, Settings};

fn settings(config_path: Option<&std::path::Path>, options: SketchOptions) -> anyhow::Result<Settings> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    config.resolve(options.kmer_size, options.sketch_size, options.threads)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::Args::parse();
    let config_path = args.config.as_deref();

    let result = match args.command {
        cli::Commands::Sketch {
            files,
            options,
            json,
            hashes,
        } => settings(config_path, options)
            .and_then(|settings| commands::sketch::run(files, settings, json, hashes)),
        cli::Commands::Dist {
            files,
            options,
            symmetric,
            json,
            output_file,
        } => settings(config_path, options).and_then(|settings| {
            commands::dist::run(files, settings, symmetric, json, output_file)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
