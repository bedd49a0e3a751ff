//! CLI entry point for filelister

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use filelister::{
    DEFAULT_MAX_DEPTH, OsDirectorySource, OutputConfig, OutputFormat, TextFormatter, TextWalker,
    TreeWalker, WalkerConfig, normalize_root, print_structured, validate_root,
};
use log::LevelFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filelister")]
#[command(about = "List a directory as an indented tree, JSON, or YAML")]
#[command(version)]
struct Args {
    /// Directory to list
    path: PathBuf,

    /// Output type
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Recursively display the contents of subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Stop descending after N levels below the root
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Control color output of text listings: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase diagnostic verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Route diagnostics to stderr. RUST_LOG overrides the level chosen by -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let root = normalize_root(&args.path);
    let root_path = root.as_path();

    if let Err(e) = validate_root(&OsDirectorySource, root_path) {
        eprintln!("filelister: {}", e);
        eprintln!("filelister: on a unix-based system, 'pwd' prints a valid path");
        process::exit(1);
    }

    let walker_config = WalkerConfig {
        recursive: args.recursive,
        max_depth: args.max_depth,
    };
    let output_config = OutputConfig {
        format: args.output,
        use_color: should_use_color(args.color),
    };

    println!("{}", root.display());

    let result = if let Some(format) = output_config.format.structured() {
        // Structured output requires the full tree in memory
        let nodes = TreeWalker::new(walker_config).walk(root_path);
        print_structured(&nodes, format)
    } else {
        let mut formatter = TextFormatter::stdout(output_config.use_color);
        TextWalker::new(walker_config)
            .walk_streaming(root_path, &mut formatter)
            .map_err(Into::into)
    };

    if let Err(e) = result {
        eprintln!("filelister: {}", e);
        process::exit(1);
    }
}
