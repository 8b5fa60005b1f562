use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use minic::{
    config::{LexerConfig, LogConfig, LogFormat},
    logging::init_logging,
    render_error,
    repl::run_repl,
    tokenize_with,
};
use tracing::{info, Level};

const DEMO_SOURCE: &str = "
if (x == 10) {
    while y > 5 {
        z = x + y * 2;
        return z;
    }
}
";

#[derive(Parser)]
#[command(
    name = "minic",
    about = "Tokenizer for a small C-like language",
    version
)]
struct Cli {
    /// Source file to tokenize; starts an interactive session when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Tokenize the built-in sample program
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Treat `in` as a reserved word
    #[arg(long)]
    reserve_in: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: Level,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        global: cli.log_level,
        lexer: None,
        format: cli.log_format,
    });

    let config = LexerConfig::new().with_reserved_in(cli.reserve_in);

    if cli.demo {
        println!("Source:");
        println!("{}", DEMO_SOURCE);
        println!("Tokens:");
        return print_tokens(DEMO_SOURCE, "<demo>", &config);
    }

    if let Some(path) = cli.file {
        return run_file(&path, &config);
    }

    println!("Type code to tokenize ('quit' to exit)");
    match run_repl(io::stdin().lock(), io::stdout(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_file(path: &Path, config: &LexerConfig) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    info!(target: "minic::cli", file = %path.display(), bytes = source.len(), "tokenizing");
    print_tokens(&source, &path.to_string_lossy(), config)
}

fn print_tokens(source: &str, file_name: &str, config: &LexerConfig) -> ExitCode {
    match tokenize_with(source, config) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print!("{}", render_error(&error, source, file_name));
            ExitCode::FAILURE
        }
    }
}
