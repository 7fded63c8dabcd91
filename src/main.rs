use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use clint::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_source, ParserConfig, DEFAULT_MAX_DEPTH},
};
use tracing_subscriber::EnvFilter;

const BANNER: &str = r#"
  ___  __    __  __ _  ____    ____  ____  ____  __
 / __)(  )  (  )(  ( \(_  _)  (  _ \(  __)(  _ \(  )
( (__ / (_/\ )( /    /  )(     )   / ) _)  ) __// (_/\
 \___)\____/(__)\_)__) (__)   (__\_)(____)(__)  \____/
"#;

const PROMPT: &str = ">> ";

#[derive(Parser)]
#[command(name = "clint")]
#[command(about = "Parse Clint source and print its canonical form", version)]
struct Cli {
    /// Source file to parse; starts a REPL when omitted
    file: Option<PathBuf>,

    /// Deepest expression nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<ExitCode> {
    install_tracing();

    let cli = Cli::parse();
    let config = ParserConfig::default().with_max_depth(cli.max_depth);

    match &cli.file {
        Some(path) => run_file(path, config, cli.tokens),
        None => {
            run_repl(config, cli.tokens)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_file(path: &Path, config: ParserConfig, dump_tokens: bool) -> Result<ExitCode> {
    let source =
        read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if dump_tokens {
        for token in tokenize(source, Some(file_name)) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let (program, diagnostics) = parse_source(source.clone(), Some(file_name), config);

    if !diagnostics.is_empty() {
        for error in diagnostics.iter() {
            eprint!("{}", display_error(error, &source));
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}

fn run_repl(config: ParserConfig, dump_tokens: bool) -> Result<()> {
    let user = std::env::var("USER").unwrap_or_else(|_| String::from("Hello"));
    println!("{}, you're in Clint REPL!", user);
    println!("Type some commands...");
    println!("{}", BANNER);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;

        if dump_tokens {
            for token in tokenize(line, None) {
                writeln!(stdout, "{}", token)?;
            }
            continue;
        }

        let (program, diagnostics) = parse_source(line, None, config);

        if !diagnostics.is_empty() {
            for message in diagnostics.messages() {
                writeln!(stdout, "\t{}", message)?;
            }
            continue;
        }

        writeln!(stdout, "{}", program)?;
    }
}
