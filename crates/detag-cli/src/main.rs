use clap::{Parser, Subcommand};
use std::path::Path;
use std::str::FromStr;

use detag_core::{removal_span, Dialect, Span};

#[derive(Parser)]
#[command(name = "detag")]
#[command(about = "detag — locate and remove the markup tag under a cursor offset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the removal span for the tag at the given offset
    Span {
        /// Input file (.html, .jsx, .tsx, or .vue)
        path: String,

        /// Cursor position as a 0-based character offset
        #[arg(long)]
        offset: usize,

        /// Language id override (html, jsx, tsx, vue, ...); inferred
        /// from the file extension when omitted
        #[arg(long)]
        language: Option<String>,

        /// Emit the span as JSON: {"start":..,"end":..}
        #[arg(long)]
        json: bool,
    },

    /// Print the file contents with the tag at the given offset removed
    Strip {
        /// Input file (.html, .jsx, .tsx, or .vue)
        path: String,

        /// Cursor position as a 0-based character offset
        #[arg(long)]
        offset: usize,

        /// Language id override; inferred from the file extension when omitted
        #[arg(long)]
        language: Option<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Span {
            path,
            offset,
            language,
            json,
        } => cmd_span(&path, offset, language.as_deref(), json),
        Command::Strip {
            path,
            offset,
            language,
            output,
        } => cmd_strip(&path, offset, language.as_deref(), output.as_deref()),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Map the explicit language id, or the file extension, to a dialect.
fn dialect_for(path: &str, language: Option<&str>) -> Dialect {
    let id = match language {
        Some(l) => l.to_string(),
        None => match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some("htm") => "html".to_string(),
            Some(ext) => ext.to_string(),
            None => {
                eprintln!("Error: cannot infer language for {path}; pass --language");
                std::process::exit(1);
            }
        },
    };

    match Dialect::from_str(&id) {
        Ok(dialect) => dialect,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn resolve(path: &str, offset: usize, language: Option<&str>) -> (String, Span) {
    let dialect = dialect_for(path, language);
    let source = read_source(path);

    let length = source.chars().count();
    if offset > length {
        eprintln!("Error: offset {offset} is past the end of {path} ({length} characters)");
        std::process::exit(1);
    }

    match removal_span(&source, offset, dialect) {
        Some(span) => (source, span),
        None => {
            eprintln!("No tag found at offset {offset}");
            std::process::exit(1);
        }
    }
}

fn cmd_span(path: &str, offset: usize, language: Option<&str>, json: bool) {
    let (_, span) = resolve(path, offset, language);

    if json {
        match serde_json::to_string(&span) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing span: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}..{}", span.start, span.end);
    }
}

fn cmd_strip(path: &str, offset: usize, language: Option<&str>, output: Option<&str>) {
    let (source, span) = resolve(path, offset, language);

    // Spans are character offsets, so splice on chars, not bytes.
    let stripped: String = source
        .chars()
        .take(span.start)
        .chain(source.chars().skip(span.end))
        .collect();

    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, stripped) {
                eprintln!("Error writing {out_path}: {e}");
                std::process::exit(1);
            }
        }
        None => print!("{stripped}"),
    }
}
