//! `tmlcat`: parse a TML file and print it back out, or run a pattern
//! query against its root. The thin ambient CLI surface over `tml-core`,
//! in the same spirit as `snowc`/`meshc` sitting over the Snow/Mesh
//! compiler crates — no tree logic of its own.

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tmlcat", version, about = "Print or pattern-query a TML file")]
struct Cli {
    /// Path to the TML file to parse.
    path: PathBuf,

    /// Print with brackets (markup form) instead of flattened words.
    #[arg(long)]
    markup: bool,

    /// Find the first child of the root matching this TML pattern
    /// (e.g. `[bold | \*]`) instead of printing the whole document.
    #[arg(long)]
    find: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let doc = tml_core::parse_file(&cli.path)
        .map_err(|e| format!("could not read '{}': {}", cli.path.display(), e))?;

    if let Some(err) = doc.error() {
        return Err(err.to_string());
    }

    let root = doc.root();

    let target = match &cli.find {
        Some(pattern) => {
            let pattern_doc = tml_core::Document::parse_text(pattern.as_bytes());
            if let Some(err) = pattern_doc.error() {
                return Err(format!("invalid pattern: {}", err));
            }
            let found = tml_core::find_first_child(&root, &pattern_doc.root());
            if found.is_null() {
                return Err("no child matched the given pattern".to_string());
            }
            found
        }
        None => root,
    };

    let mut buf = vec![0u8; 64 * 1024];
    let len = if cli.markup {
        tml_core::to_markup_string(&target, &mut buf)
    } else {
        tml_core::to_string(&target, &mut buf)
    };

    let text = String::from_utf8_lossy(&buf[..len]);
    println!("{}", text);
    Ok(())
}
