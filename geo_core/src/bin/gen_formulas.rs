//! Render the formula registry as markdown.
//!
//! ```bash
//! cargo run --bin gen-formulas                 # geo_core/src/formulas/FORMULAS.md
//! cargo run --bin gen-formulas -- docs/ref.md  # any other path
//! cargo run --bin gen-formulas -- -            # stdout
//! ```

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use geo_core::formulas::{generate_formulas_markdown, ALL_FORMULAS};

/// Relative to the workspace root
const DEFAULT_OUTPUT: &str = "geo_core/src/formulas/FORMULAS.md";

fn main() -> ExitCode {
    let target = env::args_os().nth(1);
    let markdown = generate_formulas_markdown();

    if target.as_deref() == Some(OsStr::new("-")) {
        return match io::stdout().write_all(markdown.as_bytes()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let path = target.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    if let Err(e) = fs::write(&path, &markdown) {
        eprintln!("gen-formulas: cannot write {}: {}", path.display(), e);
        return ExitCode::FAILURE;
    }
    println!("{} formulas -> {}", ALL_FORMULAS.len(), path.display());
    ExitCode::SUCCESS
}
