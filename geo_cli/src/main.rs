//! # Geocalc CLI Application
//!
//! Terminal front end for `geo_core`: browse the shape catalog, inspect the
//! inputs a shape needs, and run calculations either from flags or through
//! interactive prompts.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use geo_core::catalog::{self, Category, ShapeDefinition};
use geo_core::formulas::generate_formulas_markdown;
use geo_core::{calculate_shape, CalculationResults, DisplaySettings, GeoError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error("could not read settings file {path}: {source}")]
    SettingsFile { path: PathBuf, source: io::Error },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no shape selected")]
    NoShapeSelected,
}

#[derive(Parser, Debug)]
#[command(name = "geo", version, about = "Geometry calculator for 2D and 3D shapes")]
struct Cli {
    /// Decimal places shown in results
    #[arg(long, global = true, env = "GEO_PRECISION")]
    precision: Option<usize>,

    /// JSON file with display settings
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List shapes, grouped by category
    List {
        /// Case-insensitive name filter
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, short, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Show the inputs a shape needs
    Inputs {
        shape: String,
        /// Show inputs per calculation instead of the deduplicated form
        #[arg(long)]
        grouped: bool,
    },
    /// Calculate every result for a shape
    Calc {
        shape: String,
        /// Input value, repeatable
        #[arg(short = 'v', long = "value", value_name = "LABEL=VALUE", value_parser = parse_key_value)]
        values: Vec<(String, String)>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Also print the formulas used
        #[arg(long)]
        explain: bool,
    },
    /// Print the formula reference
    Formulas,
    /// Prompt for a shape and its inputs
    Interactive,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryArg {
    #[value(name = "2d")]
    TwoD,
    #[value(name = "3d")]
    ThreeD,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::TwoD => Category::TwoD,
            CategoryArg::ThreeD => Category::ThreeD,
        }
    }
}

/// JSON document printed by `calc --json`
#[derive(Serialize)]
struct CalcReport<'a> {
    shape: &'a str,
    results: &'a CalculationResults,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Geo(geo) = &e {
                if let Ok(json) = serde_json::to_string_pretty(geo) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.settings.as_ref(), cli.precision)?;
    tracing::debug!(precision = settings.precision, "display settings resolved");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::List { query, category } => run_list(query.as_deref(), category.map(Category::from)),
        Command::Inputs { shape, grouped } => run_inputs(&shape, grouped),
        Command::Calc {
            shape,
            values,
            json,
            explain,
        } => run_calc(&shape, values, json, explain, &settings),
        Command::Formulas => {
            println!("{}", generate_formulas_markdown());
            Ok(())
        }
        Command::Interactive => run_interactive(&settings),
    }
}

/// Settings file first, then `--precision` on top
fn load_settings(path: Option<&PathBuf>, precision: Option<usize>) -> Result<DisplaySettings, CliError> {
    let mut settings = match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::SettingsFile {
                path: path.clone(),
                source,
            })?;
            DisplaySettings::from_json(&json)?
        }
        None => DisplaySettings::default(),
    };
    if let Some(precision) = precision {
        settings.precision = precision;
    }
    settings.validate()?;
    Ok(settings)
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got `{}`", s))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in `{}`", s));
    }
    Ok((label.to_string(), value.to_string()))
}

// =============================================================================
// Commands
// =============================================================================

fn run_list(query: Option<&str>, category: Option<Category>) -> Result<(), CliError> {
    let matching = catalog::filter_by_name_substring(catalog::list_shapes(), query.unwrap_or(""));
    if matching.is_empty() {
        println!("No shapes match.");
        return Ok(());
    }

    let categories = match category {
        Some(c) => vec![c],
        None => vec![Category::TwoD, Category::ThreeD],
    };
    for category in categories {
        let shapes = catalog::filter_by_category(matching.iter().copied(), category);
        if shapes.is_empty() {
            continue;
        }
        println!("{} Shapes", category);
        for shape in shapes {
            let calcs: Vec<&str> = shape.calculations.iter().map(|c| c.display_name()).collect();
            println!("  {:<22} {}", shape.name, calcs.join(", "));
        }
        println!();
    }
    Ok(())
}

fn run_inputs(shape_name: &str, grouped: bool) -> Result<(), CliError> {
    let shape = catalog::find_shape(shape_name)?;
    println!("{} ({})", shape.name, shape.category);

    if grouped {
        for (calc, inputs) in shape.grouped_inputs() {
            println!("  {}", calc);
            for input in inputs {
                println!("    {}", describe_input(input));
            }
        }
    } else {
        for input in catalog::unique_inputs_for(shape) {
            println!("  {}", describe_input(&input));
        }
    }
    Ok(())
}

fn describe_input(input: &catalog::InputSpec) -> String {
    let marker = if input.optional { " [optional]" } else { "" };
    format!("{:<22} {}{}", input.label, input.placeholder, marker)
}

fn run_calc(
    shape_name: &str,
    values: Vec<(String, String)>,
    json: bool,
    explain: bool,
    settings: &DisplaySettings,
) -> Result<(), CliError> {
    let shape = catalog::find_shape(shape_name)?;
    let results = calculate_shape(shape, values)?;

    if json {
        let report = CalcReport {
            shape: &shape.name,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_results(shape, &results, settings);
    if explain {
        print_explanation(&results);
    }
    Ok(())
}

fn print_results(shape: &ShapeDefinition, results: &CalculationResults, settings: &DisplaySettings) {
    println!("═══════════════════════════════════════");
    println!("  {} RESULTS", shape.name.to_uppercase());
    println!("═══════════════════════════════════════");
    for entry in results {
        println!("  {:<16} {}", format!("{}:", entry.label), entry.result.display(settings));
    }
    println!("═══════════════════════════════════════");
}

fn print_explanation(results: &CalculationResults) {
    println!();
    println!("Formulas:");
    for formula in results.formulas_used() {
        let meta = formula.metadata();
        println!("  {:<28} {}", meta.name, meta.formula_plain);
        for assumption in &meta.assumptions {
            println!("  {:<28}   note: {}", "", assumption);
        }
    }
}

// =============================================================================
// Interactive Mode
// =============================================================================

fn run_interactive(settings: &DisplaySettings) -> Result<(), CliError> {
    println!("Geocalc - Geometry Calculator");
    println!("=============================");
    println!();

    let shapes = catalog::list_shapes();
    for (i, shape) in shapes.iter().enumerate() {
        println!("  {:>2}. {:<22} [{}]", i + 1, shape.name, shape.category);
    }
    println!();

    let mut stdin = io::stdin().lock();
    let choice = prompt(&mut stdin, &format!("Select a shape [1-{}] or type a name: ", shapes.len()))?
        .ok_or(CliError::NoShapeSelected)?;
    let shape = select_shape(shapes, &choice)?;

    println!();
    println!("{}", shape.name);
    let mut values = Vec::new();
    for input in catalog::unique_inputs_for(shape) {
        let marker = if input.optional { ", blank to derive" } else { "" };
        let text = prompt(&mut stdin, &format!("  {} ({}{}): ", input.label, input.placeholder, marker))?;
        values.push((input.label, text.unwrap_or_default()));
    }
    println!();

    let results = calculate_shape(shape, values)?;
    print_results(shape, &results, settings);
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn prompt(stdin: &mut impl BufRead, text: &str) -> Result<Option<String>, CliError> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Accept a 1-based index or a case-insensitive exact name
fn select_shape<'a>(shapes: &'a [ShapeDefinition], choice: &str) -> Result<&'a ShapeDefinition, CliError> {
    if let Ok(index) = choice.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| shapes.get(i))
            .ok_or_else(|| GeoError::unknown_shape(choice).into());
    }
    shapes
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(choice))
        .ok_or_else(|| GeoError::unknown_shape(choice).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("Side length = 2").unwrap(),
            ("Side length".to_string(), " 2".to_string())
        );
        assert_eq!(parse_key_value("Radius=").unwrap(), ("Radius".to_string(), String::new()));
        assert!(parse_key_value("Radius").is_err());
        assert!(parse_key_value("=2").is_err());
    }

    #[test]
    fn test_cli_shape() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_args() {
        let cli = Cli::try_parse_from(["geo", "calc", "Rectangle", "-v", "Length=3", "--value", "Width=4", "--json"])
            .unwrap();
        match cli.command {
            Some(Command::Calc { shape, values, json, .. }) => {
                assert_eq!(shape, "Rectangle");
                assert_eq!(values.len(), 2);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_select_shape() {
        let shapes = catalog::list_shapes();
        assert_eq!(select_shape(shapes, "1").unwrap().name, "Circle");
        assert_eq!(select_shape(shapes, "right triangle").unwrap().name, "Right Triangle");
        assert!(select_shape(shapes, "0").is_err());
        assert!(select_shape(shapes, "Blob").is_err());
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = io::Cursor::new(b"".to_vec());
        assert_eq!(prompt(&mut input, "").unwrap(), None);
        let mut input = io::Cursor::new(b"  6 \n".to_vec());
        assert_eq!(prompt(&mut input, "").unwrap(), Some("6".to_string()));
    }

    #[test]
    fn test_settings_precision_override() {
        let settings = load_settings(None, Some(4)).unwrap();
        assert_eq!(settings.precision, 4);
        assert!(load_settings(None, Some(99)).is_err());
    }
}
