//! symscan driver
//!
//! Command-line entry point: reads a source file, writes the lexeme, globals
//! and functions reports, then prints the collected diagnostics.

use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use symscan_common::{CompilerError, ErrorReporter};
use symscan_frontend::report::{self, inventory_json};
use symscan_frontend::{
    lexical_errors, AnalysisOptions, Frontend, FunctionsReport, GlobalsReport, Inventory, Lexer,
    LexemesReport, RecursionStrategy, SemanticAnalyzer, Token,
};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "symscan")]
#[command(about = "Symbol inventory for globals, functions and control flow")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable logging (filtered by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a source file and write all reports
    Analyze {
        /// Input source file
        input: PathBuf,

        /// Directory for the reports (defaults to the input's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Globals report file name
        #[arg(long, default_value = report::GLOBALS_FILE)]
        globals: PathBuf,

        /// Functions report file name
        #[arg(long, default_value = report::FUNCTIONS_FILE)]
        functions: PathBuf,

        /// Lexeme report file name
        #[arg(long, default_value = report::LEXEMES_FILE)]
        lexemes: PathBuf,

        /// Also write the inventory as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// How self-recursion is detected
        #[arg(long, default_value_t = RecursionStrategy::Lexical)]
        recursion: RecursionStrategy,
    },

    /// Print the lexeme report to stdout
    Lex {
        /// Input source file
        input: PathBuf,
    },

    /// Print the inventory as JSON to stdout
    Inventory {
        /// Input source file
        input: PathBuf,

        /// How self-recursion is detected
        #[arg(long, default_value_t = RecursionStrategy::Lexical)]
        recursion: RecursionStrategy,
    },
}

/// Output file names for `analyze`
struct ReportPaths {
    globals: PathBuf,
    functions: PathBuf,
    lexemes: PathBuf,
    json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::init();
    }

    let mut reporter = ErrorReporter::new();

    let result = match cli.command {
        Commands::Analyze { input, out_dir, globals, functions, lexemes, json, recursion } => {
            let dir = out_dir.unwrap_or_else(|| default_out_dir(&input));
            let paths = ReportPaths {
                globals: dir.join(globals),
                functions: dir.join(functions),
                lexemes: dir.join(lexemes),
                json: json.map(|path| dir.join(path)),
            };
            analyze_file(&input, &paths, AnalysisOptions::with_recursion(recursion), &mut reporter)
        }
        Commands::Lex { input } => lex_file(&input, &mut reporter),
        Commands::Inventory { input, recursion } => {
            inventory_file(&input, AnalysisOptions::with_recursion(recursion), &mut reporter)
        }
    };

    // Diagnostics collected before a failure are still shown
    flush_diagnostics(&reporter);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Reports land next to the input unless told otherwise
fn default_out_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Print every diagnostic and a one-line tally to stderr
fn flush_diagnostics(reporter: &ErrorReporter) {
    if reporter.diagnostics().is_empty() {
        return;
    }
    reporter.print_diagnostics();
    eprintln!("{}", reporter.summary());
}

/// Read and tokenize `input`, recording lexical errors
fn read_tokens(
    input: &Path,
    reporter: &mut ErrorReporter,
) -> Result<(String, Vec<Token>), Box<dyn Error>> {
    let source = fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;

    let mut lexer = Lexer::with_filename(&source, &input.display().to_string());
    let tokens = lexer.tokenize()?;
    debug!("{} tokens from {}", tokens.len(), input.display());

    for diagnostic in lexical_errors(&tokens) {
        reporter.report(diagnostic);
    }

    Ok((source, tokens))
}

fn build_inventory(
    source: &str,
    tokens: Vec<Token>,
    options: AnalysisOptions,
    reporter: &mut ErrorReporter,
) -> Result<Inventory, CompilerError> {
    let ast = Frontend::parse_tokens(tokens, source)?;

    let mut analyzer = SemanticAnalyzer::new(options);
    let inventory = analyzer.analyze(&ast);
    for diagnostic in analyzer.diagnostics() {
        reporter.report(diagnostic.clone());
    }
    if inventory.entry_function().is_none() {
        warn!("no entry function defined");
    }

    Ok(inventory)
}

fn write_report(path: &Path, contents: &str) -> Result<(), CompilerError> {
    fs::write(path, contents)?;
    info!("wrote {}", path.display());
    Ok(())
}

fn analyze_file(
    input: &Path,
    paths: &ReportPaths,
    options: AnalysisOptions,
    reporter: &mut ErrorReporter,
) -> Result<(), Box<dyn Error>> {
    let (source, tokens) = read_tokens(input, reporter)?;

    // The lexeme report is written even when parsing fails
    write_report(&paths.lexemes, &LexemesReport(&tokens).to_string())?;

    let inventory = build_inventory(&source, tokens, options, reporter)?;

    write_report(&paths.globals, &GlobalsReport(&inventory.globals).to_string())?;
    write_report(&paths.functions, &FunctionsReport(&inventory.functions).to_string())?;

    if let Some(json_path) = &paths.json {
        write_report(json_path, &inventory_json(&inventory)?)?;
    }

    println!(
        "Analyzed {}: {} globals, {} functions",
        input.display(),
        inventory.globals.len(),
        inventory.functions.len()
    );
    Ok(())
}

fn lex_file(input: &Path, reporter: &mut ErrorReporter) -> Result<(), Box<dyn Error>> {
    let (_, tokens) = read_tokens(input, reporter)?;
    print!("{}", LexemesReport(&tokens));
    Ok(())
}

fn inventory_file(
    input: &Path,
    options: AnalysisOptions,
    reporter: &mut ErrorReporter,
) -> Result<(), Box<dyn Error>> {
    let (source, tokens) = read_tokens(input, reporter)?;
    let inventory = build_inventory(&source, tokens, options, reporter)?;
    println!("{}", inventory_json(&inventory)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("symscan-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_out_dir() {
        assert_eq!(default_out_dir(Path::new("prog.txt")), PathBuf::from("."));
        assert_eq!(default_out_dir(Path::new("src/prog.txt")), PathBuf::from("src"));
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "symscan", "-v", "analyze", "prog.txt", "--recursion", "call-site", "--json", "inv.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { input, globals, recursion, json, .. } => {
                assert_eq!(input, PathBuf::from("prog.txt"));
                assert_eq!(globals, PathBuf::from("OutputGlobalVariables.txt"));
                assert_eq!(recursion, RecursionStrategy::CallSite);
                assert_eq!(json, Some(PathBuf::from("inv.json")));
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["symscan", "inventory", "p.txt", "--recursion", "fuzzy"]).is_err());
    }

    #[test]
    fn test_analyze_writes_reports() {
        let dir = scratch_dir("analyze");
        let input = dir.join("Input.txt");
        fs::write(&input, "int x = 5;\nvoid main() {\n  while (x) { x--; }\n}\n").unwrap();

        let paths = ReportPaths {
            globals: dir.join(report::GLOBALS_FILE),
            functions: dir.join(report::FUNCTIONS_FILE),
            lexemes: dir.join(report::LEXEMES_FILE),
            json: Some(dir.join("inventory.json")),
        };
        let mut reporter = ErrorReporter::new();
        analyze_file(&input, &paths, AnalysisOptions::default(), &mut reporter).unwrap();

        assert!(reporter.diagnostics().is_empty());
        assert_eq!(
            fs::read_to_string(&paths.globals).unwrap(),
            "Variable: x Value: 5 Type: int\n"
        );
        let functions = fs::read_to_string(&paths.functions).unwrap();
        assert!(functions.contains("Type: Main, Non-recursive"));
        assert!(functions.contains("\t<while, 3>"));
        assert!(fs::read_to_string(&paths.lexemes).unwrap().starts_with("<INT, 'int', 1>\n"));
        assert!(paths.json.as_ref().is_some_and(|p| p.exists()));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_analyze_fails_on_parse_error() {
        let dir = scratch_dir("parse-error");
        let input = dir.join("Input.txt");
        fs::write(&input, "int x = ;").unwrap();

        let paths = ReportPaths {
            globals: dir.join(report::GLOBALS_FILE),
            functions: dir.join(report::FUNCTIONS_FILE),
            lexemes: dir.join(report::LEXEMES_FILE),
            json: None,
        };
        let mut reporter = ErrorReporter::new();
        assert!(analyze_file(&input, &paths, AnalysisOptions::default(), &mut reporter).is_err());
        assert!(paths.lexemes.exists());
        assert!(!paths.globals.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_analyze_collects_diagnostics() {
        let dir = scratch_dir("diagnostics");
        let input = dir.join("Input.txt");
        fs::write(&input, "int x = 1; @\nvoid main() { }\nint main() { return 0; }\n").unwrap();

        let paths = ReportPaths {
            globals: dir.join(report::GLOBALS_FILE),
            functions: dir.join(report::FUNCTIONS_FILE),
            lexemes: dir.join(report::LEXEMES_FILE),
            json: None,
        };
        let mut reporter = ErrorReporter::new();
        analyze_file(&input, &paths, AnalysisOptions::default(), &mut reporter).unwrap();

        let messages: Vec<String> = reporter.diagnostics().iter().map(|d| d.to_string()).collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "error: Lexical error detected: @ at line 1");
        assert!(messages[1].starts_with("warning: More than one entry function defined"));
        assert!(messages[1].contains("\n  note: first entry function defined at"));
        assert_eq!(reporter.summary(), "1 error and 1 warning");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_report_error_is_io_error() {
        let dir = scratch_dir("write-report");
        let err = write_report(&dir.join("missing").join("out.txt"), "x").unwrap_err();
        assert!(matches!(err, CompilerError::IoError { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
