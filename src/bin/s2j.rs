//! Gridson CLI - Spreadsheet range to nested JSON exporter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use gridson::{
    batch_to_grids,
    diagnostics::{format_diagnostics, warning_count, Diagnostic},
    files::{range_output_path, render_json, write_json},
    values_to_grid, BatchGetResponse, ConvertOptions, ConvertOutput, ExportError, ExportResult,
    Grid, Progress, ValueRange,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "s2j")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Gridson - Spreadsheet range to nested JSON exporter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Spreadsheet id to export (default action)
    spreadsheet_id: Option<String>,

    /// Range to fetch (repeatable, e.g. -r 'Items!A1:D50')
    #[arg(short, long = "range")]
    ranges: Vec<String>,

    /// Number of leading header/sub-header rows
    #[arg(short = 'd', long, default_value_t = 1)]
    header_depth: usize,

    /// Output directory for the per-range JSON files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Pretty print the output files
    #[arg(short, long)]
    pretty: bool,

    /// OAuth bearer token (falls back to SHEETS_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// API key (falls back to SHEETS_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Use colored output for diagnostics
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress diagnostic output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert an already-fetched values payload from a file or stdin
    Convert {
        /// Input file holding raw values `[[...]]`, a single value range,
        /// or a whole batch response (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of leading header/sub-header rows
        #[arg(short = 'd', long, default_value_t = 1)]
        header_depth: usize,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Strict mode: exit with error if any conversion warnings occur
        #[arg(long)]
        strict: bool,

        /// Quiet mode: suppress diagnostic output to stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            ref input,
            ref output,
            header_depth,
            pretty,
            strict,
            quiet,
        }) => run_convert(input.as_deref(), output.as_deref(), header_depth, pretty, strict, quiet, cli.color),
        Some(Commands::Info) => {
            print_info();
            Ok(0)
        }
        None => run_export(&cli),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Default action: fetch the requested ranges and write one file per range
#[cfg(all(feature = "cli", feature = "fetch"))]
fn run_export(cli: &Cli) -> ExportResult<i32> {
    use gridson::{Auth, SheetsClient};

    let spreadsheet_id = cli
        .spreadsheet_id
        .as_deref()
        .ok_or_else(|| ExportError::invalid("missing spreadsheet id (or use `s2j convert`)"))?;
    if cli.ranges.is_empty() {
        return Err(ExportError::invalid(
            "no ranges requested (use -r 'Sheet1!A1:D50')",
        ));
    }

    let auth = match (&cli.token, &cli.api_key) {
        (Some(token), _) => Auth::Bearer(token.clone()),
        (None, Some(key)) => Auth::ApiKey(key.clone()),
        (None, None) => Auth::from_env().ok_or_else(|| {
            ExportError::invalid("no credentials (--token, --api-key, SHEETS_TOKEN, or SHEETS_API_KEY)")
        })?,
    };

    let client = SheetsClient::new(auth)?;
    let response: BatchGetResponse = client.batch_get(spreadsheet_id, &cli.ranges)?;
    let grids = batch_to_grids(&response);

    let options = ConvertOptions::with_header_depth(cli.header_depth);
    let progress = Progress::new(grids.len());
    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();

    for (range, grid) in &grids {
        let output = gridson::convert_grid(grid, &options);
        let path = range_output_path(&cli.output_dir, range);
        write_json(&path, &output.value, cli.pretty)?;

        progress.complete_one();
        let (done, total) = progress.snapshot();
        if output.has_warnings() {
            eprintln!(
                "[{}/{}] ⚠ {} ({} warning(s))",
                done,
                total,
                path.display(),
                warning_count(&output.diagnostics)
            );
        } else {
            eprintln!("[{}/{}] ✓ {}", done, total, path.display());
        }
        all_diagnostics.extend(output.diagnostics);
    }

    report_diagnostics(&all_diagnostics, cli.quiet, cli.color);
    if cli.strict && warning_count(&all_diagnostics) > 0 {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warning_count(&all_diagnostics)
        );
        return Ok(1);
    }
    Ok(0)
}

#[cfg(all(feature = "cli", not(feature = "fetch")))]
fn run_export(_cli: &Cli) -> ExportResult<i32> {
    Err(ExportError::invalid(
        "fetch feature not enabled; rebuild with --features fetch or use `s2j convert`",
    ))
}

/// Offline action: convert a local values payload
#[cfg(feature = "cli")]
fn run_convert(
    input: Option<&str>,
    output: Option<&Path>,
    header_depth: usize,
    pretty: bool,
    strict: bool,
    quiet: bool,
    color: bool,
) -> ExportResult<i32> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let grids = parse_values_payload(&text)?;
    let options = ConvertOptions::with_header_depth(header_depth);
    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();

    if grids.len() == 1 {
        let (_, grid) = &grids[0];
        let converted: ConvertOutput = gridson::convert_grid(grid, &options);
        match output {
            Some(path) => {
                write_json(path, &converted.value, pretty)?;
                eprintln!("✓ Output written to: {}", path.display());
            }
            None => print!("{}", render_json(&converted.value, pretty)?),
        }
        all_diagnostics.extend(converted.diagnostics);
    } else {
        // A multi-range payload writes one file per range, like an export
        let output_dir = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        for (range, grid) in &grids {
            let converted = gridson::convert_grid(grid, &options);
            let path = range_output_path(&output_dir, range);
            write_json(&path, &converted.value, pretty)?;
            eprintln!("✓ {}", path.display());
            all_diagnostics.extend(converted.diagnostics);
        }
    }

    report_diagnostics(&all_diagnostics, quiet, color);
    if strict && warning_count(&all_diagnostics) > 0 {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            warning_count(&all_diagnostics)
        );
        return Ok(1);
    }
    Ok(0)
}

/// Accept the three payload shapes a fetched values dump can take
#[cfg(feature = "cli")]
fn parse_values_payload(text: &str) -> ExportResult<Vec<(String, Grid)>> {
    if let Ok(rows) = serde_json::from_str::<Vec<Vec<serde_json::Value>>>(text) {
        return Ok(vec![("range".to_string(), values_to_grid(&rows))]);
    }
    if let Ok(response) = serde_json::from_str::<BatchGetResponse>(text) {
        if !response.value_ranges.is_empty() {
            return Ok(batch_to_grids(&response).into_iter().collect());
        }
    }
    if let Ok(value_range) = serde_json::from_str::<ValueRange>(text) {
        if !value_range.values.is_empty() {
            let name = if value_range.range.is_empty() {
                "range".to_string()
            } else {
                value_range.range.clone()
            };
            return Ok(vec![(name, values_to_grid(&value_range.values))]);
        }
    }
    Err(ExportError::invalid(
        "input is neither raw values, a value range, nor a batch response",
    ))
}

#[cfg(feature = "cli")]
fn report_diagnostics(diagnostics: &[Diagnostic], quiet: bool, color: bool) {
    if quiet || diagnostics.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("Conversion diagnostics ({}):", diagnostics.len());
    eprint!("{}", format_diagnostics(diagnostics, color));
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("Gridson - Spreadsheet range to nested JSON exporter");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Features:");
    println!("  ✓ Nested objects and lists via (obj)/(list) header tags");
    println!("  ✓ Multi-row headers for nested region fields");
    println!("  ✓ Typed scalars (integer, float, boolean, string)");
    println!("  ✓ Batch range fetch in one HTTP call");
    println!("  ✓ Offline conversion of fetched payloads");
    println!();
    println!("Repository: https://github.com/scipenai/gridson");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridson --features cli");
    eprintln!("  s2j [OPTIONS] [SPREADSHEET_ID]");
}
