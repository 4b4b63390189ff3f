use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use axi_report::{SolutionWriter, format_snapshot, format_summary};

mod case;
mod error;

use case::CaseFile;
use error::AppResult;

#[derive(Parser)]
#[command(name = "axi-cli")]
#[command(about = "Axisymmetric supersonic marching flow solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a case and report the flow field
    Run {
        /// Path to the case YAML file; the built-in reference case when omitted
        #[arg(long)]
        case: Option<PathBuf>,
        /// Write the text report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write one JSON snapshot per line to this file
        #[arg(long)]
        jsonl: Option<PathBuf>,
        /// Suppress station tables on stdout
        #[arg(long)]
        quiet: bool,
    },
    /// Print the built-in reference case as YAML
    Case,
    /// Check a case file without running it
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            case,
            output,
            jsonl,
            quiet,
        } => cmd_run(case.as_deref(), output.as_deref(), jsonl.as_deref(), quiet),
        Commands::Case => cmd_case(),
        Commands::Validate { case_path } => cmd_validate(&case_path),
    }
}

fn cmd_run(
    case_path: Option<&Path>,
    output: Option<&Path>,
    jsonl: Option<&Path>,
    quiet: bool,
) -> AppResult<()> {
    let case = match case_path {
        Some(path) => {
            println!("Loading case: {}", path.display());
            CaseFile::load(path)?
        }
        None => {
            println!("Running built-in reference case");
            CaseFile::reference()
        }
    };
    println!(
        "Marching solution: mach {:.2}, neta {}",
        case.mach, case.neta
    );

    let mut solver = case.solver()?;
    let mut writer = SolutionWriter::new();
    for line in case.header_lines() {
        writer.header_line(line);
    }

    let report = solver.run(|snapshot| {
        writer.push(snapshot);
        if !quiet {
            println!("{}", format_snapshot(snapshot));
        }
    });

    print!("{}", format_summary(&report));

    if let Some(path) = output {
        writer.write_text(path)?;
        println!("✓ Wrote text report: {}", path.display());
    }
    if let Some(path) = jsonl {
        writer.write_jsonl(path)?;
        println!(
            "✓ Wrote {} snapshots: {}",
            writer.snapshot_count(),
            path.display()
        );
    }

    Ok(())
}

fn cmd_case() -> AppResult<()> {
    let text = serde_yaml::to_string(&CaseFile::reference())?;
    print!("{}", text);
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = CaseFile::load(case_path)?;
    case.solver()?;
    println!("✓ Case is valid");
    Ok(())
}
