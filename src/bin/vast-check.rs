use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use vast_check::{Profile, Repair, ValidateOptions, ValidationResult};

/// Command-line arguments for the VAST conformance checker
#[derive(Debug, Parser)]
#[command(name = "vast-check")]
#[command(about = "Check VAST ad markup against the 2.0 or 3.0 rule profile")]
#[command(version)]
struct Args {
    /// Markup file to check
    file: PathBuf,

    #[arg(long, default_value = "3.0", help = "Rule profile (2.0 or 3.0)")]
    profile: Profile,

    /// Version to check instead of the root `version` attribute
    #[arg(long)]
    version_override: Option<String>,

    #[arg(long, help = "Repair deprecated constructs before validating")]
    fix: bool,

    #[arg(long, short, help = "Write the repaired markup here instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the document is conformant.
fn run(args: &Args) -> Result<bool> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut options = ValidateOptions::new(args.profile);
    if let Some(version) = &args.version_override {
        options = options.with_version_override(version.as_str());
    }
    log::info!("checking {} with profile {}", args.file.display(), args.profile);

    if args.fix {
        let repair = vast_check::repair_with(&input, &options)
            .with_context(|| format!("{} is not well-formed XML", args.file.display()))?;
        write_repaired(args, &repair)?;
        report(args, &repair.result, Some(&repair))?;
        Ok(repair.result.is_conformant())
    } else {
        let result = vast_check::check_with(&input, &options)
            .with_context(|| format!("{} is not well-formed XML", args.file.display()))?;
        report(args, &result, None)?;
        Ok(result.is_conformant())
    }
}

fn write_repaired(args: &Args, repair: &Repair) -> Result<()> {
    let remediation = &repair.remediation;
    log::info!(
        "repair: {} attribute(s) renamed, {} removed, {} empty ClickThrough removed",
        remediation.renamed_attributes,
        remediation.removed_attributes,
        remediation.removed_click_throughs
    );
    match &args.output {
        Some(path) => fs::write(path, &remediation.text)
            .with_context(|| format!("failed to write {}", path.display())),
        // JSON reports carry the text themselves.
        None if args.format == Format::Json => Ok(()),
        None => {
            print!("{}", remediation.text);
            Ok(())
        }
    }
}

fn report(args: &Args, result: &ValidationResult, repair: Option<&Repair>) -> Result<()> {
    match args.format {
        Format::Json => {
            let json = match repair {
                Some(repair) => serde_json::to_string_pretty(repair)?,
                None => serde_json::to_string_pretty(result)?,
            };
            println!("{}", json);
        }
        Format::Text => {
            for d in result.diagnostics() {
                eprintln!("{}", d);
            }
            eprintln!(
                "{}: {} ({} fatal, {} advisory)",
                args.file.display(),
                if result.is_conformant() {
                    "conformant"
                } else {
                    "NOT conformant"
                },
                result.fatal.len(),
                result.advisory.len()
            );
        }
    }
    Ok(())
}
