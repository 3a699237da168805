use clap::{Parser, Subcommand};
use iconize::backend::{ConvertPlan, default_chain};
use iconize::convert::{ConvertError, convert};
use iconize::{config, doctor, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "iconize")]
#[command(about = "Resize a source icon into a fixed set of square raster copies")]
#[command(long_about = "\
Resize a source icon into a fixed set of square raster copies

Given src/icon.png and sizes [16, 48, 128], produces src/icon-16.png,
src/icon-48.png and src/icon-128.png, each exactly the named size.

Backends are tried in a fixed order and the first available one handles
the whole run:

  1. raster       built into the binary (default cargo feature)
  2. sips         macOS system image tool
  3. imagemagick  `magick` (v7) or `convert` (v6) from PATH

Run 'iconize doctor' to see which backends this host offers, and
'iconize gen-config' to print a documented iconize.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = "iconize.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize the source icon to every configured size
    Convert(ConvertArgs),
    /// Report which resizing backends are available on this host
    Doctor,
    /// Print a stock iconize.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Source icon path (overrides config)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Target size in pixels; repeat for multiple sizes (overrides config)
    #[arg(long = "size", value_name = "PIXELS")]
    sizes: Vec<u32>,

    /// Force one backend instead of walking the fallback chain
    #[arg(long, value_name = "NAME")]
    backend: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert(args) => run_convert(&cli.config, args),
        Command::Doctor => run_doctor(),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            ExitCode::SUCCESS
        }
    }
}

fn run_convert(config_path: &std::path::Path, args: ConvertArgs) -> ExitCode {
    let file_config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let effective = config::IconConfig {
        source: args.source.unwrap_or(file_config.source),
        sizes: if args.sizes.is_empty() {
            file_config.sizes
        } else {
            args.sizes
        },
    };
    if let Err(e) = effective.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let mut chain = default_chain();
    if let Some(name) = &args.backend {
        chain.retain(|b| b.name() == name.as_str());
        if chain.is_empty() {
            eprintln!("Error: unknown backend '{name}'");
            eprintln!(
                "Known backends: {}",
                default_chain()
                    .iter()
                    .map(|b| b.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return ExitCode::FAILURE;
        }
    }

    for line in output::format_banner("Icon Resizing") {
        println!("{line}");
    }

    let plan = ConvertPlan::new(&effective.source, &effective.sizes);
    let result = convert(&plan, &chain, &mut |event| {
        for line in output::format_convert_event(&event) {
            println!("{line}");
        }
    });

    match result {
        Ok(report) => {
            println!("{}", output::separator());
            for line in output::format_report(&report) {
                println!("{line}");
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e @ ConvertError::MissingSource(_)) => {
            eprintln!("Error: {e}");
            eprintln!("Make sure the source icon exists before running convert.");
            ExitCode::FAILURE
        }
        Err(ConvertError::NoBackendAvailable) => {
            for line in output::format_remediation() {
                println!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run_doctor() -> ExitCode {
    let chain = default_chain();
    let statuses = doctor::diagnose(&chain);
    for line in output::format_doctor(&statuses) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
