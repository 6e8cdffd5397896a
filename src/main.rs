use chrono::Utc;
use clap::{Parser, Subcommand};
use folio::{config, emit, output, render, scan};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Gallery manifest generator for a portfolio site")]
#[command(long_about = "\
Gallery manifest generator for a portfolio site

Scans the public asset tree, one directory per category, and writes a typed
data module the site imports. File names become alt text and ids follow the
category table.

Asset structure (stock table):

  public/
  ├── vfx/gallery/
  │   ├── 3d/                  # \"3D\"         ids vfx-3d-001, vfx-3d-002, ...
  │   ├── additional/          # \"Additional\" ids vfx-add-NNN
  │   └── drawings/            # \"Drawings\"   ids vfx-drw-NNN
  └── photography/
      ├── commute/             # \"Commute\"    ids ph-com-NNN
      ├── me/
      ├── neighborhood/
      ├── protests/
      └── school/

Naming:
  hero-shot_01.webp → alt \"Hero Shot 01\"
  Files are taken in lexicographic order; missing directories are skipped.

Run 'folio gen-config' to generate a documented folio.toml.")]
#[command(version)]
struct Cli {
    /// Public asset root
    #[arg(long, default_value = "public", global = true)]
    public: PathBuf,

    /// Config file (stock defaults when missing)
    #[arg(long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    /// Directory for intermediate files (manifest.json)
    #[arg(long, default_value = ".folio-temp", global = true)]
    temp_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the asset tree and write the data module + manifest
    Generate {
        /// Data module to write
        #[arg(long, default_value = "src/data/gallery-images.ts")]
        output: PathBuf,
    },
    /// Scan and report without writing anything
    Check,
    /// Render a static HTML preview from the last generated manifest
    Preview {
        /// Output directory for the preview site
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Generate { output: module_path } => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Scanning {}", cli.public.display());
            let report = scan::scan(&cli.public, &site_config);
            output::print_scan_output(&report);

            let module = emit::render_module(&report.manifest, Utc::now());
            emit::write_module(&module_path, &module)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            emit::write_manifest_json(&manifest_path, &report.manifest)?;
            output::print_generate_output(&module_path, &manifest_path);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.public.display());
            let report = scan::scan(&cli.public, &site_config);
            output::print_scan_output(&report);
        }
        Command::Preview { dist } => {
            let site_config = config::load_config(&cli.config)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest = emit::read_manifest_json(&manifest_path)?;
            println!("==> Rendering preview → {}", dist.display());
            let pages = render::write_preview(&manifest, &site_config, &dist)?;
            output::print_preview_output(&pages, &dist);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
