use anyhow::Context;
use clap::{Parser, Subcommand};
use elogen::prelude::*;
use std::{fs, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "elogen", version = elogen::VERSION, about = "Generate Eloquent model classes from a schema snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one model class per table in the snapshot
    Generate {
        /// Schema snapshot (JSON: tables, columns, foreign keys)
        #[arg(long)]
        snapshot: PathBuf,

        /// Generator configuration (TOML); defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the generated files are written into
        #[arg(long, default_value = "models")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            snapshot,
            config,
            out_dir,
        } => generate(&snapshot, config.as_deref(), &out_dir),
    }
}

fn generate(
    snapshot_path: &std::path::Path,
    config_path: Option<&std::path::Path>,
    out_dir: &std::path::Path,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GeneratorConfig::from_toml_str(&raw)?
        }
        None => GeneratorConfig::default(),
    };

    let raw = fs::read_to_string(snapshot_path)
        .with_context(|| format!("reading snapshot {}", snapshot_path.display()))?;
    let snapshot = SchemaSnapshot::from_json_str(&raw)?;

    let generator = Generator::new(config);
    let models = generator.generate_all(&snapshot)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for model in &models {
        let path = out_dir.join(&model.file_name);
        fs::write(&path, &model.contents)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(class = %model.class_name, path = %path.display(), "wrote model");
    }

    tracing::info!(count = models.len(), "generation complete");

    Ok(())
}
