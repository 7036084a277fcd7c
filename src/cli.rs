//! Headless command line front end.
//!
//! Loads the configuration, a catalog and optionally a saved design, applies
//! any requested additions, renders both frames and reports a summary. With
//! `--save` the resulting design is written to the configured designs
//! directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roomkit_designer::serialization::{load_catalog_file, load_design_file};
use roomkit_designer::{
    Canvas2dAdapter, InMemoryRepository, JsonDirRepository, PlacementStore, RenderAdapter,
    Scene3dAdapter, Selection, ViewportSize,
};
use roomkit_settings::{default_config_path, Config};

/// Lays out furniture in a room and reports the rendered frames.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "roomkit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
pub struct CliArgs {
    /// Configuration file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Furniture catalog (JSON array or API envelope)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Design document to load
    #[arg(long, value_name = "PATH")]
    pub design: Option<PathBuf>,

    /// Place a catalog template at the room center (repeatable)
    #[arg(long = "add", value_name = "ID")]
    pub add: Vec<String>,

    /// Save the result under NAME
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Runs the command and returns the report to print.
pub fn run(args: &CliArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match default_config_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(e) => {
                tracing::warn!("{}, using default configuration", e);
                Config::default()
            }
        },
    };

    let mut store =
        PlacementStore::with_options(config.default_room(), config.layout_options())?;

    if let Some(path) = &args.catalog {
        let templates = load_catalog_file(path)?;
        let kept = store.load_catalog(templates);
        tracing::info!("Catalog loaded: {} templates", kept);
    }

    if let Some(path) = &args.design {
        let design = load_design_file(path)?;
        store.load_design(&design)?;
    }

    for template_id in &args.add {
        store.add_furniture(template_id)?;
    }

    let viewport = ViewportSize::new(config.layout.viewport_width, config.layout.viewport_height);
    let selection = Selection::new();
    let frame2d =
        Canvas2dAdapter::new(viewport, config.layout.fit_margin).frame(&store, &selection)?;
    let frame3d =
        Scene3dAdapter::with_lighting(config.lighting_options()).frame(&store, &selection)?;

    let room = store.room();
    let mut report = format!(
        "Room '{}': {} x {} x {} m\n{}\nLighting: {}\nItems: {} drawn, {} skipped\n",
        room.name,
        room.width,
        room.length,
        room.height,
        frame2d.transform,
        frame3d.lighting,
        frame2d.items.len(),
        frame2d.skipped.len(),
    );
    for (rect, node) in frame2d.items.iter().zip(&frame3d.nodes) {
        report.push_str(&format!(
            "  #{} {:<20} at ({:.2}, {:.2}) m, {:.0} deg, scale {:.2}\n",
            rect.index, rect.label, node.position[0], node.position[2], rect.angle, node.scale
        ));
    }

    if let Some(name) = &args.save {
        let saved = match &config.storage.designs_dir {
            Some(dir) => {
                let mut repo = JsonDirRepository::open(dir)?;
                store.save_design(&mut repo, name)?
            }
            None => {
                tracing::warn!("No designs directory configured, design kept in memory only");
                store.save_design(&mut InMemoryRepository::new(), name)?
            }
        };
        report.push_str(&format!(
            "Saved design '{}' ({})\n",
            saved.name,
            saved.id.unwrap_or_default()
        ));
    }

    if store.is_empty() {
        tracing::info!("No furniture placed; pass --design or --add");
    }

    Ok(report)
}
