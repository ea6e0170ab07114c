use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use roomplan::{
    format_dimension, init_logging, DesignerState, EditorConfig, LengthUnit, PlaceableKind,
    TextListView, VERSION,
};

#[derive(Parser, Debug)]
#[command(
    name = "roomplan",
    about = "Inspect and create room layout files",
    version = VERSION,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
struct Args {
    /// Layout file to load
    #[arg(required_unless_present = "new")]
    layout: Option<PathBuf>,

    /// Editor configuration (TOML); defaults to the platform config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unit for listed dimensions (m, ft or in)
    #[arg(long)]
    unit: Option<LengthUnit>,

    /// Write the default empty room to this path
    #[arg(long, value_name = "PATH", conflicts_with = "layout")]
    new: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = EditorConfig::load_or_default(args.config.as_deref())
        .context("Failed to load editor config")?;
    let unit = args.unit.unwrap_or(config.units.furniture_unit);
    let mut state = DesignerState::new(config);

    if let Some(path) = args.new {
        state.save_to_file(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let Some(path) = args.layout else {
        return Ok(());
    };
    state.load_from_file(&path)?;
    print_summary(&state, unit);

    let mut list = TextListView::new(std::io::stdout().lock());
    state.refresh_list(&mut list, &unit);
    tracing::debug!("Listed {} placeables", list.rows_written());

    Ok(())
}

fn print_summary(state: &DesignerState, unit: LengthUnit) {
    let room = state.scene().room();
    println!(
        "{}: {} × {} ({}, border {})",
        state.display_name(),
        format_dimension(room.width(), unit),
        format_dimension(room.depth(), unit),
        room.floor_texture(),
        if room.show_border { "on" } else { "off" }
    );
    let scene = state.scene();
    println!(
        "{} furniture, {} doors, {} windows",
        scene.count_of(PlaceableKind::Furniture),
        scene.count_of(PlaceableKind::Door),
        scene.count_of(PlaceableKind::Window)
    );
    tracing::info!("'{}' holds {} placeables", room.name, scene.len());
}
