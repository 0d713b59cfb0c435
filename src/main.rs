//! Tile-Inspector CLI.
//!
//! Legt Karten an, spielt Command-Skripte (JSON) gegen eine Karte ab und gibt
//! den Element-Stapel einzelner Tiles aus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::IVec2;
use std::path::{Path, PathBuf};
use tile_inspector::{
    load_map_file, save_map_file, CommandMode, InspectorCommand, InspectorController,
    InspectorError, InspectorOptions, InspectorState, TileMap,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Direkte Bearbeitung von Tile-Element-Stapeln")]
struct Args {
    /// Optionen-Datei (Standard: tile_inspector.toml neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Neue Karte mit flacher Oberfläche anlegen
    New {
        /// Zieldatei
        out: PathBuf,

        /// Kantenlänge in Tiles (Standard aus den Optionen)
        #[arg(long)]
        size: Option<u16>,

        /// Oberflächenhöhe (Standard aus den Optionen)
        #[arg(long)]
        height: Option<u8>,
    },

    /// Command-Skript (JSON-Liste) auf eine Karte anwenden
    Apply {
        /// Kartendatei
        map: PathBuf,

        /// JSON-Datei mit einer Liste von Commands
        script: PathBuf,

        /// Zieldatei (Standard: Kartendatei überschreiben)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skript auf einer Kopie der Karte durchspielen, nichts schreiben
        #[arg(long)]
        dry_run: bool,
    },

    /// Element-Stapel eines Tiles ausgeben
    Dump {
        /// Kartendatei
        map: PathBuf,

        #[arg(long)]
        x: i32,

        #[arg(long)]
        y: i32,
    },
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Tile-Inspector v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(InspectorOptions::config_path);
    let options = InspectorOptions::load_from_file(&config_path);

    match args.command {
        Command::New { out, size, height } => new_map(&out, options, size, height),
        Command::Apply {
            map,
            script,
            out,
            dry_run,
        } => apply_script(&map, &script, out.as_deref(), dry_run, options),
        Command::Dump { map, x, y } => dump_tile(&map, IVec2::new(x, y)),
    }
}

fn new_map(
    out: &Path,
    options: InspectorOptions,
    size: Option<u16>,
    height: Option<u8>,
) -> Result<()> {
    let size = size.unwrap_or(options.map_size);
    let tile_count = usize::from(size) * usize::from(size);
    anyhow::ensure!(
        tile_count <= options.element_capacity,
        "Karte {}x{} braucht {} Elemente, Kapazität ist {}",
        size,
        size,
        tile_count,
        options.element_capacity
    );
    let height = height.unwrap_or(options.surface_height);
    let map = TileMap::new(size, options.element_capacity, height);
    save_map_file(out, &map)?;
    println!("Karte {}x{} angelegt: {}", size, size, out.display());
    Ok(())
}

fn apply_script(
    map_path: &Path,
    script_path: &Path,
    out: Option<&Path>,
    dry_run: bool,
    options: InspectorOptions,
) -> Result<()> {
    let map = load_map_file(map_path)?;
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("Skript nicht lesbar: {}", script_path.display()))?;
    let commands: Vec<InspectorCommand> = serde_json::from_str(&content)
        .with_context(|| format!("Skript fehlerhaft: {}", script_path.display()))?;

    let total = commands.len();
    let mut state = InspectorState::with_map(map, options);
    let mut controller = InspectorController::new();
    let rejected = |(executed, e): (usize, InspectorError)| {
        anyhow::anyhow!("Command {} von {} abgelehnt: {}", executed + 1, total, e)
    };

    if dry_run {
        let executed = controller.simulate(&state, commands).map_err(rejected)?;
        println!("{} Commands geprüft, keine Änderungen geschrieben", executed);
        return Ok(());
    }

    let executed = controller
        .replay(&mut state, commands, CommandMode::Apply)
        .map_err(rejected)?;

    let target = out.unwrap_or(map_path);
    save_map_file(target, &state.map)?;
    println!(
        "{} Commands angewendet, {} Tiles geändert: {}",
        executed,
        state.invalidation.dirty_tiles().count(),
        target.display()
    );
    Ok(())
}

fn dump_tile(map_path: &Path, coord: IVec2) -> Result<()> {
    let map = load_map_file(map_path)?;
    let elements = map
        .tile_elements(coord)
        .with_context(|| format!("Tile ({}, {}) liegt außerhalb der Karte", coord.x, coord.y))?;

    println!("Tile ({}, {}): {} Elemente", coord.x, coord.y, elements.len());
    for (index, element) in elements.iter().enumerate() {
        println!(
            "{:>3}  {:<9} {:>3}..{:<3} dir {} quad {:04b}  {:?}",
            index,
            format!("{:?}", element.kind()),
            element.base_height,
            element.clearance_height,
            element.direction,
            element.occupied_quadrants,
            element.data
        );
    }
    Ok(())
}
