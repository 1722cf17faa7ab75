//! Hangar placement CLI

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use hangar_cli::report;
use hangar_cli::JsonStore;
use hangar_core::{
    resolve_type, Aircraft, Config, Hangar, OptimizationSummary, Planner, CUSTOM_TYPE,
    DEFAULT_COLOR, DEFAULT_SAFETY_MARGIN,
};
use hangar_packer::GridPacker;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hangar")]
#[command(about = "Aircraft parking optimization for hangar floors")]
#[command(version)]
struct Cli {
    /// Path to the JSON store
    #[arg(short, long, global = true, default_value = "hangar.json")]
    store: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hangar configuration
    Show,

    /// Update the hangar configuration
    Set {
        #[arg(long)]
        name: Option<String>,

        /// Width in meters
        #[arg(long)]
        width: Option<f64>,

        /// Length in meters
        #[arg(long)]
        length: Option<f64>,

        /// Height in meters
        #[arg(long)]
        height: Option<f64>,
    },

    /// List predefined aircraft types
    Types,

    /// Manage the aircraft inventory
    Aircraft {
        #[command(subcommand)]
        command: AircraftCommands,
    },

    /// Compute a placement for the stored fleet
    Optimize {
        /// Clearance around each aircraft in meters
        #[arg(short, long, default_value_t = DEFAULT_SAFETY_MARGIN)]
        margin: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Draw a floor map
        #[arg(long)]
        map: bool,

        /// Maximum floor map width in characters
        #[arg(long, default_value = "80")]
        map_width: usize,
    },
}

#[derive(Subcommand)]
enum AircraftCommands {
    /// Add an aircraft
    Add {
        #[arg(short, long)]
        name: String,

        /// Preset type, or "Custom"; presets fill in dimensions unless given explicitly
        #[arg(short = 't', long = "type")]
        aircraft_type: Option<String>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        length: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        wing_span: Option<f64>,

        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,
    },

    /// List stored aircraft
    List,

    /// Remove an aircraft by id
    Remove { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let store = JsonStore::open(&cli.store);

    match cli.command {
        Commands::Show => {
            println!("{}", report::render_hangar(&store.load_hangar()));
        }

        Commands::Set {
            name,
            width,
            length,
            height,
        } => {
            let current = store.load_hangar();
            let hangar = Hangar::new(
                name.unwrap_or_else(|| current.name().to_string()),
                width.unwrap_or(current.width()),
                length.unwrap_or(current.length()),
                height.unwrap_or(current.height()),
            );
            hangar.validate()?;

            store
                .save_hangar(&hangar)
                .with_context(|| format!("saving hangar to {}", store.path().display()))?;
            println!("{}", report::render_hangar(&hangar));
        }

        Commands::Types => {
            println!("Available aircraft types:");
            print!("{}", report::render_types());
        }

        Commands::Aircraft { command } => run_aircraft(&store, command)?,

        Commands::Optimize {
            margin,
            json,
            map,
            map_width,
        } => {
            let hangar = store.load_hangar();
            let fleet = store.load_aircraft();

            if fleet.is_empty() {
                println!("No aircraft added. Use 'hangar aircraft add' to build a fleet first.");
                return Ok(());
            }

            let packer = GridPacker::new(Config::new().with_safety_margin(margin));
            let result = packer.plan(&hangar, &fleet)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            print!(
                "{}",
                report::render_summary(&OptimizationSummary::new(&hangar, &result))
            );
            print!("{}", report::render_placements(&result));

            if map {
                println!();
                print!("{}", report::render_floor_map(&hangar, &result, map_width));
            }
        }
    }

    Ok(())
}

fn run_aircraft(store: &JsonStore, command: AircraftCommands) -> anyhow::Result<()> {
    match command {
        AircraftCommands::Add {
            name,
            aircraft_type,
            width,
            length,
            height,
            wing_span,
            color,
        } => {
            let preset = resolve_type(aircraft_type.as_deref())?;
            let id = store.new_aircraft_id();

            let mut craft = match (preset, width, length, height) {
                (Some(preset), w, l, h) => Aircraft::new(
                    id,
                    name,
                    w.unwrap_or(preset.default_width),
                    l.unwrap_or(preset.default_length),
                    h.unwrap_or(preset.default_height),
                )
                .with_type(preset.name)
                .with_wing_span(preset.default_wing_span),
                (None, Some(w), Some(l), Some(h)) => {
                    Aircraft::new(id, name, w, l, h).with_type(CUSTOM_TYPE)
                }
                (None, ..) => bail!(
                    "give a known --type (see 'hangar types') or all of --width, --length and --height"
                ),
            };

            if let Some(span) = wing_span {
                craft = craft.with_wing_span(span);
            }
            craft = craft.with_color(color.unwrap_or_else(|| DEFAULT_COLOR.to_string()));
            craft.validate()?;

            let summary = format!("Added {} ({})", craft.name(), craft.id());
            store
                .add_aircraft(craft)
                .with_context(|| format!("saving aircraft to {}", store.path().display()))?;
            println!("{}", summary);
        }

        AircraftCommands::List => {
            println!("{}", report::render_fleet(&store.load_aircraft()));
        }

        AircraftCommands::Remove { id } => {
            if store.remove_aircraft(&id)? {
                println!("Removed {}", id);
            } else {
                bail!("no aircraft with id '{}'", id);
            }
        }
    }

    Ok(())
}
