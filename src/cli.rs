use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DEFAULT_KEY;
use crate::types::Coords;

const DEFAULT_STORE_PATH: &str = "mapty.sqlite";
const DEFAULT_LIST_COUNT: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "mapty",
    about = "Record running and cycling workouts at map coordinates"
)]
pub struct Cli {
    /// SQLite file holding the workout store.
    #[arg(long, env = "MAPTY_STORE", default_value = DEFAULT_STORE_PATH, global = true)]
    pub store: PathBuf,

    /// Key the workout collection is stored under.
    #[arg(long, default_value = DEFAULT_KEY, global = true)]
    pub key: String,

    /// Fail on any corrupt stored workout instead of skipping it.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Record a run.
    Running {
        #[command(flatten)]
        common: CommonArgs,

        /// Steps per minute.
        #[arg(long)]
        cadence: f64,
    },
    /// Record a ride.
    Cycling {
        #[command(flatten)]
        common: CommonArgs,

        /// Elevation gain in meters; negative for descents.
        #[arg(long, allow_negative_numbers = true)]
        elevation: f64,
    },
    /// Print stored workouts, oldest first.
    List(ListArgs),
    /// Print one workout's popup and every field.
    Show {
        /// Workout id as printed by `list --details`.
        id: String,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct CommonArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Kilometers.
    #[arg(long, allow_negative_numbers = true)]
    pub distance: f64,

    /// Minutes.
    #[arg(long, allow_negative_numbers = true)]
    pub duration: f64,
}

impl CommonArgs {
    pub const fn coords(&self) -> Coords {
        Coords::new(self.lat, self.lng)
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ListArgs {
    /// Show at most this many workouts.
    #[arg(long, default_value_t = DEFAULT_LIST_COUNT)]
    pub count: usize,

    /// Print tab separated rows with every field.
    #[arg(long)]
    pub details: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_LIST_COUNT,
            details: false,
        }
    }
}
