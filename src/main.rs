#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use mapty::capability::{SystemClock, UuidIds};
use mapty::cli::{self, Cmd, CommonArgs, ListArgs};
use mapty::database::SqliteStore;
use mapty::{Extra, LoadPolicy, NewWorkout, Tracker, TrackerError, WorkoutStore, render, utils};

#[macro_use]
extern crate mapty;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let policy = if cli.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::Lenient
    };
    dlog!(
        "store={} key={} policy={:?}",
        cli.store.display(),
        cli.key,
        policy
    );

    let backend = SqliteStore::open(&cli.store)?;
    let store = WorkoutStore::new(backend)
        .with_key(cli.key)
        .with_policy(policy);
    let mut tracker = Tracker::open(store, Box::new(UuidIds), Box::new(SystemClock))
        .context("Loading stored workouts")?;

    match cli.cmd {
        Some(Cmd::Running { common, cadence }) => {
            record(&mut tracker, common, Extra::Cadence(cadence))
        }
        Some(Cmd::Cycling { common, elevation }) => {
            record(&mut tracker, common, Extra::ElevationGain(elevation))
        }
        Some(Cmd::Show { id }) => {
            let Some(w) = tracker.find(&id) else {
                bail!("No workout with id {id}");
            };
            println!("{}", render::popup(w));
            println!("{}", render::details_row(w));
            Ok(())
        }
        Some(Cmd::List(args)) => {
            list(&tracker, args);
            Ok(())
        }
        None => {
            list(&tracker, ListArgs::default());
            Ok(())
        }
    }
}

fn record(tracker: &mut Tracker<SqliteStore>, common: CommonArgs, extra: Extra) -> Result<()> {
    let coords = common.coords();
    if !coords.is_valid() {
        bail!(
            "Coordinates out of range: lat={} lng={}",
            coords.lat,
            coords.lng
        );
    }

    let input = NewWorkout {
        coords,
        distance: common.distance,
        duration: common.duration,
        extra,
    };

    match tracker.record(&input) {
        Ok(w) => {
            println!("{}", render::popup(w));
            println!("{}", render::list_entry(w));
            Ok(())
        }
        Err(e) if e.is_validation() => bail!("Inputs have to be positive numbers!"),
        Err(TrackerError::Store(e)) => Err(e).context("Saving workouts"),
        Err(e) => Err(e.into()),
    }
}

fn list(tracker: &Tracker<SqliteStore>, args: ListArgs) {
    let workouts = tracker.workouts();
    if workouts.is_empty() {
        tracing::info!("no workouts recorded yet");
        return;
    }

    for w in workouts.iter().take(args.count) {
        if args.details {
            println!("{}", render::details_row(w));
        } else {
            println!("{}", render::list_entry(w));
        }
    }
}
