//! Text forms of the map marker popup and the workout list entry.

use crate::types::{Activity, Workout, WorkoutKind};

pub const fn icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// Marker popup content.
pub fn popup(w: &Workout) -> String {
    format!("{} {}", icon(w.kind()), w.description())
}

/// One line of the workout list.
pub fn list_entry(w: &Workout) -> String {
    let base = format!(
        "{}  {} {} km  ⏱ {} min",
        w.description(),
        icon(w.kind()),
        w.distance(),
        w.duration()
    );

    match *w.activity() {
        Activity::Running { cadence, pace } => {
            format!("{base}  ⚡️ {pace:.1} min/km  🦶🏼 {cadence} spm")
        }
        Activity::Cycling {
            elevation_gain,
            speed,
        } => format!("{base}  ⚡️ {speed:.1} km/h  ⛰ {elevation_gain} m"),
    }
}

/// Tab separated row with every field a renderer needs.
pub fn details_row(w: &Workout) -> String {
    let c = w.coords();
    let (metric, extra) = match *w.activity() {
        Activity::Running { cadence, pace } => (format!("{pace:.2}"), cadence),
        Activity::Cycling {
            elevation_gain,
            speed,
        } => (format!("{speed:.2}"), elevation_gain),
    };
    format!(
        "{}\t{}\t{:.5},{:.5}\t{}\t{}\t{metric}\t{extra}\t{}",
        w.id(),
        w.kind(),
        c.lat,
        c.lng,
        w.distance(),
        w.duration(),
        w.created_at().to_rfc3339()
    )
}
