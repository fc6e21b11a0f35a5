//! `czml-simple` — Builds the sample access-visualization document and writes
//! it as CZML.
//!
//! The document holds a preamble with a one-day clock, a grouping packet for
//! access intervals, an area target, a facility and a satellite whose path is
//! shown over the whole day.
//!
//! **Usage:**
//! ```
//! czml-simple [--out <file>] [--compact] [--indent <n>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use czml::enums::{
    HorizontalOrigin, InterpolationAlgorithm, LabelStyle, ReferenceFrame, VerticalOrigin,
};
use czml::{Composer, Document, Format, IntervalValue, Object, Registry, TimeInterval};
use tracing::info;
use tracing_subscriber::EnvFilter;

const ACCESSES_ID: &str = "9927edc4-e87a-4e1f-9b8b-0bfb3b05b227";

const GEOEYE_TO_ISS: [&str; 10] = [
    "2012-03-15T10:16:06.97400000000198Z/2012-03-15T10:33:59.3549999999959Z",
    "2012-03-15T11:04:09.73799999999756Z/2012-03-15T11:21:04.51900000000023Z",
    "2012-03-15T11:52:06.94400000000314Z/2012-03-15T12:08:18.8840000000055Z",
    "2012-03-15T12:40:57.2069999999949Z/2012-03-15T12:54:39.301999999996Z",
    "2012-03-15T13:29:44.5040000000008Z/2012-03-15T13:41:05.96899999999732Z",
    "2012-03-15T14:20:16.8450000000012Z/2012-03-15T14:25:48.0559999999969Z",
    "2012-03-16T07:01:44.4309999999823Z/2012-03-16T07:06:19.6309999999939Z",
    "2012-03-16T07:46:00.457999999984168Z/2012-03-16T07:57:20.8470000000088Z",
    "2012-03-16T08:32:14.5289999999804Z/2012-03-16T08:46:17.0109999999986Z",
    "2012-03-16T09:18:28.4590000000026Z/2012-03-16T09:35:16.6410000000033Z",
];

const FACILITY_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/\
9hAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAcdvqGQAAACvSURBVDhPrZDRDcMgDAU9\
GqN0lIzijw6SUbJJygUeNQgSqepJTyHG91LVVpwDdfxM3T9TSl1EXZvDwii471fivK73cBFFQNTT/d2KoGpfGOpSIkhUpgUM\
xq9DFEsWv4IXhlyCnhBFnZcFEEuYqbiUlNwWgMTdrZ3JbQFoEVG53rd8ztG9aPJMnBUQf/VFraBJeWnLS0RfjbKyLJA8FkT5\
seDYS1Qwyv8t0B/5C2ZmH2/eTGNNBgMmAAAAAElFTkSuQmCC";

const SATELLITE_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/\
9hAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAcdvqGQAAADJSURBVDhPnZHRDcMgEEMZ\
jVEYpaNklIzSEfLfD4qNnXAJSFWfhO7w2Zc0Tf9QG2rXrEzSUeZLOGm47WoH95x3Hl3jEgilvDgsOQUTqsNl68ezEwn1vae6\
lceSEEYvvWNT/Rxc4CXQNGadho1NXoJ+9iaqc2xi2xbt23PJCDIB6TQjOC6Bho/sDy3fBQT8PrVhibU7yBFcEPaRxOoeTwbw\
ByCOYf9VGp1BYI1BA+EeHhmfzKbBoJEQwn1yzUZtyspIQUha85MpkNIXB7GizqDEECsAAAAASUVORK5CYII=";

/// Write the sample document.
#[derive(Parser)]
#[command(name = "czml-simple", about = "Write the sample CZML document")]
struct Args {
    /// Output file; standard output when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render without whitespace.
    #[arg(long)]
    compact: bool,

    /// Spaces per indentation level for pretty output.
    #[arg(long, default_value = "4")]
    indent: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let format = if args.compact {
        Format::Compact
    } else {
        Format::Pretty {
            indent: args.indent,
        }
    };

    let registry = Registry::standard().context("Failed to compile the property catalogue")?;
    let document = simple(registry)?;
    info!(packets = document.len(), "built sample document");

    let text = document
        .render(format)
        .context("Failed to render the document")?;
    match &args.out {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("  Written: {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .with_context(|| format!("Invalid date {y}-{m}-{d}T{h}"))
}

fn label(registry: &Registry, text: &str) -> Result<Object> {
    Ok(registry
        .build("Label")
        .with("horizontalOrigin", HorizontalOrigin::Left)
        .with("show", true)
        .with("style", LabelStyle::FillAndOutline)
        .with("outlineWidth", 2)
        .with("text", text)
        .with("verticalOrigin", VerticalOrigin::Center)
        .finish()?)
}

fn billboard(registry: &Registry, image: &str) -> Result<Object> {
    Ok(registry
        .build("Billboard")
        .with("horizontalOrigin", HorizontalOrigin::Center)
        .with("image", image)
        .with("scale", 1.5)
        .with("show", true)
        .with("verticalOrigin", VerticalOrigin::Center)
        .finish()?)
}

fn fixed_position(registry: &Registry, cartesian: [f64; 3]) -> Result<Object> {
    Ok(registry
        .build("Position")
        .with("cartesian", cartesian)
        .finish()?)
}

fn simple(registry: &Registry) -> Result<Document> {
    let start = utc(2012, 3, 15, 10)?;
    let end = utc(2012, 3, 16, 10)?;
    let day = TimeInterval::new(start, end);
    let composer = Composer::new(registry);

    let clock = registry
        .build("Clock")
        .with("interval", day.clone())
        .with("currentTime", start)
        .with("multiplier", 60)
        .finish()?;
    let preamble = composer
        .preamble()
        .with("name", "simple")
        .with("clock", clock)
        .finish()?;

    let accesses = composer
        .packet()
        .with("id", ACCESSES_ID)
        .with("name", "Accesses")
        .with("description", "List of Accesses")
        .finish()?;

    let geoeye_access_windows = GEOEYE_TO_ISS
        .iter()
        .map(|text| TimeInterval::parse(text))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid access interval")?;
    let geoeye_to_iss = composer
        .packet()
        .with("id", "Satellite/Geoeye1-to-Satellite/ISS")
        .with("name", "Geoeye1 to ISS")
        .with("parent", ACCESSES_ID)
        .with("availability", geoeye_access_windows)
        .finish()?;
    let agi_to_iss = composer
        .packet()
        .with("id", "Facility/AGI-to-Satellite/ISS")
        .with("name", "AGI to ISS")
        .with("parent", ACCESSES_ID)
        .finish()?;
    let agi_to_sensor = composer
        .packet()
        .with("id", "Facility/AGI-to-Satellite/Geoeye1/Sensor/Sensor")
        .with("name", "AGI to Sensor")
        .with("parent", ACCESSES_ID)
        .with("description", "<h2>No accesses</h2>")
        .finish()?;

    let pennsylvania = composer
        .packet()
        .with("id", "AreaTarget/Pennsylvania")
        .with("name", "Pennsylvania")
        .with("label", label(registry, "Pennsylvania")?)
        .with(
            "position",
            fixed_position(
                registry,
                [1152255.80150063, -4694317.951340558, 4147335.9067563135],
            )?,
        )
        .finish()?;

    let agi = composer
        .packet()
        .with("id", "Facility/AGI")
        .with("name", "AGI")
        .with("availability", day.clone())
        .with("billboard", billboard(registry, FACILITY_IMAGE)?)
        .with("label", label(registry, "AGI")?)
        .with(
            "position",
            fixed_position(
                registry,
                [1216469.9357990976, -4736121.71856379, 4081386.8856866374],
            )?,
        )
        .finish()?;

    let path = registry
        .build("Path")
        .with("show", vec![IntervalValue::new(day.clone(), true)])
        .with("width", 1)
        .with("resolution", 120)
        .finish()?;
    let orbit = registry
        .build("Position")
        .with("interpolationAlgorithm", InterpolationAlgorithm::Lagrange)
        .with("interpolationDegree", 5)
        .with("referenceFrame", ReferenceFrame::Inertial)
        .with("epoch", start)
        .finish()?;
    let geoeye = composer
        .packet()
        .with("id", "Satellite/Geoeye1")
        .with("name", "Geoeye1")
        .with("availability", day)
        .with("billboard", billboard(registry, SATELLITE_IMAGE)?)
        .with("label", label(registry, "Geoeye 1")?)
        .with("path", path)
        .with("position", orbit)
        .finish()?;

    Ok(composer.document(vec![
        preamble,
        accesses,
        geoeye_to_iss,
        agi_to_iss,
        agi_to_sensor,
        pennsylvania,
        agi,
        geoeye,
    ])?)
}
