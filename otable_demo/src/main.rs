// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `otable_core` and `otable_comfy`.

use otable_comfy::{ComfyFormatter, Preset, TableStyle};
use otable_core::{
    ColumnProjection, Field, PlainFormatter, ProjectionError, Slice, TableProjection, Value,
    impl_record, records,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Animal {
    name: String,
    legs: i64,
}

impl_record!(Animal { name, legs });

fn main() -> Result<(), ProjectionError> {
    init_logging();

    let zoo = records([
        Animal {
            name: "Ralf".into(),
            legs: 4,
        },
        Animal {
            name: "Simon".into(),
            legs: 0,
        },
        Animal {
            name: "Tripod".into(),
            legs: 3,
        },
    ]);

    let names = ColumnProjection::named("name", zoo.iter().cloned());
    let legs = ColumnProjection::named("legs", zoo.iter().cloned());
    let legged = ColumnProjection::new(
        Field::computed("legged", |a: &Animal| Value::from(a.legs > 0)),
        zoo.iter().cloned(),
    );
    let table = TableProjection::new([names.clone(), legs.clone(), legged])?;
    info!(rows = table.len(), columns = table.width(), "built table");

    println!("{}", table.render(&PlainFormatter)?);

    // Writes through a column slice land on the shared records.
    names.slice(Slice::FULL.step_by(2))?.set_slice(.., ["Joe", "Trip"])?;
    println!("names after slice assignment: {:?}", names.values()?);

    let row = table.get(1)?;
    row.set_by_name("legs", 2_i64)?;
    println!("row 1: {:?}", row.display()?);
    println!("simon now has {} legs", zoo[1].borrow().legs);

    if let Err(err) = legs.set_slice(1..2, [1_i64, 2]) {
        warn!(%err, "rejected slice assignment");
    }
    if let Err(err) = table.slice(..) {
        warn!(%err, "rejected table slice");
    }

    let style = TableStyle::default().with_preset(Preset::Utf8);
    println!("{}", table.render(&ComfyFormatter::new().with_style(style))?);

    let markdown = TableStyle::default().with_preset(Preset::Markdown);
    println!("{}", table.render(&ComfyFormatter::new().with_style(markdown))?);

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("otable_demo=info,otable_comfy=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
