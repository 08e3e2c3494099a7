//! Export the annual exceedance table as CSV.
//!
//! Columns: `year,water_body_type,total,exceeding,proportion`.

use ars_data::exceedance::{annual_exceedance, AnnualExceedanceTable};
use log::info;
use std::io::Write;

/// Column order of the exported table.
pub const HEADER: [&str; 5] = ["year", "water_body_type", "total", "exceeding", "proportion"];

/// Write `table` as CSV. The header row is written even when the table is empty.
pub fn write_table<W: Write>(table: &AnnualExceedanceTable, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in table.records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run_annual(input: &str, output: Option<&str>) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(input)?;
    let table = annual_exceedance(dataset.samples());
    info!(
        "{} annual records over years {:?}",
        table.len(),
        table.years()
    );

    write_table(&table, crate::output_writer(output)?)?;
    if let Some(path) = output {
        info!("Annual table written to {}", path);
    }
    Ok(())
}
