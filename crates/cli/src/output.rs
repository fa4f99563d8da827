//! Rendering of the selected view.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chemtrack_inventory::ChemicalRecord;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable columns, one record per line.
    Table,
    /// The selected records as a JSON array, unchanged from input.
    Json,
    /// One CSV row per record.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Renders the selected records in the requested format.
pub fn render(
    records: &[&ChemicalRecord],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => render_table(records, out),
        OutputFormat::Json => render_json(records, out),
        OutputFormat::Csv => render_csv(records, out),
    }
}

/// Columns matching the mobile list view, with its fallback strings for
/// absent fields.
fn render_table(records: &[&ChemicalRecord], out: &mut impl Write) -> anyhow::Result<()> {
    let name_width = records
        .iter()
        .map(|record| record.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(
        out,
        "{:<w$}  {:<12}  {:<10}  {:<10}  {:<10}  LOCATION",
        "NAME",
        "CAS",
        "STATUS",
        "PURCHASED",
        "EXPIRES",
        w = name_width,
    )?;

    for record in records {
        writeln!(
            out,
            "{:<w$}  {:<12}  {:<10}  {:<10}  {:<10}  {}",
            record.name,
            record.formatted_cas().as_deref().unwrap_or("N/A"),
            record
                .status
                .as_ref()
                .map_or("Unknown".to_string(), |status| status.to_string()),
            record.purchase_date.as_deref().unwrap_or("Unknown"),
            record.expiration_date.as_deref().unwrap_or("Unknown"),
            record.location().as_deref().unwrap_or("Unknown"),
            w = name_width,
        )?;
    }

    Ok(())
}

fn render_json(records: &[&ChemicalRecord], out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

fn render_csv(records: &[&ChemicalRecord], out: &mut impl Write) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "id",
        "name",
        "cas",
        "purchase_date",
        "expiration_date",
        "school",
        "room",
        "cabinet",
        "shelf",
        "status",
        "quantity",
    ])?;

    for record in records {
        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.cas.as_deref().unwrap_or(""),
            record.purchase_date.as_deref().unwrap_or(""),
            record.expiration_date.as_deref().unwrap_or(""),
            record.school.as_deref().unwrap_or(""),
            record.room.as_deref().unwrap_or(""),
            record.cabinet.as_deref().unwrap_or(""),
            record.shelf.as_deref().unwrap_or(""),
            record.status.as_ref().map_or("", |status| status.as_str()),
            record.quantity.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
