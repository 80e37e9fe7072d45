/// Tabular persistence for the normalized record set.
///
/// Writes the full dataset to a CSV file and an XLSX workbook. Both writers
/// emit the same columns in the same order and overwrite any existing file
/// of the same name unconditionally. There is no partial-write recovery;
/// an empty record set still produces a valid file containing only the
/// header row.

use std::error::Error;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::model::NormalizedEvent;

/// Default output file names, written to the working directory.
pub const CSV_FILENAME: &str = "us_disaster_database.csv";
pub const XLSX_FILENAME: &str = "us_disaster_database.xlsx";

/// Output column order. The headline column is populated only for
/// NWS-sourced rows and left blank otherwise.
pub const COLUMNS: [&str; 7] = [
    "date",
    "type",
    "estimated_loss",
    "location",
    "source",
    "disaster_number",
    "headline",
];

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Writes the record set to a CSV file at `path`.
pub fn write_csv(path: &Path, events: &[NormalizedEvent]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(COLUMNS)?;

    for event in events {
        let loss = event.estimated_loss.to_string();
        writer.write_record([
            event.date.as_str(),
            event.event_type.as_str(),
            loss.as_str(),
            event.location.as_str(),
            event.source.as_str(),
            event.disaster_number.as_str(),
            event.headline.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// XLSX
// ---------------------------------------------------------------------------

/// Writes the record set to an XLSX workbook at `path`.
///
/// The loss column is written as a number so spreadsheet consumers can
/// aggregate it; everything else is text.
pub fn write_xlsx(path: &Path, events: &[NormalizedEvent]) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (i, event) in events.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &event.date)?;
        worksheet.write_string(row, 1, &event.event_type)?;
        worksheet.write_number(row, 2, event.estimated_loss as f64)?;
        worksheet.write_string(row, 3, &event.location)?;
        worksheet.write_string(row, 4, event.source.as_str())?;
        worksheet.write_string(row, 5, &event.disaster_number)?;
        if let Some(headline) = &event.headline {
            worksheet.write_string(row, 6, headline)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
