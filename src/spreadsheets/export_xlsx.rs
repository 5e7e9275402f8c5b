use crate::domain::ListingRow;
use crate::errors::PipelineError;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

pub const SHEET_NAME: &str = "CSV";

/// Writes the listing table to `path`, replacing whatever was there.
/// Empty columns are left as blank cells.
pub fn export_listings_xlsx(rows: &[ListingRow], path: &Path) -> Result<(), PipelineError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| PipelineError::Xlsx(format!("Failed to name sheet: {}", e)))?;

    // Headers
    for (col, header) in ListingRow::COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                PipelineError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        write_row(worksheet, r, row).map_err(|e| {
            PipelineError::Xlsx(format!("Failed to write row for {}: {}", row.label(), e))
        })?;
    }

    workbook
        .save(path)
        .map_err(|e| PipelineError::Xlsx(format!("Failed to save {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "spreadsheet written");
    Ok(())
}

fn write_row(ws: &mut Worksheet, r: u32, row: &ListingRow) -> Result<(), XlsxError> {
    let text = |ws: &mut Worksheet, col: u16, value: &Option<String>| -> Result<(), XlsxError> {
        if let Some(v) = value {
            ws.write_string(r, col, v)?;
        }
        Ok(())
    };
    let number = |ws: &mut Worksheet, col: u16, value: Option<f64>| -> Result<(), XlsxError> {
        if let Some(v) = value {
            ws.write_number(r, col, v)?;
        }
        Ok(())
    };

    text(ws, 0, &row.url)?;
    number(ws, 1, row.rooms.map(|v| v as f64))?;
    text(ws, 2, &row.room_configuration)?;
    text(ws, 3, &row.price)?;
    text(ws, 4, &row.published)?;
    number(ws, 5, row.size)?;
    text(ws, 6, &row.address)?;
    text(ws, 7, &row.district)?;
    text(ws, 8, &row.city)?;
    number(ws, 9, row.build_year.map(|v| v as f64))?;
    number(ws, 10, row.latitude)?;
    number(ws, 11, row.longitude)?;

    Ok(())
}
