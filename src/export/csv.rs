//! Admin report as CSV.
//!
//! Fields are written verbatim: a comma inside a name shifts the columns of
//! that row, exactly like the spreadsheet export the admins are used to.

use crate::core::directory::Directory;
use crate::core::report::build_rows;
use crate::errors::{AppError, AppResult};
use crate::export::Document;
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_HEADERS: [&str; 8] = [
    "Nome",
    "RA",
    "Data",
    "Entrada",
    "Início Almoço",
    "Fim Almoço",
    "Saída",
    "Horas Trabalhadas",
];

/// `relatorio_pontos_<start>_<end>.csv`
pub fn csv_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("relatorio_pontos_{}_{}.csv", start, end)
}

/// Header row plus one row per entry, `\n` separated, no trailing newline.
pub fn export_csv(entries: &[&TimeEntry], directory: &Directory) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADERS)?;

    for row in build_rows(entries, directory) {
        wtr.write_record(row.cells())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    let mut text = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub fn csv_document(
    entries: &[&TimeEntry],
    directory: &Directory,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Document> {
    Ok(Document::text(
        csv_file_name(start, end),
        export_csv(entries, directory)?,
    ))
}
