//! Monthly timesheet ("espelho de ponto"): listing, acceptance and PDF.

use crate::core::point::RemotePunch;
use crate::db::records::{ESPELHO_ACEITES, Filter, Order, REMOTE_TIME_ENTRIES, RecordStore};
use crate::errors::AppResult;
use crate::export::Document;
use crate::export::pdf::PdfManager;
use crate::models::employee::Employee;
use crate::utils::date::YearMonth;
use crate::utils::time::punch_timestamp;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const ESPELHO_TITLE: &str = "Espelho de Ponto Mensal";
pub const ESPELHO_HEADERS: [&str; 2] = ["Data/Hora", "Tipo"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EspelhoAceite {
    pub employee_id: String,
    pub mes_referencia: String,
    pub aceito: bool,
}

/// Local midnight of `d` rendered like the stored punch timestamps.
fn local_midnight_stamp(d: NaiveDate) -> String {
    let naive = d.and_hms_opt(0, 0, 0).unwrap_or_default();
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive));
    punch_timestamp(&local)
}

/// Remote punches of `employee_id` inside `month` (local calendar),
/// oldest first.
pub fn month_punches(
    store: &dyn RecordStore,
    employee_id: &str,
    month: YearMonth,
) -> AppResult<Vec<RemotePunch>> {
    let rows = store.query(
        REMOTE_TIME_ENTRIES,
        &[
            Filter::eq("employee_id", employee_id),
            Filter::gte("timestamp", local_midnight_stamp(month.first_day())),
            Filter::lt("timestamp", local_midnight_stamp(month.next_first_day())),
        ],
        Some(&Order::asc("timestamp")),
    )?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<RemotePunch>(row) {
            Ok(p) => out.push(p),
            Err(e) => tracing::warn!(employee_id, error = %e, "skipping malformed remote punch"),
        }
    }
    Ok(out)
}

/// Employee confirms the timesheet of `month`.
pub fn accept(store: &dyn RecordStore, employee_id: &str, month: YearMonth) -> AppResult<()> {
    let row = EspelhoAceite {
        employee_id: employee_id.to_string(),
        mes_referencia: month.key(),
        aceito: true,
    };
    store.insert(ESPELHO_ACEITES, serde_json::to_value(&row)?)?;
    tracing::info!(employee_id, month = %month.key(), "espelho accepted");
    Ok(())
}

pub fn is_accepted(store: &dyn RecordStore, employee_id: &str, month: YearMonth) -> AppResult<bool> {
    let rows = store.query(
        ESPELHO_ACEITES,
        &[
            Filter::eq("employee_id", employee_id),
            Filter::eq("mes_referencia", month.key()),
            Filter::eq("aceito", json!(true)),
        ],
        None,
    )?;
    Ok(!rows.is_empty())
}

/// `DD/MM/YYYY HH:MM:SS` in local time; unparsable stamps are shown as stored.
pub fn display_timestamp(stamp: &str) -> String {
    DateTime::parse_from_rfc3339(stamp)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%d/%m/%Y %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| stamp.to_string())
}

pub fn espelho_file_name(month: YearMonth) -> String {
    format!("Espelho_Ponto_{}.pdf", month.file_key())
}

pub fn espelho_rows(punches: &[RemotePunch]) -> Vec<Vec<String>> {
    punches
        .iter()
        .map(|p| vec![display_timestamp(&p.timestamp), p.punch.label().to_string()])
        .collect()
}

pub fn render_espelho(employee: &Employee, punches: &[RemotePunch], month: YearMonth) -> Document {
    let preamble = vec![
        format!("Funcionário: {}", employee.name),
        format!("RA: {}    CPF: {}", employee.ra, employee.cpf),
        format!("Mês de Referência: {}", month.key()),
    ];

    let mut pdf = PdfManager::new();
    pdf.write_table(
        ESPELHO_TITLE,
        &preamble,
        &ESPELHO_HEADERS,
        &espelho_rows(punches),
    );

    Document {
        file_name: espelho_file_name(month),
        bytes: pdf.finish(),
    }
}
