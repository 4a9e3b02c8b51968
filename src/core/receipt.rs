//! Single-punch certificate ("Comprovante de Registro de Ponto").

use crate::config::Config;
use crate::export::Document;
use crate::export::pdf::PdfManager;
use crate::models::employee::Employee;
use crate::models::punch_type::PunchType;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::format_br;
use chrono::{DateTime, Local};

const SEPARATOR: &str =
    "------------------------------------------------------------------------------------------";

/// Employer block printed at the top of every receipt.
#[derive(Debug, Clone)]
pub struct EmployerInfo {
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

impl Default for EmployerInfo {
    fn default() -> Self {
        Self {
            name: "NOME DA EMPRESA".to_string(),
            cnpj: "XX.XXX.XXX/XXXX-XX".to_string(),
            address: "ENDEREÇO DA EMPRESA".to_string(),
        }
    }
}

impl From<&Config> for EmployerInfo {
    fn from(cfg: &Config) -> Self {
        Self {
            name: cfg.employer_name.clone(),
            cnpj: cfg.employer_cnpj.clone(),
            address: cfg.employer_address.clone(),
        }
    }
}

/// `Comprovante_<Name_With_Underscores>_<epoch millis>.pdf`
pub fn receipt_file_name(employee: &Employee, issued_at: &DateTime<Local>) -> String {
    format!(
        "Comprovante_{}_{}.pdf",
        employee.name.replace(' ', "_"),
        issued_at.timestamp_millis()
    )
}

/// Text lines of the receipt body, in print order.
pub fn receipt_lines(
    employer: &EmployerInfo,
    employee: &Employee,
    entry: &TimeEntry,
    punch: PunchType,
    time_of_day: &str,
) -> Vec<String> {
    vec![
        format!("Empregador: {}", employer.name),
        format!("CNPJ: {}", employer.cnpj),
        format!("Endereço: {}", employer.address),
        SEPARATOR.to_string(),
        format!("Funcionário: {}", employee.name),
        format!("CPF: {}", employee.cpf),
        format!("Data e Hora: {} {}", format_br(entry.date), time_of_day),
        format!("Tipo de Registro: {}", punch.label()),
        format!("NSR: {}", entry.id),
        format!("Hash (SHA-256): {}", entry.hash.as_deref().unwrap_or("")),
        SEPARATOR.to_string(),
        String::new(),
        "Assinatura Eletrônica (a ser implementada com certificado digital):".to_string(),
        "________________________________".to_string(),
    ]
}

/// Render the one-page receipt PDF for a punch just applied to `entry`.
pub fn render_receipt(
    employer: &EmployerInfo,
    employee: &Employee,
    entry: &TimeEntry,
    punch: PunchType,
    time_of_day: &str,
    issued_at: DateTime<Local>,
) -> Document {
    let lines = receipt_lines(employer, employee, entry, punch, time_of_day);

    let mut pdf = PdfManager::new();
    pdf.write_lines("Comprovante de Registro de Ponto do Trabalhador", &lines);

    Document {
        file_name: receipt_file_name(employee, &issued_at),
        bytes: pdf.finish(),
    }
}
