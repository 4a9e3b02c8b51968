use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `DD/MM/YYYY`, the pt-BR short date.
pub fn format_br(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Reference month (`YYYY-MM`) as used by the espelho acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(format!("invalid month '{s}' (expected YYYY-MM)")))?;
        Ok(Self::of(d))
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next_first_day().pred_opt().unwrap_or_default()
    }

    /// First day of the following month (exclusive upper bound).
    pub fn next_first_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .unwrap_or_default()
    }

    /// `YYYY-MM`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// `YYYY_MM`, used in file names.
    pub fn file_key(&self) -> String {
        format!("{:04}_{:02}", self.year, self.month)
    }
}

fn bad(msg: &str) -> AppError {
    AppError::InvalidDate(msg.to_string())
}

/// Expand a single period expression into inclusive bounds:
/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let ym = YearMonth::parse(p)?;
            Ok((ym.first_day(), ym.last_day()))
        }
        10 => {
            let d = parse_date_arg(p)?;
            Ok((d, d))
        }
        _ => Err(bad(&format!("unsupported period '{p}'"))),
    }
}

/// Parse `--period` (year / month / day / interval).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:` (same format on both sides)
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(bad("start and end must have same format"));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;
        return Ok((d1, d2));
    }

    period_bounds(r)
}
