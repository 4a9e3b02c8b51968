use serde::{Deserialize, Serialize};
use std::fmt;

/// The four punches an employee can register on a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunchType {
    #[serde(rename = "clockIn")]
    ClockIn,
    #[serde(rename = "lunchStart")]
    LunchStart,
    #[serde(rename = "lunchEnd")]
    LunchEnd,
    #[serde(rename = "clockOut")]
    ClockOut,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::ClockIn,
        PunchType::LunchStart,
        PunchType::LunchEnd,
        PunchType::ClockOut,
    ];

    /// Wire name, also the value hashed into the punch fingerprint.
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "clockIn",
            PunchType::LunchStart => "lunchStart",
            PunchType::LunchEnd => "lunchEnd",
            PunchType::ClockOut => "clockOut",
        }
    }

    /// Accepts the wire name or the CLI spelling (`clock-in`, `lunch-start`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "clockin" | "in" | "entrada" => Some(PunchType::ClockIn),
            "lunchstart" => Some(PunchType::LunchStart),
            "lunchend" => Some(PunchType::LunchEnd),
            "clockout" | "out" | "saida" => Some(PunchType::ClockOut),
            _ => None,
        }
    }

    /// Human label printed on receipts and in the employee history.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "Entrada",
            PunchType::LunchStart => "Início do Almoço",
            PunchType::LunchEnd => "Volta do Almoço",
            PunchType::ClockOut => "Saída",
        }
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
