// src/export/mod.rs

pub mod afd;
pub mod csv;
mod fs_utils;
pub mod pdf;
pub mod sink;

pub use sink::{DirectorySink, DocumentSink};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Rendered file waiting to be handed to a [`DocumentSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn text(file_name: String, body: String) -> Self {
        Self {
            file_name,
            bytes: body.into_bytes(),
        }
    }
}

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Afd,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Afd => "afd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Afd => "AFD",
        }
    }
}
