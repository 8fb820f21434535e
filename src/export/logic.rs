// src/export/logic.rs

use crate::core::app::StudioApp;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// Writes a snapshot of one of the session's collections to a file.
/// The file is never read back.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        app: &StudioApp,
        target: ExportTarget,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if path.as_os_str().is_empty() {
            return Err(AppError::Export("missing output file".to_string()));
        }

        ensure_writable(path, force)?;

        match target {
            ExportTarget::Appointments => write(app.appointments(), format, path),
            ExportTarget::Clients => write(app.clients(), format, path),
            ExportTarget::Portfolio => write(app.portfolio(), format, path),
        }
    }
}

fn write<T: Serialize>(records: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    if records.is_empty() {
        warning("No records to export.");
        return Ok(());
    }

    match format {
        ExportFormat::Csv => export_csv(records, path),
        ExportFormat::Json => export_json(records, path),
    }
}
