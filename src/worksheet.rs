/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of circular-motion-lab.
 *
 * circular-motion-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * circular-motion-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with circular-motion-lab. If not, see <https://www.gnu.org/licenses/>.
 */

use std::{fs, io};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, span, Level};
use utils::filesystem::create_safe_filename_in_path;

pub const WORKSHEET_FILE_STEM: &str = "Circular_Motion_Worksheet_Grade11";
pub const WORKSHEET_FILE_EXTENSION: &str = "txt";

pub const WORKSHEET_TEXT: &str = "
Student Worksheet - Circular Motion (Grade XI)

A. Learning Objectives
Analyse the relationship between
- angular velocity (ω), period (T), frequency (f),
- linear velocity (v), normal acceleration aₙ and centripetal force (F),
and apply it to real-world phenomena.

B. Tools & Materials (adjust to what your school has)
• Nylon string about 1 m long, small weight
• Stopwatch
• Ruler / measuring tape
• Phone (frequency meter app or slow-motion camera)

C. Safety
• Make sure the area is clear of obstacles.
• Hold the string firmly.
• Wear safety glasses if needed.

D. Procedure
1) Measure the rotation radius r from the centre to the object.
2) Swing the object horizontally at a steady rate. Record a 10 s video.
3) Count the number of revolutions N in time t, then f = N/t; T = 1/f.
4) Calculate v = 2π r f and aₙ = v²/r. If the mass m is known, calculate F = m v² / r.
5) Repeat for 3 different values of r. Record your data.

E. Data Table
| Trial | r (m) | N | t (s) | f (Hz) | v (m/s) | aₙ (m/s²) | m (kg) | F (N) |
|-------|-------|---|-------|--------|---------|-----------|--------|-------|
| 1     |       |   |       |        |         |           |        |       |
| 2     |       |   |       |        |         |           |        |       |
| 3     |       |   |       |        |         |           |        |       |

F. Guiding Questions
1) How does r affect v if f stays the same? Explain.
2) How does aₙ change when r is increased but v stays the same?
3) Give an example of centripetal force acting on a vehicle taking a bend.

G. Reflection
Write 2 things you understood and 1 thing that is still confusing.
";

#[derive(Error, Debug)]
pub enum WorksheetError {
    #[error("io error")]
    IoError(#[from] io::Error),
    #[error("export folder `{0}` doesn't exist")]
    MissingFolder(String),
    #[error("clipboard error. {0}")]
    ClipboardError(#[from] arboard::Error)
}

pub fn worksheet_filename() -> String {
    format!("{}.{}", WORKSHEET_FILE_STEM, WORKSHEET_FILE_EXTENSION)
}

pub fn write_worksheet(path: &Path) -> Result<(), WorksheetError> {
    let span = span!(Level::INFO, "Writing worksheet");
    let _enter = span.enter();
    fs::write(path, WORKSHEET_TEXT)?;
    info!("Wrote worksheet to {}", path.display());
    Ok(())
}

/// Writes the worksheet into `folder` without overwriting anything already there.
/// Returns the path of the new file.
pub fn export_to_folder(folder: &Path) -> Result<PathBuf, WorksheetError> {
    if !folder.is_dir() {
        return Err(WorksheetError::MissingFolder(folder.display().to_string()));
    }
    let path = create_safe_filename_in_path(folder, WORKSHEET_FILE_STEM, WORKSHEET_FILE_EXTENSION);
    write_worksheet(&path)?;
    Ok(path)
}

pub fn copy_to_clipboard() -> Result<(), WorksheetError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(WORKSHEET_TEXT.to_string())?;
    info!("Copied worksheet to clipboard");
    Ok(())
}
