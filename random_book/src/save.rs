// save.rs - Dumps the displayed book to a timestamped text file

use std::env;
use std::ffi::OsString;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::{error, info};

use crate::error::{BookError, Result};

const FILE_PREFIX: &str = "random_book_";
const DESKTOP: &str = "Desktop";
const HOME_VAR: &str = if cfg!(windows) { "USERPROFILE" } else { "HOME" };

/// `random_book_YYYYMMDD_HHMMSS.txt`
pub fn file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{FILE_PREFIX}{}.txt", at.format("%Y%m%d_%H%M%S"))
}

pub fn home_dir() -> Option<PathBuf> {
    home_from(env::var_os(HOME_VAR))
}

fn home_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|home| !home.is_empty()).map(PathBuf::from)
}

/// `home/Desktop` when it exists, otherwise `home` itself.
pub fn save_dir_in(home: &Path) -> PathBuf {
    let desktop = home.join(DESKTOP);
    if desktop.is_dir() {
        desktop
    } else {
        home.to_path_buf()
    }
}

/// Writes `text` byte-for-byte into `dir`. One write, no temp file.
pub fn save_text<Tz: TimeZone>(dir: &Path, text: &str, at: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz::Offset: Display,
{
    let path = dir.join(file_name(at));
    match fs::write(&path, text) {
        Ok(()) => {
            info!(path = %path.display(), bytes = text.len(), "book saved");
            Ok(path)
        }
        Err(source) => {
            error!(path = %path.display(), %source, "book save failed");
            Err(BookError::Save { path, source })
        }
    }
}

/// Where the Save button writes to.
pub fn desktop_dir() -> Result<PathBuf> {
    save_dir_for(home_dir())
}

pub fn save_dir_for(home: Option<PathBuf>) -> Result<PathBuf> {
    home.map(|home| save_dir_in(&home))
        .ok_or(BookError::NoHomeDirectory)
}
