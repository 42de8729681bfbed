//! Plain-text output of a [`Collection`].
//!
//! Two renderings exist: the save file, and the on-screen listing shown by the
//! console. Both are line-oriented and meant for people, not for reloading.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use super::Collection;
use crate::error::Result;

/// File written when no destination is configured.
pub const DEFAULT_SAVE_FILE: &str = "PaintList.txt";

const EMPTY_LISTING: &str = "No paints in the collection.";

fn bracketed(colors: &[String]) -> String {
    format!("[{}]", colors.join(", "))
}

impl Collection {
    /// Overwrites `destination` with one `Brand:` / `Colors:` line pair per brand.
    pub fn save(&self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();
        let written = File::create(destination).and_then(|file| {
            let mut writer = BufWriter::new(file);
            self.write_to(&mut writer)?;
            writer.flush()
        });

        match written {
            Ok(()) => {
                info!(path = %destination.display(), brands = self.len(), "paint list saved");
                Ok(())
            }
            Err(e) => {
                warn!(path = %destination.display(), error = %e, "failed to save paint list");
                Err(e.into())
            }
        }
    }

    /// Writes the save-file text to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (brand, colors) in self.list() {
            writeln!(writer, "Brand: {}", brand)?;
            writeln!(writer, "Colors: {}", bracketed(colors))?;
        }
        Ok(())
    }

    /// Text shown for the List action.
    pub fn render_listing(&self) -> String {
        if self.is_empty() {
            return EMPTY_LISTING.to_string();
        }

        let mut out = String::new();
        for (brand, colors) in self.list() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "Brand: {}", brand);
            let _ = writeln!(out, " Colors: {}", bracketed(colors));
        }
        out.truncate(out.trim_end().len());
        out
    }
}
