use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{PaintError, Result};

pub mod save;
pub mod validation;

pub use validation::{validate, InvalidReason, MAX_NAME_LEN};

/// The brand → colors mapping.
///
/// Brands iterate in lexicographic order, colors in the order they were added.
/// A brand never maps to an empty color list.
#[derive(Debug, Default)]
pub struct Collection {
    paints: BTreeMap<String, Vec<String>>,
}

impl Collection {
    pub fn new() -> Self {
        Self { paints: BTreeMap::new() }
    }

    pub fn add(&mut self, brand: &str, color: &str) -> Result<()> {
        validate(brand, color)?;

        let colors = self.paints.entry(brand.to_string()).or_default();
        if colors.iter().any(|c| c == color) {
            return Err(PaintError::DuplicateColor);
        }

        colors.push(color.to_string());
        debug!(brand, color, "paint added");
        Ok(())
    }

    pub fn remove(&mut self, brand: &str, color: &str) -> Result<()> {
        validate(brand, color)?;

        let colors = self.paints.get_mut(brand).ok_or(PaintError::ColorNotFound)?;
        let index = colors
            .iter()
            .position(|c| c == color)
            .ok_or(PaintError::ColorNotFound)?;

        colors.remove(index);
        if colors.is_empty() {
            self.paints.remove(brand);
            debug!(brand, "brand pruned after last color removed");
        }

        debug!(brand, color, "paint removed");
        Ok(())
    }

    /// Borrowed view of every brand with its colors. Call again to restart.
    pub fn list(&self) -> impl Iterator<Item = (&str, &[String])> + Clone + '_ {
        self.paints
            .iter()
            .map(|(brand, colors)| (brand.as_str(), colors.as_slice()))
    }

    pub fn contains(&self, brand: &str, color: &str) -> bool {
        self.colors(brand)
            .map_or(false, |colors| colors.iter().any(|c| c == color))
    }

    pub fn colors(&self, brand: &str) -> Option<&[String]> {
        self.paints.get(brand).map(Vec::as_slice)
    }

    /// Number of brands.
    pub fn len(&self) -> usize {
        self.paints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paints.is_empty()
    }
}
