use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::Collection;

/// The two text fields the user fills in before triggering an action.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    pub brand: String,
    pub color: String,
}

impl Form {
    fn trimmed(&self) -> (&str, &str) {
        (self.brand.trim(), self.color.trim())
    }

    pub fn clear(&mut self) {
        self.brand.clear();
        self.color.clear();
    }
}

/// Owns the collection together with the input fields and the save destination.
#[derive(Debug)]
pub struct Session {
    store: Collection,
    form: Form,
    save_path: PathBuf,
}

impl Session {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self::with_store(Collection::new(), save_path)
    }

    pub fn with_store(store: Collection, save_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            form: Form::default(),
            save_path: save_path.into(),
        }
    }

    pub fn store(&self) -> &Collection {
        &self.store
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn set_brand(&mut self, text: &str) {
        self.form.brand = text.to_string();
    }

    pub fn set_color(&mut self, text: &str) {
        self.form.color = text.to_string();
    }

    pub fn clear(&mut self) {
        self.form.clear();
    }

    /// Adds the paint described by the form. Clears the form on success.
    pub fn add(&mut self) -> Result<()> {
        let (brand, color) = self.form.trimmed();
        self.store.add(brand, color)?;
        self.form.clear();
        Ok(())
    }

    /// Removes the paint described by the form. Clears the form on success.
    pub fn remove(&mut self) -> Result<()> {
        let (brand, color) = self.form.trimmed();
        self.store.remove(brand, color)?;
        self.form.clear();
        Ok(())
    }

    pub fn listing(&self) -> String {
        self.store.render_listing()
    }

    /// Saves to `destination`, or to the configured path. Returns the path written.
    pub fn save(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let path = destination.unwrap_or(&self.save_path).to_path_buf();
        self.store.save(&path)?;
        Ok(path)
    }
}
