//! Font loading and saving for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use math_font_store::{FontStore, MathFont};

/// A font file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the font model (`.json`, `.ttf` or `.otf`).
    pub fn open(&self) -> Result<MathFont> {
        MathFont::open(&self.path)
            .with_context(|| format!("Failed to open font: {}", self.path.display()))
    }

    /// Write the font model as JSON.
    pub fn save(&self, font: &MathFont) -> Result<()> {
        font.save(&self.path)
            .with_context(|| format!("Failed to save font: {}", self.path.display()))
    }

    /// Where the repaired copy goes: `<file name>.fixed.json` beside the input.
    pub fn fixed(&self) -> FontFile {
        let name = self.path.file_name().and_then(|s| s.to_str()).unwrap_or("font");
        FontFile::new(self.path.with_file_name(format!("{name}.fixed.json")))
    }
}

impl AsRef<Path> for FontFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_path() {
        let fixed = FontFile::new("fonts/Math-Regular.otf").fixed();
        assert_eq!(fixed.path(), Path::new("fonts/Math-Regular.otf.fixed.json"));

        let fixed = FontFile::new("model.json").fixed();
        assert_eq!(fixed.path(), Path::new("model.json.fixed.json"));

        // Inputs sharing a stem get separate outputs.
        assert_ne!(FontFile::new("Math.otf").fixed().path(), FontFile::new("Math.json").fixed().path());
    }

    #[test]
    fn test_open_reports_path() {
        let err = FontFile::new("/nonexistent/math.json").open().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/math.json"));
    }
}
