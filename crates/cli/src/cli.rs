//! CLI definitions and the check command.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Args, Parser};
use log::info;
use math_font_store::{MathFont, ZeroPolicy};
use mathfix_core::{CheckOptions, MathStyle, check_font};

use crate::{
    io::FontFile,
    report::{print_finding, summary},
};

#[derive(Parser)]
#[command(name = "mathfix")]
#[command(about = "Check the math features of a font and optionally fix issues")]
pub struct Cli {
    /// Font to check (.json model, .ttf or .otf)
    pub input: PathBuf,

    /// Write the repaired font to <input>.fixed.json next to the input
    #[arg(long)]
    pub output: bool,

    /// Treat stored zero constants as real values instead of unset ones
    #[arg(long)]
    pub strict_zero: bool,

    #[command(flatten)]
    pub donors: DonorArgs,
}

/// Fonts from which to take missing mathematical alphanumerics.
#[derive(Debug, Clone, Default, Args)]
pub struct DonorArgs {
    /// Font from which to take italic glyphs
    #[arg(long, value_name = "FONT")]
    pub italic: Option<PathBuf>,
    /// Font from which to take bold glyphs
    #[arg(long, value_name = "FONT")]
    pub bold: Option<PathBuf>,
    /// Font from which to take bold-italic glyphs
    #[arg(long, value_name = "FONT")]
    pub bold_italic: Option<PathBuf>,
    /// Font from which to take sans-serif glyphs
    #[arg(long, value_name = "FONT")]
    pub sans_serif: Option<PathBuf>,
    /// Font from which to take sans-serif bold glyphs
    #[arg(long, value_name = "FONT")]
    pub sans_serif_bold: Option<PathBuf>,
    /// Font from which to take sans-serif italic glyphs
    #[arg(long, value_name = "FONT")]
    pub sans_serif_italic: Option<PathBuf>,
    /// Font from which to take sans-serif bold-italic glyphs
    #[arg(long, value_name = "FONT")]
    pub sans_serif_bold_italic: Option<PathBuf>,
    /// Font from which to take monospace glyphs
    #[arg(long, value_name = "FONT")]
    pub monospace: Option<PathBuf>,
}

impl DonorArgs {
    /// Supplied donor paths, by style.
    pub fn styles(&self) -> Vec<(MathStyle, &PathBuf)> {
        [
            (MathStyle::Italic, &self.italic),
            (MathStyle::Bold, &self.bold),
            (MathStyle::BoldItalic, &self.bold_italic),
            (MathStyle::SansSerif, &self.sans_serif),
            (MathStyle::SansSerifBold, &self.sans_serif_bold),
            (MathStyle::SansSerifItalic, &self.sans_serif_italic),
            (MathStyle::SansSerifBoldItalic, &self.sans_serif_bold_italic),
            (MathStyle::Monospace, &self.monospace),
        ]
        .into_iter()
        .filter_map(|(style, path)| path.as_ref().map(|p| (style, p)))
        .collect()
    }
}

impl Cli {
    pub fn zero_policy(&self) -> ZeroPolicy {
        if self.strict_zero { ZeroPolicy::Explicit } else { ZeroPolicy::ZeroMeansUnset }
    }

    /// Check the input font, printing findings as they come.
    ///
    /// Exits with 1 when a structural error stops the check.
    pub fn run(self) -> Result<ExitCode> {
        let input = FontFile::new(&self.input);
        let mut font = input.open()?;
        info!("Opened {}", input.path().display());

        let mut donors: Vec<(MathStyle, MathFont)> = Vec::new();
        for (style, path) in self.donors.styles() {
            donors.push((style, FontFile::new(path).open()?));
            info!("Using {} as {style} donor", path.display());
        }

        let mut options = CheckOptions::new().zero_policy(self.zero_policy());
        for (style, donor) in &donors {
            options = options.donor(*style, donor);
        }

        let report = check_font(&mut font, &options, print_finding);
        println!("{}", summary(&report));

        if report.is_aborted() {
            return Ok(ExitCode::FAILURE);
        }

        if self.output {
            let output = input.fixed();
            output.save(&font)?;
            println!("Saved {}", output.path().display());
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_donors() {
        let cli = Cli::try_parse_from([
            "mathfix",
            "Math.otf",
            "--output",
            "--italic",
            "Serif-Italic.ttf",
            "--sans-serif-bold-italic",
            "Sans-BoldItalic.ttf",
        ])
        .unwrap();

        assert!(cli.output);
        assert_eq!(cli.zero_policy(), ZeroPolicy::ZeroMeansUnset);
        let styles: Vec<_> = cli.donors.styles().into_iter().map(|(style, _)| style).collect();
        assert_eq!(styles, [MathStyle::Italic, MathStyle::SansSerifBoldItalic]);
    }

    #[test]
    fn test_strict_zero() {
        let cli = Cli::try_parse_from(["mathfix", "Math.json", "--strict-zero"]).unwrap();
        assert_eq!(cli.zero_policy(), ZeroPolicy::Explicit);
        assert!(!cli.output);
        assert!(cli.donors.styles().is_empty());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["mathfix"]).is_err());
    }
}
