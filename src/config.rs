//! Composer configuration.
//!
//! Everything the engine needs is passed in explicitly through [ComposerConfig];
//! nothing is read from process-wide state. Every field has a default, so a
//! configuration file only has to name what it changes.

use crate::error::ConfigError;
use crate::layout::Margins;
use crate::units::Pt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level settings for [ArticleComposer](crate::ArticleComposer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Directory that composed documents are written into.
    pub upload_dir: PathBuf,
    /// Image drawn as a translucent watermark behind every page.
    pub watermark_path: PathBuf,
    pub layout: LayoutSettings,
    pub decoration: DecorationSettings,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads/articles"),
            watermark_path: PathBuf::from("assets/logo.png"),
            layout: LayoutSettings::default(),
            decoration: DecorationSettings::default(),
        }
    }
}

impl ComposerConfig {
    pub fn new(upload_dir: impl Into<PathBuf>, watermark_path: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            watermark_path: watermark_path.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text, rejecting settings layout can't use
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every distance the cursor moves by is non-negative and that
    /// widths, leading and opacity are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        let d = &self.decoration;
        for (field, value) in [
            ("layout.margins.top", l.margins.top),
            ("layout.margins.right", l.margins.right),
            ("layout.margins.bottom", l.margins.bottom),
            ("layout.margins.left", l.margins.left),
            ("layout.title_block", l.title_block),
            ("layout.description_gap", l.description_gap),
            ("layout.separator_gap", l.separator_gap),
            ("layout.heading_block", l.heading_block),
            ("layout.image_gap", l.image_gap),
            ("layout.section_gap", l.section_gap),
            ("decoration.border_inset", d.border_inset),
        ] {
            check(field, value.0, |v| v >= 0.0, "must not be negative")?;
        }
        for (field, value) in [
            ("layout.leading", l.leading),
            ("layout.image_width", l.image_width),
            ("decoration.watermark_width", d.watermark_width),
        ] {
            check(field, value.0, |v| v > 0.0, "must be positive")?;
        }
        check(
            "decoration.watermark_alpha",
            d.watermark_alpha,
            |v| (0.0..=1.0).contains(&v),
            "must be between 0 and 1",
        )
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn check(
    field: &'static str,
    value: f32,
    valid: impl Fn(f32) -> bool,
    expected: &'static str,
) -> Result<(), ConfigError> {
    if valid(value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            expected,
        })
    }
}

/// Geometry and typography of the content pass. Vertical distances are the amount
/// the cursor drops after each block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Page margins; the top margin sets where content starts on every page.
    pub margins: Margins,
    pub title_size: Pt,
    /// Drop after the centered title.
    pub title_block: Pt,
    pub description_size: Pt,
    /// Drop between the last description line and the separator rule.
    pub description_gap: Pt,
    pub separator_width: Pt,
    /// Drop after the separator rule.
    pub separator_gap: Pt,
    pub heading_size: Pt,
    /// Drop after a section heading.
    pub heading_block: Pt,
    pub body_size: Pt,
    /// Distance between consecutive baselines of wrapped text.
    pub leading: Pt,
    /// Wrap width for description and section text, in characters.
    pub max_line_chars: usize,
    /// Section images are scaled to this width.
    pub image_width: Pt,
    /// Drop after a section image.
    pub image_gap: Pt,
    /// Drop after each section.
    pub section_gap: Pt,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            margins: Margins::trbl(Pt(42.0), Pt(50.0), Pt(50.0), Pt(50.0)),
            title_size: Pt(22.0),
            title_block: Pt(50.0),
            description_size: Pt(14.0),
            description_gap: Pt(30.0),
            separator_width: Pt(1.5),
            separator_gap: Pt(40.0),
            heading_size: Pt(16.0),
            heading_block: Pt(30.0),
            body_size: Pt(12.0),
            leading: Pt(16.0),
            max_line_chars: 90,
            image_width: Pt(400.0),
            image_gap: Pt(20.0),
            section_gap: Pt(30.0),
        }
    }
}

/// Running elements added to every page once the content is laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationSettings {
    /// Watermark images are scaled to this width and centered on the page.
    pub watermark_width: Pt,
    /// Constant opacity of the watermark.
    pub watermark_alpha: f32,
    /// Left edge of the header and footer text, and of the footer rule.
    pub left: Pt,
    /// Distance between the right page edge and the end of the footer rule.
    pub right: Pt,
    pub header_size: Pt,
    /// Baseline of the running title, between the content top and the border.
    pub header_y: Pt,
    pub footer_size: Pt,
    /// Baseline of the footer text.
    pub footer_y: Pt,
    /// Text in the bottom-left corner of every page.
    pub footer_label: String,
    /// Distance from the right page edge to the start of the page number.
    pub page_number_inset: Pt,
    /// Height of the thin rule above the footer.
    pub footer_rule_y: Pt,
    /// Distance between the page edges and the border.
    pub border_inset: Pt,
    pub border_width: Pt,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            watermark_width: Pt(300.0),
            watermark_alpha: 0.1,
            left: Pt(50.0),
            right: Pt(50.0),
            header_size: Pt(10.0),
            header_y: Pt(758.0),
            footer_size: Pt(9.0),
            footer_y: Pt(30.0),
            footer_label: "Generated by AMX System".to_string(),
            page_number_inset: Pt(120.0),
            footer_rule_y: Pt(45.0),
            border_inset: Pt(20.0),
            border_width: Pt(0.8),
        }
    }
}
