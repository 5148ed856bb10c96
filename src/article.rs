use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An article as handed over by the persistence layer. The composer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Creation time; names the output file and dates the document
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A named part of an article: a heading, explanatory text and an optional image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Short key such as `intro` or `setup`, shown upper-cased as the heading
    pub key: String,
    pub explanation: String,
    /// Path of an already stored image, if the section has one
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Sections are rendered in ascending position
    pub position: i32,
}

impl Article {
    pub fn new<S: ToString, D: ToString>(
        id: u64,
        title: S,
        description: D,
        created_at: NaiveDateTime,
    ) -> Article {
        Article {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at,
            author_id: None,
            sections: Vec::new(),
        }
    }

    pub fn with_author(mut self, author_id: u64) -> Article {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_section(mut self, section: Section) -> Article {
        self.sections.push(section);
        self
    }

    /// The sections in render order. The sort is stable, so sections sharing a
    /// position keep the order they were given in.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|section| section.position);
        sections
    }
}

impl Section {
    pub fn new<K: ToString, E: ToString>(key: K, explanation: E, position: i32) -> Section {
        Section {
            key: key.to_string(),
            explanation: explanation.to_string(),
            image: None,
            position,
        }
    }

    pub fn with_image<P: Into<PathBuf>>(mut self, image: P) -> Section {
        self.image = Some(image.into());
        self
    }

    /// The image to draw, treating a blank path as no image
    pub fn image_path(&self) -> Option<&Path> {
        self.image
            .as_deref()
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty())
    }

    /// The heading line for this section at a 1-based index, e.g. `2. SETUP`
    pub fn heading(&self, index: usize) -> String {
        format!("{}. {}", index, self.key.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn created() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .expect("valid date")
    }

    #[test]
    fn sections_are_ordered_by_position_stably() {
        let article = Article::new(1, "Title", "", created())
            .with_section(Section::new("c", "", 3))
            .with_section(Section::new("a", "", 1))
            .with_section(Section::new("b1", "", 2))
            .with_section(Section::new("b2", "", 2));

        let keys: Vec<&str> = article
            .ordered_sections()
            .into_iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(keys, vec!["a", "b1", "b2", "c"]);
    }

    #[test]
    fn blank_image_paths_mean_no_image() {
        assert!(Section::new("a", "", 1).image_path().is_none());
        assert!(Section::new("a", "", 1).with_image("  ").image_path().is_none());
        assert_eq!(
            Section::new("a", "", 1).with_image("img/a.png").image_path(),
            Some(Path::new("img/a.png"))
        );
    }

    #[test]
    fn headings_are_numbered_and_upper_cased() {
        assert_eq!(Section::new("setup", "", 1).heading(1), "1. SETUP");
        assert_eq!(Section::new("Déjà vu", "", 4).heading(12), "12. DÉJÀ VU");
    }
}
