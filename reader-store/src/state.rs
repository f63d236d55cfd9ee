//! Reader state and the payload types it stores

use serde::{Deserialize, Serialize};

/// Which settings panel is open at the bottom of the reader.
///
/// Serialized as the panel index the reader UI uses: `-1` for none,
/// then `0..=3` in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum SettingPanel {
    #[default]
    Hidden,
    FontSize,
    Theme,
    Progress,
    Contents,
}

impl SettingPanel {
    pub fn index(self) -> i8 {
        match self {
            SettingPanel::Hidden => -1,
            SettingPanel::FontSize => 0,
            SettingPanel::Theme => 1,
            SettingPanel::Progress => 2,
            SettingPanel::Contents => 3,
        }
    }

    pub fn is_visible(self) -> bool {
        self != SettingPanel::Hidden
    }
}

impl From<SettingPanel> for i8 {
    fn from(panel: SettingPanel) -> i8 {
        panel.index()
    }
}

impl TryFrom<i8> for SettingPanel {
    type Error = String;

    fn try_from(index: i8) -> Result<Self, Self::Error> {
        match index {
            -1 => Ok(SettingPanel::Hidden),
            0 => Ok(SettingPanel::FontSize),
            1 => Ok(SettingPanel::Theme),
            2 => Ok(SettingPanel::Progress),
            3 => Ok(SettingPanel::Contents),
            other => Err(format!("no settings panel with index {}", other)),
        }
    }
}

/// Handle to the book currently open in the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Path of the book relative to the library root, without extension
    pub file_name: String,
    /// Location the book was loaded from
    pub url: String,
}

impl Book {
    pub fn new(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
        }
    }
}

/// Package metadata read from the open book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// One entry of the flattened table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub href: String,
    pub label: String,
    /// Nesting depth, 0 for top-level chapters
    #[serde(default)]
    pub level: usize,
}

/// Everything the reader UI renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderState {
    pub file_name: String,
    pub menu_visible: bool,
    pub setting_visible: SettingPanel,
    pub default_font_size: u32,
    pub default_font_family: String,
    pub current_book: Option<Book>,
    pub font_family_visible: bool,
    pub default_theme: String,
    /// Reading progress in percent
    pub progress: u32,
    pub book_available: bool,
    /// Index of the current spine section
    pub section: usize,
    /// Cover image URL
    pub cover: Option<String>,
    pub metadata: Option<Metadata>,
    pub navigation: Option<Vec<NavItem>>,
    /// Pull-down offset of the reading area, in pixels
    pub offset_y: i32,
    pub is_bookmark: bool,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            file_name: String::new(),
            menu_visible: false,
            setting_visible: SettingPanel::Hidden,
            default_font_size: 16,
            default_font_family: "Default".to_string(),
            current_book: None,
            font_family_visible: false,
            default_theme: "Default".to_string(),
            progress: 0,
            book_available: false,
            section: 0,
            cover: None,
            metadata: None,
            navigation: None,
            offset_y: 0,
            is_bookmark: false,
        }
    }
}
