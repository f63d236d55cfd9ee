//! Reader mutations and the reducer that applies them
//!
//! Mutation identifiers and action names must be unique within an enum.
//! An `id` override that lands on another variant's default is rejected
//! at compile time:
//!
//! ```compile_fail
//! use reader_store::Mutation;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum Gesture {
//!     SetOffsetY(i32),
//!     #[mutation(id = "SET_OFFSET_Y")]
//!     SetScrollY(i32),
//! }
//! ```
//!
//! So is an `action` override that repeats an existing action name:
//!
//! ```compile_fail
//! use reader_store::Mutation;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum Panel {
//!     SetMenuVisible(bool),
//!     #[mutation(action = "setMenuVisible")]
//!     ToggleMenu(bool),
//! }
//! ```
//!
//! Overrides that stay distinct compile:
//!
//! ```
//! use reader_store::Mutation;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum Gesture {
//!     SetOffsetY(i32),
//!     #[mutation(id = "SET_SCROLLY", action = "setScroll")]
//!     SetScrollY(i32),
//! }
//!
//! assert_eq!(Gesture::SetOffsetY(0).id(), "SET_OFFSET_Y");
//! assert_eq!(Gesture::SetScrollY(0).id(), "SET_SCROLLY");
//! assert_eq!(Gesture::SetScrollY(0).action_name(), "setScroll");
//! ```

use serde::{Deserialize, Serialize};

use crate::state::{Book, Metadata, NavItem, ReaderState, SettingPanel};
use crate::{Mutation, Store};

/// Every state change the reader can commit, one variant per state field.
///
/// Serialized adjacently tagged with the mutation identifier, e.g.
/// `{"type": "SET_PROGRESS", "payload": 42}`.
#[derive(Mutation, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ReaderMutation {
    #[serde(rename = "SET_FILE_NAME")]
    SetFileName(String),
    #[serde(rename = "SET_MENU_VISIBLE")]
    SetMenuVisible(bool),
    #[serde(rename = "SET_SETTING_VISIBLE")]
    SetSettingVisible(SettingPanel),
    #[serde(rename = "SET_DEFAULT_FONT_SIZE")]
    SetDefaultFontSize(u32),
    #[serde(rename = "SET_DEFAULT_FONT_FAMILY")]
    SetDefaultFontFamily(String),
    #[serde(rename = "SET_CURRENT_BOOK")]
    SetCurrentBook(Option<Book>),
    #[serde(rename = "SET_FONT_FAMILY_VISIBLE")]
    SetFontFamilyVisible(bool),
    #[serde(rename = "SET_DEFAULT_THEME")]
    SetDefaultTheme(String),
    #[serde(rename = "SET_PROGRESS")]
    SetProgress(u32),
    #[serde(rename = "SET_BOOK_AVAILABLE")]
    SetBookAvailable(bool),
    #[serde(rename = "SET_SECTION")]
    SetSection(usize),
    #[serde(rename = "SET_COVER")]
    SetCover(Option<String>),
    #[serde(rename = "SET_METADATA")]
    SetMetadata(Option<Metadata>),
    #[serde(rename = "SET_NAVIGATION")]
    SetNavigation(Option<Vec<NavItem>>),
    #[mutation(id = "SET_OFFSETY")]
    #[serde(rename = "SET_OFFSETY")]
    SetOffsetY(i32),
    #[serde(rename = "SET_IS_BOOKMARK")]
    SetIsBookmark(bool),
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Apply a mutation to reader state.
///
/// Each mutation overwrites exactly its own field. Returns `true` when the
/// stored value changed.
pub fn reduce(state: &mut ReaderState, mutation: ReaderMutation) -> bool {
    match mutation {
        ReaderMutation::SetFileName(v) => replace(&mut state.file_name, v),
        ReaderMutation::SetMenuVisible(v) => replace(&mut state.menu_visible, v),
        ReaderMutation::SetSettingVisible(v) => replace(&mut state.setting_visible, v),
        ReaderMutation::SetDefaultFontSize(v) => replace(&mut state.default_font_size, v),
        ReaderMutation::SetDefaultFontFamily(v) => replace(&mut state.default_font_family, v),
        ReaderMutation::SetCurrentBook(v) => replace(&mut state.current_book, v),
        ReaderMutation::SetFontFamilyVisible(v) => replace(&mut state.font_family_visible, v),
        ReaderMutation::SetDefaultTheme(v) => replace(&mut state.default_theme, v),
        ReaderMutation::SetProgress(v) => replace(&mut state.progress, v),
        ReaderMutation::SetBookAvailable(v) => replace(&mut state.book_available, v),
        ReaderMutation::SetSection(v) => replace(&mut state.section, v),
        ReaderMutation::SetCover(v) => replace(&mut state.cover, v),
        ReaderMutation::SetMetadata(v) => replace(&mut state.metadata, v),
        ReaderMutation::SetNavigation(v) => replace(&mut state.navigation, v),
        ReaderMutation::SetOffsetY(v) => replace(&mut state.offset_y, v),
        ReaderMutation::SetIsBookmark(v) => replace(&mut state.is_bookmark, v),
    }
}

/// A store holding default reader state, driven by [`reduce`].
pub fn default_store() -> Store<ReaderState, ReaderMutation> {
    Store::new(ReaderState::default(), reduce)
}
