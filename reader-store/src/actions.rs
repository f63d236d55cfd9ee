//! Reader action dispatchers
//!
//! One function per action. Each forwards its payload, untouched, as the
//! matching [`ReaderMutation`] to the commit channel it is given, exactly
//! once, and hands back whatever the channel returns.
//!
//! | action | mutation |
//! |---|---|
//! | `setFileName` | `SET_FILE_NAME` |
//! | `setMenuVisible` | `SET_MENU_VISIBLE` |
//! | `setSettingVisible` | `SET_SETTING_VISIBLE` |
//! | `setDefaultFontSize` | `SET_DEFAULT_FONT_SIZE` |
//! | `setDefaultFontFamily` | `SET_DEFAULT_FONT_FAMILY` |
//! | `setCurrentBook` | `SET_CURRENT_BOOK` |
//! | `setFontFamilyVisible` | `SET_FONT_FAMILY_VISIBLE` |
//! | `setDefaultTheme` | `SET_DEFAULT_THEME` |
//! | `setProgress` | `SET_PROGRESS` |
//! | `setBookAvailable` | `SET_BOOK_AVAILABLE` |
//! | `setSection` | `SET_SECTION` |
//! | `setCover` | `SET_COVER` |
//! | `setMetadata` | `SET_METADATA` |
//! | `setNavigation` | `SET_NAVIGATION` |
//! | `setOffsetY` | `SET_OFFSETY` |
//! | `setIsBookmark` | `SET_IS_BOOKMARK` |

use crate::mutation::ReaderMutation;
use crate::state::{Book, Metadata, NavItem, SettingPanel};
use crate::Commit;

/// Commit SET_FILE_NAME with the open book's file name (`category/name`).
pub fn set_file_name<C>(ctx: &mut C, file_name: String) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetFileName(file_name))
}

/// Commit SET_MENU_VISIBLE to show or hide the title and menu bars.
pub fn set_menu_visible<C>(ctx: &mut C, menu_visible: bool) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetMenuVisible(menu_visible))
}

/// Commit SET_SETTING_VISIBLE with the settings panel to show.
pub fn set_setting_visible<C>(ctx: &mut C, setting_visible: SettingPanel) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetSettingVisible(setting_visible))
}

/// Commit SET_DEFAULT_FONT_SIZE with the font size in pixels.
pub fn set_default_font_size<C>(ctx: &mut C, default_font_size: u32) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetDefaultFontSize(default_font_size))
}

/// Commit SET_DEFAULT_FONT_FAMILY with the font family name.
pub fn set_default_font_family<C>(ctx: &mut C, default_font_family: String) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetDefaultFontFamily(default_font_family))
}

/// Commit SET_CURRENT_BOOK with the loaded book, or `None` when it is closed.
pub fn set_current_book<C>(ctx: &mut C, current_book: Option<Book>) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetCurrentBook(current_book))
}

/// Commit SET_FONT_FAMILY_VISIBLE to show or hide the font family picker.
pub fn set_font_family_visible<C>(ctx: &mut C, font_family_visible: bool) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetFontFamilyVisible(font_family_visible))
}

/// Commit SET_DEFAULT_THEME with the theme name.
pub fn set_default_theme<C>(ctx: &mut C, default_theme: String) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetDefaultTheme(default_theme))
}

/// Commit SET_PROGRESS with the reading progress in percent.
pub fn set_progress<C>(ctx: &mut C, progress: u32) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetProgress(progress))
}

/// Commit SET_BOOK_AVAILABLE once the book's locations are generated.
pub fn set_book_available<C>(ctx: &mut C, book_available: bool) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetBookAvailable(book_available))
}

/// Commit SET_SECTION with the current chapter index.
pub fn set_section<C>(ctx: &mut C, section: usize) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetSection(section))
}

/// Commit SET_COVER with the cover image URL. `None` is forwarded as is.
pub fn set_cover<C>(ctx: &mut C, cover: Option<String>) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetCover(cover))
}

/// Commit SET_METADATA with the book's metadata.
pub fn set_metadata<C>(ctx: &mut C, metadata: Option<Metadata>) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetMetadata(metadata))
}

/// Commit SET_NAVIGATION with the flattened table of contents.
pub fn set_navigation<C>(ctx: &mut C, navigation: Option<Vec<NavItem>>) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetNavigation(navigation))
}

/// Commit SET_OFFSETY with the vertical drag offset in pixels.
pub fn set_offset_y<C>(ctx: &mut C, offset_y: i32) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetOffsetY(offset_y))
}

/// Commit SET_IS_BOOKMARK with whether the current page is bookmarked.
pub fn set_is_bookmark<C>(ctx: &mut C, is_bookmark: bool) -> C::Output
where
    C: Commit<ReaderMutation> + ?Sized,
{
    ctx.commit(ReaderMutation::SetIsBookmark(is_bookmark))
}
