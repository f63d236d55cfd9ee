//! Tests for #[derive(Mutation)] macro

use reader_store::{mutation_for_action, Binding, Mutation};

#[test]
fn test_default_names() {
    #[derive(Mutation, Clone, Debug)]
    enum Shelf {
        SetFileName(String),
        SetIsBookmark(bool),
    }

    let m = Shelf::SetFileName("a".into());
    assert_eq!(m.id(), "SET_FILE_NAME");
    assert_eq!(m.action_name(), "setFileName");

    let m = Shelf::SetIsBookmark(true);
    assert_eq!(m.id(), "SET_IS_BOOKMARK");
    assert_eq!(m.action_name(), "setIsBookmark");
}

#[test]
fn test_id_override() {
    #[derive(Mutation, Clone, Debug)]
    enum Gesture {
        SetOffsetX(i32),
        #[mutation(id = "SET_OFFSETY")]
        SetOffsetY(i32),
    }

    assert_eq!(Gesture::SetOffsetX(1).id(), "SET_OFFSET_X");
    assert_eq!(Gesture::SetOffsetY(1).id(), "SET_OFFSETY");
    assert_eq!(Gesture::SetOffsetY(1).action_name(), "setOffsetY");
}

#[test]
fn test_action_override() {
    #[derive(Mutation, Clone, Debug)]
    enum Panel {
        #[mutation(action = "toggleMenu", id = "SET_MENU_VISIBLE")]
        MenuVisible(bool),
    }

    let m = Panel::MenuVisible(false);
    assert_eq!(m.action_name(), "toggleMenu");
    assert_eq!(m.id(), "SET_MENU_VISIBLE");
    assert_eq!(
        mutation_for_action::<Panel>("toggleMenu"),
        Some("SET_MENU_VISIBLE")
    );
}

#[test]
fn test_bindings_in_declaration_order() {
    #[derive(Mutation, Clone, Debug)]
    enum Library {
        SetSection(usize),
        SetCover(Option<String>),
        SetProgress(u32),
    }

    assert_eq!(
        Library::BINDINGS,
        &[
            Binding::new("setSection", "SET_SECTION"),
            Binding::new("setCover", "SET_COVER"),
            Binding::new("setProgress", "SET_PROGRESS"),
        ]
    );
}

#[test]
fn test_unit_and_struct_variants() {
    #[derive(Mutation, Clone, Debug)]
    enum Session {
        Reset,
        SetPosition { section: usize, offset: i32 },
    }

    assert_eq!(Session::Reset.id(), "RESET");
    assert_eq!(Session::Reset.action_name(), "reset");

    let m = Session::SetPosition {
        section: 1,
        offset: 0,
    };
    assert_eq!(m.id(), "SET_POSITION");
    assert_eq!(m.action_name(), "setPosition");
}
