//! Tests for the reader store: reducer, middleware, named dispatch

use reader_store::testing::{RecordingCommit, TestHarness};
use reader_store::{
    actions, default_store, dispatch_named, reduce, ComposedMiddleware, DispatchError,
    LoggingMiddleware, MutationLogConfig, MutationLoggerConfig, MutationLoggerMiddleware,
    ReaderMutation, ReaderState, SettingPanel, StoreWithMiddleware,
};
use serde_json::json;

#[test]
fn test_actions_drive_store() {
    let mut store = default_store();

    assert!(actions::set_file_name(&mut store, "Sci/Dune".into()));
    assert!(actions::set_book_available(&mut store, true));
    assert!(actions::set_setting_visible(&mut store, SettingPanel::Contents));
    assert!(actions::set_default_font_size(&mut store, 20));

    let state = store.state();
    assert_eq!(state.file_name, "Sci/Dune");
    assert!(state.book_available);
    assert_eq!(state.setting_visible, SettingPanel::Contents);
    assert_eq!(state.default_font_size, 20);
    assert_eq!(state.default_theme, "Default");
}

#[test]
fn test_repeated_value_reports_no_change() {
    let mut store = default_store();

    assert!(!actions::set_offset_y(&mut store, 0));
    assert!(actions::set_offset_y(&mut store, 48));
    assert!(!actions::set_offset_y(&mut store, 48));
}

#[test]
fn test_logger_middleware_records_filtered_history() {
    let logger = MutationLoggerMiddleware::with_log(MutationLogConfig::default());
    let mut store = StoreWithMiddleware::new(ReaderState::default(), reduce, logger);

    actions::set_menu_visible(&mut store, true);
    actions::set_offset_y(&mut store, 12);
    actions::set_progress(&mut store, 30);
    actions::set_menu_visible(&mut store, true);

    let log = store.middleware().log().unwrap();
    let ids: Vec<_> = log.entries().map(|e| e.id).collect();
    assert_eq!(ids, vec!["SET_MENU_VISIBLE", "SET_MENU_VISIBLE"]);

    let changed: Vec<_> = log.entries().map(|e| e.state_changed).collect();
    assert_eq!(changed, vec![Some(true), Some(false)]);

    assert_eq!(store.state().offset_y, 12);
    assert_eq!(store.state().progress, 30);
}

#[test]
fn test_logger_log_cleared_through_store() {
    let logger = MutationLoggerMiddleware::with_log(MutationLogConfig::default());
    let mut store = StoreWithMiddleware::new(ReaderState::default(), reduce, logger);

    actions::set_section(&mut store, 1);
    actions::set_section(&mut store, 2);
    store.middleware_mut().log_mut().unwrap().clear();
    actions::set_cover(&mut store, Some("blob:cover".into()));

    let log = store.middleware().log().unwrap();
    let entries: Vec<_> = log.entries().map(|e| (e.id, e.sequence)).collect();
    assert_eq!(entries, vec![("SET_COVER", 2)]);
    assert_eq!(store.state().section, 2);
}

#[test]
fn test_logger_include_patterns() {
    let filter = MutationLoggerConfig::new(Some("SET_DEFAULT_*"), Some(""));
    let logger = MutationLoggerMiddleware::with_log(MutationLogConfig::new(10, filter));
    let mut store = StoreWithMiddleware::new(ReaderState::default(), reduce, logger);

    actions::set_default_theme(&mut store, "Night".into());
    actions::set_cover(&mut store, None);
    actions::set_default_font_family(&mut store, "Cabin".into());

    let log = store.middleware().log().unwrap();
    let summaries: Vec<_> = log.entries().map(|e| e.summary.as_str()).collect();
    assert_eq!(
        summaries,
        vec![
            "SetDefaultTheme(\"Night\")",
            "SetDefaultFontFamily(\"Cabin\")"
        ]
    );
}

#[test]
fn test_composed_middleware_with_reader_store() {
    let composed = ComposedMiddleware::new()
        .with(LoggingMiddleware::verbose())
        .with(MutationLoggerMiddleware::log_all());
    let mut store = StoreWithMiddleware::new(ReaderState::default(), reduce, composed);

    assert!(actions::set_is_bookmark(&mut store, true));
    assert!(store.state().is_bookmark);
}

#[test]
fn test_named_dispatch_applies_mutation() {
    let mut store = default_store();

    let changed =
        dispatch_named::<ReaderMutation, _>(&mut store, "setProgress", json!(42)).unwrap();
    assert!(changed);
    assert_eq!(store.state().progress, 42);

    dispatch_named::<ReaderMutation, _>(&mut store, "setSettingVisible", json!(2)).unwrap();
    assert_eq!(store.state().setting_visible, SettingPanel::Progress);

    dispatch_named::<ReaderMutation, _>(
        &mut store,
        "setMetadata",
        json!({ "title": "Walden", "creator": "Thoreau" }),
    )
    .unwrap();
    assert_eq!(store.state().metadata.as_ref().unwrap().title, "Walden");
}

#[test]
fn test_named_dispatch_null_payload() {
    let mut ctx = RecordingCommit::new();

    dispatch_named::<ReaderMutation, _>(&mut ctx, "setCover", json!(null)).unwrap();
    assert_eq!(ctx.single(), &ReaderMutation::SetCover(None));
}

#[test]
fn test_named_dispatch_errors_commit_nothing() {
    let mut ctx = RecordingCommit::<ReaderMutation>::new();

    let err = dispatch_named::<ReaderMutation, _>(&mut ctx, "SET_PROGRESS", json!(1)).unwrap_err();
    assert!(matches!(err, DispatchError::UnknownAction(_)));

    let err = dispatch_named::<ReaderMutation, _>(&mut ctx, "setProgress", json!(-1)).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidPayload { .. }));
    assert!(err.to_string().starts_with("invalid payload for action 'setProgress'"));

    let err = dispatch_named::<ReaderMutation, _>(&mut ctx, "setSettingVisible", json!(9)).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidPayload { .. }));

    assert!(ctx.is_empty());
}

#[test]
fn test_harness_applies_channel_commits() {
    let mut harness = TestHarness::<ReaderState, ReaderMutation>::default();

    let mut ctx = harness.channel();
    actions::set_section(&mut ctx, 3).unwrap();
    actions::set_section(&mut ctx, 3).unwrap();
    actions::set_navigation(&mut ctx, Some(vec![])).unwrap();

    assert_eq!(harness.apply_committed(reduce), 2);
    assert_eq!(harness.state.section, 3);
    assert_eq!(harness.state.navigation, Some(vec![]));
}
