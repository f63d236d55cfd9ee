//! Mutation logging with pattern-based filtering and in-memory storage
//!
//! Patterns are matched against mutation identifiers (`SET_PROGRESS`,
//! `SET_OFFSETY`, ...). Matching mutations are emitted as `tracing` events
//! and, optionally, kept in a ring buffer for later inspection.
//!
//! # Example
//!
//! ```ignore
//! use reader_store_core::logger::{MutationLogConfig, MutationLoggerConfig, MutationLoggerMiddleware};
//!
//! // Log every mutation except the high-frequency ones (tracing only)
//! let middleware = MutationLoggerMiddleware::new(MutationLoggerConfig::default());
//!
//! // Keep the last 100 mutations in memory as well
//! let middleware = MutationLoggerMiddleware::with_log(MutationLogConfig::default());
//! ```

use crate::store::Middleware;
use crate::Mutation;
use std::collections::VecDeque;

/// Environment variable holding comma-separated include patterns
pub const LOG_INCLUDE_ENV: &str = "READER_STORE_LOG_INCLUDE";
/// Environment variable holding comma-separated exclude patterns
pub const LOG_EXCLUDE_ENV: &str = "READER_STORE_LOG_EXCLUDE";

fn default_excludes() -> Vec<String> {
    vec!["SET_OFFSETY".to_string(), "SET_PROGRESS".to_string()]
}

fn split_patterns(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration for mutation logging with glob pattern filtering.
///
/// Patterns support:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Literal text matches exactly
///
/// # Examples
///
/// - `SET_DEFAULT_*` matches SET_DEFAULT_FONT_SIZE, SET_DEFAULT_THEME, etc.
/// - `*_VISIBLE` matches SET_MENU_VISIBLE, SET_SETTING_VISIBLE, etc.
/// - `SET_COVER` matches only SET_COVER
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationLoggerConfig {
    /// If non-empty, only log mutations matching these patterns
    pub include_patterns: Vec<String>,
    /// Exclude mutations matching these patterns (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl Default for MutationLoggerConfig {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            // Scroll offset and progress fire continuously while the user drags
            exclude_patterns: default_excludes(),
        }
    }
}

impl MutationLoggerConfig {
    /// Create a new config from comma-separated pattern strings
    ///
    /// # Arguments
    /// - `include`: comma-separated glob patterns (or None for all)
    /// - `exclude`: comma-separated glob patterns (or None for default excludes)
    ///
    /// # Example
    /// ```
    /// use reader_store_core::logger::MutationLoggerConfig;
    ///
    /// let config = MutationLoggerConfig::new(Some("SET_DEFAULT_*,SET_COVER"), None);
    /// assert!(config.should_log("SET_DEFAULT_THEME"));
    /// assert!(config.should_log("SET_COVER"));
    /// assert!(!config.should_log("SET_SECTION"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        let include_patterns = include.map(split_patterns).unwrap_or_default();
        let exclude_patterns = exclude
            .map(split_patterns)
            .unwrap_or_else(default_excludes);

        Self {
            include_patterns,
            exclude_patterns,
        }
    }

    /// Create a config with specific pattern vectors
    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// Build a config from `READER_STORE_LOG_INCLUDE` / `READER_STORE_LOG_EXCLUDE`.
    ///
    /// Unset variables fall back to the same defaults as [`MutationLoggerConfig::new`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let include = lookup(LOG_INCLUDE_ENV);
        let exclude = lookup(LOG_EXCLUDE_ENV);
        Self::new(include.as_deref(), exclude.as_deref())
    }

    /// Check if a mutation identifier should be logged
    pub fn should_log(&self, mutation_id: &str) -> bool {
        if !self.include_patterns.is_empty()
            && !self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, mutation_id))
        {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| glob_match(p, mutation_id))
    }
}

/// An entry in the mutation log
#[derive(Debug, Clone)]
pub struct MutationLogEntry {
    /// Mutation identifier (from Mutation::id())
    pub id: &'static str,
    /// Debug rendering of the mutation, payload included
    pub summary: String,
    /// Sequence number for ordering
    pub sequence: u64,
    /// Whether the mutation changed state (set after the reducer runs)
    pub state_changed: Option<bool>,
}

impl MutationLogEntry {
    /// Create a new log entry
    pub fn new(id: &'static str, summary: String, sequence: u64) -> Self {
        Self {
            id,
            summary,
            sequence,
            state_changed: None,
        }
    }
}

/// Configuration for the mutation log ring buffer
#[derive(Debug, Clone)]
pub struct MutationLogConfig {
    /// Maximum number of entries to keep
    pub capacity: usize,
    /// Filter applied before an entry is stored
    pub filter: MutationLoggerConfig,
}

impl Default for MutationLogConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            filter: MutationLoggerConfig::default(),
        }
    }
}

impl MutationLogConfig {
    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Create with custom capacity and filter
    pub fn new(capacity: usize, filter: MutationLoggerConfig) -> Self {
        Self { capacity, filter }
    }
}

/// In-memory ring buffer of recent mutations
///
/// Older entries are discarded once capacity is reached.
#[derive(Debug, Clone)]
pub struct MutationLog {
    entries: VecDeque<MutationLogEntry>,
    config: MutationLogConfig,
    next_sequence: u64,
}

impl Default for MutationLog {
    fn default() -> Self {
        Self::new(MutationLogConfig::default())
    }
}

impl MutationLog {
    /// Create a new mutation log with configuration
    pub fn new(config: MutationLogConfig) -> Self {
        Self {
            entries: VecDeque::with_capacity(config.capacity),
            config,
            next_sequence: 0,
        }
    }

    /// Log a mutation (if it passes the filter)
    ///
    /// Returns the entry if it was logged, None if filtered out.
    pub fn log<M: Mutation>(&mut self, mutation: &M) -> Option<&MutationLogEntry> {
        let id = mutation.id();

        if self.config.capacity == 0 || !self.config.filter.should_log(id) {
            return None;
        }

        let entry = MutationLogEntry::new(id, format!("{:?}", mutation), self.next_sequence);
        self.next_sequence += 1;

        if self.entries.len() >= self.config.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(entry);
        self.entries.back()
    }

    /// Update the last entry with state_changed info (called after reducer)
    pub fn update_last_state_changed(&mut self, changed: bool) {
        if let Some(entry) = self.entries.back_mut() {
            entry.state_changed = Some(changed);
        }
    }

    /// Get all entries (oldest first)
    pub fn entries(&self) -> impl Iterator<Item = &MutationLogEntry> {
        self.entries.iter()
    }

    /// Get the most recent N entries (newest first)
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &MutationLogEntry> {
        self.entries.iter().rev().take(count)
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop stored entries. Sequence numbers keep counting from where they were.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Middleware that logs mutations with configurable pattern filtering.
///
/// Supports two modes:
/// - **Tracing only** (default): logs via `tracing::debug!()`
/// - **With storage**: also keeps entries in a [`MutationLog`]
#[derive(Debug, Clone)]
pub struct MutationLoggerMiddleware {
    config: MutationLoggerConfig,
    log: Option<MutationLog>,
    /// Whether the last mutation made it into the log
    last_logged: bool,
    /// When false, all hooks are no-ops
    active: bool,
}

impl MutationLoggerMiddleware {
    /// Create a middleware with tracing only (no in-memory storage)
    pub fn new(config: MutationLoggerConfig) -> Self {
        Self {
            config,
            log: None,
            last_logged: false,
            active: true,
        }
    }

    /// Create middleware with in-memory storage
    pub fn with_log(config: MutationLogConfig) -> Self {
        Self {
            config: config.filter.clone(),
            log: Some(MutationLog::new(config)),
            last_logged: false,
            active: true,
        }
    }

    /// Create with default config and in-memory storage
    pub fn with_default_log() -> Self {
        Self::with_log(MutationLogConfig::default())
    }

    /// Create with no filtering (logs all mutations), tracing only
    pub fn log_all() -> Self {
        Self::new(MutationLoggerConfig::with_patterns(vec![], vec![]))
    }

    /// Set whether the middleware is active.
    ///
    /// ```ignore
    /// let middleware = MutationLoggerMiddleware::log_all().active(args.debug);
    /// ```
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if the middleware is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the mutation log (if storage is enabled)
    pub fn log(&self) -> Option<&MutationLog> {
        self.log.as_ref()
    }

    /// Mutable access to the mutation log, e.g. to clear it between chapters
    pub fn log_mut(&mut self) -> Option<&mut MutationLog> {
        self.log.as_mut()
    }
}

impl<M: Mutation> Middleware<M> for MutationLoggerMiddleware {
    fn before(&mut self, mutation: &M) {
        if !self.active {
            return;
        }

        let id = mutation.id();
        if self.config.should_log(id) {
            tracing::debug!(mutation = %id, action = %mutation.action_name(), "mutation");
        }

        self.last_logged = false;
        if let Some(ref mut log) = self.log {
            if log.log(mutation).is_some() {
                self.last_logged = true;
            }
        }
    }

    fn after(&mut self, _mutation: &M, state_changed: bool) {
        if !self.active {
            return;
        }

        if self.last_logged {
            if let Some(ref mut log) = self.log {
                log.update_last_state_changed(state_changed);
            }
        }
    }
}

/// Simple glob pattern matching supporting `*` and `?`.
///
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut pi = 0;
    let mut ti = 0;
    let mut star: Option<(usize, usize)> = None;

    while ti < text.len() {
        match pattern.get(pi) {
            Some('*') => {
                star = Some((pi, ti));
                pi += 1;
            }
            Some(&c) if c == '?' || c == text[ti] => {
                pi += 1;
                ti += 1;
            }
            _ => match star {
                // Let the last star swallow one more character and retry
                Some((spi, sti)) => {
                    pi = spi + 1;
                    ti = sti + 1;
                    star = Some((spi, sti + 1));
                }
                None => return false,
            },
        }
    }

    pattern[pi..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Binding;

    #[test]
    fn test_glob_match_exact() {
        assert!(glob_match("SET_COVER", "SET_COVER"));
        assert!(!glob_match("SET_COVER", "SET_CURRENT_BOOK"));
        assert!(!glob_match("SET_SECTION", "SET_SECTIONS"));
    }

    #[test]
    fn test_glob_match_star() {
        assert!(glob_match("SET_DEFAULT_*", "SET_DEFAULT_FONT_SIZE"));
        assert!(glob_match("SET_DEFAULT_*", "SET_DEFAULT_"));
        assert!(!glob_match("SET_DEFAULT_*", "SET_FONT_FAMILY_VISIBLE"));
        assert!(glob_match("*_VISIBLE", "SET_MENU_VISIBLE"));
        assert!(glob_match("*FONT*", "SET_FONT_FAMILY_VISIBLE"));
        assert!(glob_match("*", ""));
    }

    #[test]
    fn test_glob_match_question() {
        assert!(glob_match("SET_OFFSET?", "SET_OFFSETY"));
        assert!(!glob_match("SET_OFFSET?", "SET_OFFSET"));
        assert!(!glob_match("SET_OFFSET?", "SET_OFFSETYY"));
    }

    #[test]
    fn test_glob_match_backtracks() {
        assert!(glob_match("SET_*_FONT_*", "SET_DEFAULT_FONT_FAMILY"));
        assert!(glob_match("*_F*_VISIBLE", "SET_FONT_FAMILY_VISIBLE"));
        assert!(!glob_match("*_F*_BOOK", "SET_FONT_FAMILY_VISIBLE"));
    }

    #[test]
    fn test_logger_config_include() {
        let config = MutationLoggerConfig::new(Some("SET_DEFAULT_*, SET_COVER"), None);
        assert!(config.should_log("SET_DEFAULT_THEME"));
        assert!(config.should_log("SET_COVER"));
        assert!(!config.should_log("SET_METADATA"));
    }

    #[test]
    fn test_logger_config_exclude() {
        let config = MutationLoggerConfig::new(None, Some("*_VISIBLE"));
        assert!(!config.should_log("SET_MENU_VISIBLE"));
        assert!(config.should_log("SET_PROGRESS"));
        assert!(config.should_log("SET_OFFSETY"));
    }

    #[test]
    fn test_logger_config_include_and_exclude() {
        let config = MutationLoggerConfig::new(Some("SET_DEFAULT_*"), Some("*_FONT_*"));
        assert!(config.should_log("SET_DEFAULT_THEME"));
        assert!(!config.should_log("SET_DEFAULT_FONT_SIZE"));
        assert!(!config.should_log("SET_SECTION"));
    }

    #[test]
    fn test_logger_config_default() {
        let config = MutationLoggerConfig::default();
        assert!(!config.should_log("SET_OFFSETY"));
        assert!(!config.should_log("SET_PROGRESS"));
        assert!(config.should_log("SET_FILE_NAME"));
    }

    #[test]
    fn test_logger_config_from_lookup() {
        let config = MutationLoggerConfig::from_lookup(|key| match key {
            LOG_INCLUDE_ENV => Some("SET_COVER".to_string()),
            _ => None,
        });
        assert_eq!(config.include_patterns, vec!["SET_COVER".to_string()]);
        assert_eq!(config.exclude_patterns, default_excludes());

        let config = MutationLoggerConfig::from_lookup(|key| match key {
            LOG_EXCLUDE_ENV => Some(String::new()),
            _ => None,
        });
        assert!(config.exclude_patterns.is_empty());
        assert!(config.should_log("SET_OFFSETY"));
    }

    #[derive(Clone, Debug)]
    enum TestMutation {
        SetOffsetY(i32),
        SetCover(Option<String>),
    }

    impl Mutation for TestMutation {
        const BINDINGS: &'static [Binding] = &[
            Binding::new("setOffsetY", "SET_OFFSETY"),
            Binding::new("setCover", "SET_COVER"),
        ];

        fn id(&self) -> &'static str {
            match self {
                TestMutation::SetOffsetY(_) => "SET_OFFSETY",
                TestMutation::SetCover(_) => "SET_COVER",
            }
        }

        fn action_name(&self) -> &'static str {
            match self {
                TestMutation::SetOffsetY(_) => "setOffsetY",
                TestMutation::SetCover(_) => "setCover",
            }
        }
    }

    #[test]
    fn test_mutation_log_basic() {
        let mut log = MutationLog::default();
        assert!(log.is_empty());

        log.log(&TestMutation::SetCover(None));
        assert_eq!(log.len(), 1);

        let entry = log.entries().next().unwrap();
        assert_eq!(entry.id, "SET_COVER");
        assert_eq!(entry.summary, "SetCover(None)");
        assert_eq!(entry.sequence, 0);
    }

    #[test]
    fn test_mutation_log_filtering() {
        let mut log = MutationLog::default();

        log.log(&TestMutation::SetOffsetY(12));
        assert!(log.is_empty());

        log.log(&TestMutation::SetCover(Some("cover.jpg".into())));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_mutation_log_capacity() {
        let config = MutationLogConfig::new(3, MutationLoggerConfig::with_patterns(vec![], vec![]));
        let mut log = MutationLog::new(config);

        for y in 0..4 {
            log.log(&TestMutation::SetOffsetY(y));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().next().unwrap().sequence, 1);

        let recent: Vec<_> = log.recent(2).map(|e| e.sequence).collect();
        assert_eq!(recent, vec![3, 2]);
    }

    #[test]
    fn test_mutation_log_clear_keeps_sequence() {
        let config = MutationLogConfig::new(5, MutationLoggerConfig::with_patterns(vec![], vec![]));
        let mut log = MutationLog::new(config);

        log.log(&TestMutation::SetOffsetY(1));
        log.log(&TestMutation::SetOffsetY(2));
        log.clear();
        assert!(log.is_empty());

        let entry = log.log(&TestMutation::SetCover(None)).unwrap();
        assert_eq!(entry.sequence, 2);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_mutation_log_zero_capacity() {
        let config = MutationLogConfig::new(0, MutationLoggerConfig::with_patterns(vec![], vec![]));
        let mut log = MutationLog::new(config);

        assert!(log.log(&TestMutation::SetCover(None)).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_middleware_filtered_mutation_keeps_state_changed() {
        let mut middleware = MutationLoggerMiddleware::with_default_log();

        middleware.before(&TestMutation::SetCover(None));
        middleware.after(&TestMutation::SetCover(None), true);

        middleware.before(&TestMutation::SetOffsetY(4));
        middleware.after(&TestMutation::SetOffsetY(4), false);

        let log = middleware.log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().next().unwrap().state_changed, Some(true));
    }

    #[test]
    fn test_inactive_middleware_records_nothing() {
        let mut middleware = MutationLoggerMiddleware::with_default_log().active(false);
        assert!(!middleware.is_active());

        middleware.before(&TestMutation::SetCover(None));
        middleware.after(&TestMutation::SetCover(None), true);

        assert!(middleware.log().unwrap().is_empty());
    }
}
