//! History backends
//!
//! A history backend keeps the stack of visited locations and knows how a
//! location is written into (and read back from) the address bar. Three
//! strategies are provided:
//!
//! - [`WebHistory`]: clean URLs through the history API (`/app/reservation`)
//! - [`HashHistory`]: fragment URLs (`/app/#/reservation`)
//! - [`MemoryHistory`]: no URL at all, for tests and non-browser hosts

use super::location::Location;
use crate::config::HistoryMode;
use crate::error::{ConfigurationError, NavigationError};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default maximum number of history entries to keep
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// A visited location
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Unique key of this entry
    pub key: Uuid,
    pub location: Location,
    /// When the entry was written
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(location: Location) -> Self {
        Self {
            key: Uuid::new_v4(),
            location,
            visited_at: Utc::now(),
        }
    }
}

/// Stack of history entries with a cursor
#[derive(Debug, Clone)]
pub struct HistoryStack {
    /// Entries, oldest first
    entries: Vec<HistoryEntry>,
    /// Index of the current entry
    position: usize,
    /// Maximum number of entries to keep
    max_entries: usize,
}

impl HistoryStack {
    /// Create a stack holding a single entry
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial)],
            position: 0,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Set the maximum number of entries (at least one)
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self.trim();
        self
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Add an entry after the current one, discarding forward entries
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(HistoryEntry::new(location));
        self.position = self.entries.len() - 1;
        self.trim();
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, location: Location) {
        self.entries[self.position] = HistoryEntry::new(location);
    }

    /// Whether moving the cursor by `delta` stays inside the stack
    pub fn can_go(&self, delta: isize) -> bool {
        self.target(delta).is_some()
    }

    /// Move the cursor by `delta`; out-of-range moves change nothing
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.target(delta)?;
        self.position = target;
        Some(&self.entries[target])
    }

    fn target(&self, delta: isize) -> Option<usize> {
        let target = self.position.checked_add_signed(delta)?;
        (target < self.entries.len()).then_some(target)
    }

    /// Drop the oldest entries above the limit
    fn trim(&mut self) {
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
            self.position = self.position.saturating_sub(excess);
        }
    }
}

/// URL-synchronization strategy backing a navigator
pub trait History: Send {
    /// The strategy
    fn mode(&self) -> HistoryMode;

    /// Normalized base path; empty for the site root
    fn base(&self) -> &str;

    fn stack(&self) -> &HistoryStack;

    fn stack_mut(&mut self) -> &mut HistoryStack;

    /// Address-bar text for a location
    fn href(&self, location: &Location) -> String;

    /// Read a location back from address-bar text or an intercepted link
    fn parse_href(&self, href: &str) -> Result<Location, NavigationError>;

    /// Current location
    fn location(&self) -> &Location {
        &self.stack().current().location
    }

    fn push(&mut self, location: Location) {
        self.stack_mut().push(location);
    }

    fn replace(&mut self, location: Location) {
        self.stack_mut().replace(location);
    }

    /// Move through history; `None` when there is no entry at that offset
    fn go(&mut self, delta: isize) -> Option<Location> {
        self.stack_mut().go(delta).map(|entry| entry.location.clone())
    }

    fn can_go(&self, delta: isize) -> bool {
        self.stack().can_go(delta)
    }

    fn entries(&self) -> &[HistoryEntry] {
        self.stack().entries()
    }
}

/// Normalize a base path: leading slash, no trailing slash, root is empty
pub fn normalize_base(base: &str) -> Result<String, ConfigurationError> {
    if base.contains(['?', '#']) || base.contains("//") {
        return Err(ConfigurationError::InvalidBase {
            base: base.to_string(),
        });
    }

    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        Ok(String::new())
    } else if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{}", trimmed))
    }
}

/// Strip the base path from an href; `None` when the href lies outside it
fn strip_base<'a>(base: &str, href: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(href);
    }
    match href.strip_prefix(base)? {
        "" => Some("/"),
        rest if rest.starts_with(['/', '?', '#']) => Some(rest),
        _ => None,
    }
}

/// Clean-URL history, backed by the history API in a browser
#[derive(Debug, Clone)]
pub struct WebHistory {
    base: String,
    stack: HistoryStack,
}

impl WebHistory {
    pub fn new(base: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            base: normalize_base(base)?,
            stack: HistoryStack::new(Location::root()),
        })
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.stack = self.stack.with_max_entries(max_entries);
        self
    }
}

impl History for WebHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Web
    }

    fn base(&self) -> &str {
        &self.base
    }

    fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut HistoryStack {
        &mut self.stack
    }

    fn href(&self, location: &Location) -> String {
        format!("{}{}", self.base, location)
    }

    fn parse_href(&self, href: &str) -> Result<Location, NavigationError> {
        let relative =
            strip_base(&self.base, href).ok_or_else(|| NavigationError::InvalidLocation {
                location: href.to_string(),
            })?;
        let relative = if relative.starts_with(['?', '#']) {
            format!("/{}", relative)
        } else {
            relative.to_string()
        };
        Location::parse(&relative)
    }
}

/// Fragment-based history: the in-app location lives after `#`
#[derive(Debug, Clone)]
pub struct HashHistory {
    base: String,
    stack: HistoryStack,
}

impl HashHistory {
    pub fn new(base: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            base: normalize_base(base)?,
            stack: HistoryStack::new(Location::root()),
        })
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.stack = self.stack.with_max_entries(max_entries);
        self
    }
}

impl History for HashHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Hash
    }

    fn base(&self) -> &str {
        &self.base
    }

    fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut HistoryStack {
        &mut self.stack
    }

    fn href(&self, location: &Location) -> String {
        format!("{}/#{}", self.base, location)
    }

    fn parse_href(&self, href: &str) -> Result<Location, NavigationError> {
        let invalid = || NavigationError::InvalidLocation {
            location: href.to_string(),
        };
        let (document, fragment) = href.split_once('#').unwrap_or((href, ""));

        match strip_base(&self.base, document) {
            Some("" | "/") if fragment.is_empty() => Ok(Location::root()),
            Some("" | "/") => Location::parse(fragment),
            _ => Err(invalid()),
        }
    }
}

/// History that never touches a URL
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: HistoryStack,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            stack: HistoryStack::new(Location::root()),
        }
    }

    /// Start at a given location instead of the root
    pub fn starting_at(location: Location) -> Self {
        Self {
            stack: HistoryStack::new(location),
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.stack = self.stack.with_max_entries(max_entries);
        self
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Memory
    }

    fn base(&self) -> &str {
        ""
    }

    fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut HistoryStack {
        &mut self.stack
    }

    fn href(&self, location: &Location) -> String {
        location.to_string()
    }

    fn parse_href(&self, href: &str) -> Result<Location, NavigationError> {
        Location::parse(href)
    }
}

/// Create the history backend for a mode
pub fn create_history(
    mode: HistoryMode,
    base: &str,
    max_entries: usize,
) -> Result<Box<dyn History>, ConfigurationError> {
    let history: Box<dyn History> = match mode {
        HistoryMode::Web => Box::new(WebHistory::new(base)?.with_max_entries(max_entries)),
        HistoryMode::Hash => Box::new(HashHistory::new(base)?.with_max_entries(max_entries)),
        HistoryMode::Memory => Box::new(MemoryHistory::new().with_max_entries(max_entries)),
    };
    Ok(history)
}
