// src/ui/mod.rs
pub mod input;
pub mod render;

use crate::config::Config;
use crate::explorer::{ExplorerStore, Node};
use glob::{MatchOptions, Pattern};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing the name of a new folder.
    Prompt,
    Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    Open,
    Back,
    Home,
    Select,
    AddToSelection,
    ClearSelection,
    CreateStart,
    FilterStart,
    Input(char),
    Backspace,
    Confirm,
    Cancel,
}

pub struct App {
    pub store: ExplorerStore,
    pub cursor: usize,
    pub mode: InputMode,
    pub input: String,
    pub filter: Option<String>,
    pub status: Option<String>,
    pub show_extensions: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ExplorerStore) -> Self {
        App {
            store,
            cursor: 0,
            mode: InputMode::Normal,
            input: String::new(),
            filter: None,
            status: None,
            show_extensions: false,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut app = App::new(ExplorerStore::new(config.seed_tree(), config.duplicate_scope));
        app.show_extensions = config.show_extensions;
        app
    }

    /// Entries at the current path, narrowed by the active filter.
    pub fn visible_entries(&self) -> Vec<Arc<Node>> {
        let entries = self.store.current_entries();
        match self.filter.as_deref() {
            Some(pattern) if !pattern.is_empty() => entries
                .iter()
                .filter(|node| matches_filter(pattern, node.full_name()))
                .cloned()
                .collect(),
            _ => entries.to_vec(),
        }
    }

    pub fn entry_under_cursor(&self) -> Option<Arc<Node>> {
        self.visible_entries().get(self.cursor).cloned()
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => {
                let len = self.visible_entries().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            Action::Open => {
                if let Some(node) = self.entry_under_cursor() {
                    if self.store.enter_folder(&node) {
                        self.after_navigation();
                    }
                }
            }
            Action::Back => {
                self.store.go_back();
                self.after_navigation();
            }
            Action::Home => {
                self.store.go_home();
                self.after_navigation();
            }
            Action::Select => {
                if let Some(node) = self.entry_under_cursor() {
                    self.store.select_one(node.id().clone());
                }
            }
            Action::AddToSelection => {
                if let Some(node) = self.entry_under_cursor() {
                    self.store.add_to_select(node.id().clone());
                }
            }
            Action::ClearSelection => self.store.clear_selected(),
            Action::CreateStart => {
                self.mode = InputMode::Prompt;
                self.input.clear();
                self.status = None;
            }
            Action::FilterStart => {
                self.mode = InputMode::Filter;
                self.input = self.filter.clone().unwrap_or_default();
            }
            Action::Input(ch) => {
                self.input.push(ch);
                self.sync_filter();
            }
            Action::Backspace => {
                self.input.pop();
                self.sync_filter();
            }
            Action::Confirm => self.confirm(),
            Action::Cancel => {
                if self.mode == InputMode::Filter {
                    self.filter = None;
                    self.cursor = 0;
                }
                self.mode = InputMode::Normal;
                self.input.clear();
            }
        }
    }

    fn confirm(&mut self) {
        match self.mode {
            InputMode::Prompt => {
                let name = std::mem::take(&mut self.input);
                let outcome = self.store.create_folder(&name);
                debug!(?outcome, "create requested");
                self.status = outcome.message();
            }
            InputMode::Filter => {
                self.input.clear();
            }
            InputMode::Normal => {}
        }
        self.mode = InputMode::Normal;
    }

    fn sync_filter(&mut self) {
        if self.mode == InputMode::Filter {
            self.filter = Some(self.input.clone());
            self.cursor = 0;
        }
    }

    fn after_navigation(&mut self) {
        self.cursor = 0;
        self.filter = None;
        self.status = None;
    }
}

/// Case-insensitive glob match on the entry's full name. A pattern that is
/// not a valid glob is treated as a substring.
pub fn matches_filter(pattern: &str, full_name: &str) -> bool {
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
    match Pattern::new(pattern) {
        Ok(glob) if glob.matches_with(full_name, options) => true,
        _ => full_name.to_lowercase().contains(&pattern.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(app: &App) -> Vec<String> {
        app.visible_entries().iter().map(|n| n.name().to_string()).collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(Action::Input(ch));
        }
    }

    #[test]
    fn test_cursor_bounds() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::MoveUp);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.update(Action::MoveDown);
        }
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_open_and_back() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::Open);
        assert_eq!(names(&app), vec!["January", "Test"]);
        app.update(Action::Back);
        assert_eq!(names(&app).len(), 4);
    }

    #[test]
    fn test_open_file_stays_put() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.cursor = 3;
        app.update(Action::Open);
        assert!(app.store.current_path().is_root());
    }

    #[test]
    fn test_create_via_prompt() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::Open);
        app.update(Action::CreateStart);
        assert_eq!(app.mode, InputMode::Prompt);
        type_text(&mut app, "Vacation");
        app.update(Action::Confirm);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(names(&app), vec!["January", "Test", "Vacation"]);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_duplicate_sets_status() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::CreateStart);
        type_text(&mut app, "Music");
        app.update(Action::Confirm);
        assert_eq!(app.status.as_deref(), Some("File named: Music.folder already exists."));
        assert_eq!(names(&app).len(), 4);
    }

    #[test]
    fn test_cancel_prompt() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::CreateStart);
        type_text(&mut app, "Nope");
        app.update(Action::Cancel);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(names(&app).len(), 4);
    }

    #[test]
    fn test_filter() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::FilterStart);
        type_text(&mut app, "*.txt");
        assert_eq!(names(&app), vec!["notes"]);
        app.update(Action::Confirm);
        assert_eq!(names(&app), vec!["notes"]);
        app.update(Action::FilterStart);
        app.update(Action::Cancel);
        assert_eq!(names(&app).len(), 4);
    }

    #[test]
    fn test_filter_cleared_on_navigation() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::FilterStart);
        type_text(&mut app, "pic");
        app.update(Action::Confirm);
        app.update(Action::Open);
        assert!(app.filter.is_none());
        assert_eq!(names(&app), vec!["January", "Test"]);
    }

    #[test]
    fn test_selection_actions() {
        let mut app = App::new(ExplorerStore::with_seed());
        app.update(Action::Select);
        app.update(Action::MoveDown);
        app.update(Action::AddToSelection);
        app.update(Action::AddToSelection);
        assert_eq!(app.store.selected_items().len(), 2);
        app.update(Action::ClearSelection);
        assert!(app.store.selected_items().is_empty());
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("*.FOLDER", "Music.folder"));
        assert!(matches_filter("mus", "Music.folder"));
        assert!(matches_filter("[", "a[b.txt"));
        assert!(!matches_filter("*.txt", "Music.folder"));
    }
}
