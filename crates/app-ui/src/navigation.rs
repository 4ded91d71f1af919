//! Navigation system for Lingodeck
//!
//! This module provides:
//! - Route definitions for every screen
//! - Tab navigation for the main app sections
//! - Navigation stack management
//!
//! Tabs deliberately do not preserve sub-navigation across switches:
//! entering a tab always mounts its default entry screen.

use serde::{Deserialize, Serialize};

use app_state::AppTree;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Deck stack
    /// Deck list (deck tab root)
    Decks,
    /// Study a deck
    Study {
        /// Deck to study
        deck_id: String,
    },
    /// Writing practice
    Write,
    /// Numbers writing practice
    NumbersWrite,
    /// End-of-session congratulations
    Congrats,

    // Conversations stack
    /// Conversation categories (conversations tab root)
    ConversationCategories,
    /// Conversations within a category
    ConversationList {
        /// Category identifier
        category: String,
        /// Header title
        title: String,
    },
    /// Practice a single conversation
    ConversationPractice {
        /// Conversation identifier
        conversation_id: String,
        /// Header title
        title: String,
    },

    // Single-screen tabs
    /// Study statistics
    Stats,
    /// Dictionary search
    Dictionary,
    /// Multiple choice quiz
    MultipleChoice,
    /// Culture articles
    Culture,

    // Screens pushed over the tab shell
    /// Settings
    Settings,
    /// Account management
    Account,
    /// Saved items
    Profile,
    /// Credits
    Credits,

    // Auth tree
    /// Login screen
    Login,
    /// Create account
    SignUp,

    // Onboarding tree
    /// Language selection onboarding
    Onboarding,
}

impl Default for Route {
    fn default() -> Self {
        Route::Decks
    }
}

impl Route {
    /// Get the header title for this route
    pub fn title(&self) -> &str {
        match self {
            Route::Decks => "Decks",
            Route::Study { .. } => "Study",
            Route::Write => "Write Practice",
            Route::NumbersWrite => "Numbers Practice",
            Route::Congrats => "Congrats",
            Route::ConversationCategories => "Conversation Categories",
            Route::ConversationList { title, .. } => title,
            Route::ConversationPractice { title, .. } => title,
            Route::Stats => "Stats",
            Route::Dictionary => "Dictionary",
            Route::MultipleChoice => "Multiple Choice",
            Route::Culture => "Culture",
            Route::Settings => "Settings",
            Route::Account => "Account",
            Route::Profile => "Saved",
            Route::Credits => "Credits",
            Route::Login => "Log In",
            Route::SignUp => "Sign Up",
            Route::Onboarding => "Choose a Language",
        }
    }
}

/// Get the entry route for a resolved screen tree
///
/// The main tree's real entry state is [`MainNavigation::default`]; this
/// returns its root route for callers that only need the first screen.
pub fn entry_route(tree: AppTree) -> Route {
    match tree {
        AppTree::Auth => Route::Login,
        AppTree::Onboarding => Route::Onboarding,
        AppTree::Main => Tab::default().root_route(),
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    /// Deck list and study flows
    #[default]
    Decks,
    /// Study statistics
    Stats,
    /// Dictionary
    Dictionary,
    /// Conversation practice
    Conversations,
    /// Multiple choice quiz
    MultipleChoice,
    /// Culture articles
    Culture,
}

impl Tab {
    /// Get the default entry route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            Tab::Decks => Route::Decks,
            Tab::Stats => Route::Stats,
            Tab::Dictionary => Route::Dictionary,
            Tab::Conversations => Route::ConversationCategories,
            Tab::MultipleChoice => Route::MultipleChoice,
            Tab::Culture => Route::Culture,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Decks => "albums",
            Tab::Stats => "stats-chart",
            Tab::Dictionary => "book",
            Tab::Conversations => "chatbubbles",
            Tab::MultipleChoice => "list",
            Tab::Culture => "globe",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Decks => "Decks",
            Tab::Stats => "Stats",
            Tab::Dictionary => "Dictionary",
            Tab::Conversations => "Conversations",
            Tab::MultipleChoice => "Multiple Choice",
            Tab::Culture => "Culture",
        }
    }

    /// Get all tabs in display order
    pub fn all() -> [Tab; 6] {
        [
            Tab::Decks,
            Tab::Stats,
            Tab::Dictionary,
            Tab::Conversations,
            Tab::MultipleChoice,
            Tab::Culture,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
    /// Scroll position to restore
    #[serde(default)]
    pub scroll_position: f32,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
            scroll_position: 0.0,
        }
    }
}

/// Navigation stack for one tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.entries.last().expect("Stack should never be empty").route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = route.clone();
        self.entries = vec![StackEntry::new(route)];
    }
}

// =============================================================================
// Tab Switcher
// =============================================================================

/// Navigation state for the main app shell
///
/// Holds the active tab and the stack mounted for it. Only one tab's stack
/// exists at a time: switching tabs discards the outgoing stack and mounts
/// the incoming tab at its default entry screen. Screens like Settings
/// push over the whole tab shell on the root stack.
///
/// A fresh value is constructed on every entry into the main tree, so the
/// active tab never survives an auth transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainNavigation {
    /// Currently active tab
    pub active_tab: Tab,
    /// Stack for the active tab
    stack: NavigationStack,
    /// Screens pushed over the tab shell (Settings, Account, ...)
    root_stack: Vec<StackEntry>,
}

impl Default for MainNavigation {
    fn default() -> Self {
        let tab = Tab::default();
        Self {
            active_tab: tab,
            stack: NavigationStack::new(tab.root_route()),
            root_stack: Vec::new(),
        }
    }
}

impl MainNavigation {
    /// Create navigation state at the default tab's entry screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the active tab
    ///
    /// The incoming tab mounts from its default entry screen; the outgoing
    /// tab's sub-navigation is discarded. Re-selecting the active tab is a
    /// no-op so the current stack is not remounted.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.stack = NavigationStack::new(tab.root_route());
        }
    }

    /// Get the stack for the active tab
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Navigate to a route within the active tab
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Push a screen over the whole tab shell
    pub fn push_root_screen(&mut self, route: Route) {
        self.root_stack.push(StackEntry::new(route));
    }

    /// Whether any screen covers the tab shell
    pub fn has_root_screens(&self) -> bool {
        !self.root_stack.is_empty()
    }

    /// Get the currently visible route (root-stack screens cover the tab)
    pub fn current_route(&self) -> &Route {
        if let Some(top) = self.root_stack.last() {
            &top.route
        } else {
            self.stack.current()
        }
    }

    /// Go back
    ///
    /// Pops a root-stack screen first, then the active tab's stack.
    /// Returns false when already at the tab's entry screen.
    pub fn go_back(&mut self) -> bool {
        if self.root_stack.pop().is_some() {
            return true;
        }
        self.stack.pop()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.root_stack.is_empty() || self.stack.can_go_back()
    }
}

// =============================================================================
// Tests
// =============================================================================
