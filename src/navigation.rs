//! Navigation
//!
//! Main tabs plus a stack of transient pages pushed on top of them.

/// Top-level tab in the view switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Cocktails,
    Recipes,
    Collection,
    ShoppingList,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Cocktails, Tab::Recipes, Tab::Collection, Tab::ShoppingList];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Cocktails => "Cocktails",
            Tab::Recipes => "Recipes",
            Tab::Collection => "Collection",
            Tab::ShoppingList => "Shopping List",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Cocktails => "🍸",
            Tab::Recipes => "🍲",
            Tab::Collection => "★",
            Tab::ShoppingList => "🛒",
        }
    }
}

/// Pages that can be on the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    NewRecipe,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Main => "Bistro",
            Page::NewRecipe => "New Recipe",
        }
    }
}

/// Stack of pages; the main page is always at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    pages: Vec<Page>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            pages: vec![Page::Main],
        }
    }
}

impl NavStack {
    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Pop the top page; the main page is never popped
    pub fn pop(&mut self) -> Option<Page> {
        if self.pages.len() > 1 {
            self.pages.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> Page {
        self.pages.last().copied().unwrap_or(Page::Main)
    }

    pub fn depth(&self) -> usize {
        self.pages.len()
    }

    pub fn is_root(&self) -> bool {
        self.pages.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavStack::default();
        assert!(nav.is_root());
        nav.push(Page::NewRecipe);
        assert_eq!(nav.current(), Page::NewRecipe);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.pop(), Some(Page::NewRecipe));
        assert_eq!(nav.current(), Page::Main);
    }

    #[test]
    fn test_main_page_is_never_popped() {
        let mut nav = NavStack::default();
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), Page::Main);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_tab_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels, vec!["Cocktails", "Recipes", "Collection", "Shopping List"]);
    }
}
