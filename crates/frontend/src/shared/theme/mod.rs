//! Theme management for the application.
//!
//! A context-based light/dark theme with the preference persisted in
//! localStorage. The `dark` class on the document root is what the
//! stylesheet keys off, and it is kept in sync by a global effect.

use leptos::prelude::*;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Theme name as stored and as used in CSS hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme-storage";

/// Load theme from localStorage, defaulting to dark.
fn load_theme_from_storage() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::default()
    }
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

/// Toggle the `dark` class on the document root.
fn apply_theme_to_dom(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else { return };
        let class_list = root.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

/// Theme store: the current theme plus the actions that change it.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    pub theme: RwSignal<Theme>,
}

impl ThemeStore {
    /// Restore the persisted preference (dark when none is stored).
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(load_theme_from_storage()),
        }
    }

    /// Subscribe the document root to the theme signal. The effect also
    /// fires for the restored initial value, so the DOM class never drifts
    /// from the stored preference.
    pub fn install(&self) {
        let theme = self.theme;
        Effect::new(move |_| apply_theme_to_dom(theme.get()));
    }

    /// Set the theme and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().flipped());
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Header button that flips the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = expect_context::<ThemeStore>();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| store.toggle()
        >
            {move || match store.theme.get() {
                Theme::Dark => "\u{2600}",
                Theme::Light => "\u{1F319}",
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let store = ThemeStore::new();
        assert_eq!(store.theme.get_untracked(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let store = ThemeStore::new();
        let original = store.theme.get_untracked();

        store.toggle();
        assert_eq!(store.theme.get_untracked(), original.flipped());

        store.toggle();
        assert_eq!(store.theme.get_untracked(), original);
    }

    #[test]
    fn test_set_theme_is_explicit() {
        let store = ThemeStore::new();
        store.set_theme(Theme::Light);
        assert_eq!(store.theme.get_untracked(), Theme::Light);
        store.set_theme(Theme::Light);
        assert_eq!(store.theme.get_untracked(), Theme::Light);
    }
}
