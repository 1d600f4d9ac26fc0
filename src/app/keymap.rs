use super::action::Action;
use super::state::Panel;
use crate::domain::models::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// "vim" adds h/j/k/l on top of the arrow keys; "arrows" leaves them unbound.
    pub profile: String,
    /// Extra bindings, key spec to action name, e.g. `"ctrl-y" = "copy"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub sidebar: HashMap<KeyEvent, Action>,
    pub content: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut sidebar = HashMap::new();
        let mut content = HashMap::new();

        // --- Global / Normal Mode ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Char('/')), Action::EnterSearchMode);
        global.insert(key(KeyCode::Esc), Action::ClearSearch);
        global.insert(key(KeyCode::Char('s')), Action::ToggleSection);
        global.insert(key(KeyCode::Char('1')), Action::SelectSection(Section::Commands));
        global.insert(key(KeyCode::Char('2')), Action::SelectSection(Section::Problems));
        global.insert(key(KeyCode::Tab), Action::ToggleFocus);
        global.insert(key(KeyCode::BackTab), Action::ToggleFocus);
        global.insert(key(KeyCode::Char('y')), Action::CopySelected);
        global.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(key(KeyCode::Char('T')), Action::EnterThemeSelection);

        // --- Sidebar ---
        sidebar.insert(key(KeyCode::Down), Action::SelectNextTopic);
        sidebar.insert(key(KeyCode::Up), Action::SelectPrevTopic);
        sidebar.insert(key(KeyCode::Right), Action::FocusContent);
        sidebar.insert(key(KeyCode::Enter), Action::FocusContent);

        // --- Content ---
        content.insert(key(KeyCode::Right), Action::SelectNextCard);
        content.insert(key(KeyCode::Left), Action::SelectPrevCard);
        content.insert(key(KeyCode::Down), Action::SelectCardBelow);
        content.insert(key(KeyCode::Up), Action::SelectCardAbove);
        content.insert(key(KeyCode::Enter), Action::CopySelected);
        content.insert(key(KeyCode::Backspace), Action::FocusSidebar);

        if config.profile == "vim" {
            sidebar.insert(key(KeyCode::Char('j')), Action::SelectNextTopic);
            sidebar.insert(key(KeyCode::Char('k')), Action::SelectPrevTopic);
            sidebar.insert(key(KeyCode::Char('l')), Action::FocusContent);
            content.insert(key(KeyCode::Char('l')), Action::SelectNextCard);
            content.insert(key(KeyCode::Char('h')), Action::SelectPrevCard);
            content.insert(key(KeyCode::Char('j')), Action::SelectCardBelow);
            content.insert(key(KeyCode::Char('k')), Action::SelectCardAbove);
        }

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key(spec), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    _ => tracing::warn!(key = %spec, action = %name, "ignoring invalid key binding"),
                }
            }
        }

        Self {
            global,
            sidebar,
            content,
        }
    }

    /// Panel bindings win over global ones.
    pub fn get_action(&self, event: KeyEvent, panel: Panel) -> Option<Action> {
        let event = normalize(event);
        let panel_map = match panel {
            Panel::Sidebar => &self.sidebar,
            Panel::Content => &self.content,
        };
        panel_map
            .get(&event)
            .or_else(|| self.global.get(&event))
            .cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

// Terminals report upper-case letters with SHIFT set; the map stores them bare.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) || event.code == KeyCode::BackTab {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parses specs like `y`, `T`, `ctrl-y`, `alt-enter`, `f2`, `pagedown`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec.trim();
    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(stripped) = lower.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = &rest[rest.len() - stripped.len()..];
        } else if let Some(stripped) = lower.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = &rest[rest.len() - stripped.len()..];
        } else {
            break;
        }
    }

    let mut chars = rest.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match rest.to_ascii_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            "backspace" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            other => {
                let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            }
        },
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name.trim() {
        "quit" => Action::Quit,
        "search" => Action::EnterSearchMode,
        "clear-search" => Action::ClearSearch,
        "toggle-section" => Action::ToggleSection,
        "commands" => Action::SelectSection(Section::Commands),
        "problems" => Action::SelectSection(Section::Problems),
        "next-topic" => Action::SelectNextTopic,
        "prev-topic" => Action::SelectPrevTopic,
        "next-card" => Action::SelectNextCard,
        "prev-card" => Action::SelectPrevCard,
        "focus-sidebar" => Action::FocusSidebar,
        "focus-content" => Action::FocusContent,
        "toggle-focus" => Action::ToggleFocus,
        "copy" => Action::CopySelected,
        "help" => Action::ToggleHelp,
        "theme" => Action::EnterThemeSelection,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_bindings_override_global() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(
            map.get_action(key(KeyCode::Char('j')), Panel::Sidebar),
            Some(Action::SelectNextTopic)
        );
        assert_eq!(
            map.get_action(key(KeyCode::Char('j')), Panel::Content),
            Some(Action::SelectCardBelow)
        );
        assert_eq!(
            map.get_action(key(KeyCode::Char('y')), Panel::Sidebar),
            Some(Action::CopySelected)
        );
    }

    #[test]
    fn test_shifted_letters_match() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(
            map.get_action(event, Panel::Sidebar),
            Some(Action::EnterThemeSelection)
        );
    }

    #[test]
    fn test_arrows_profile_leaves_letters_unbound() {
        let config = KeyConfig {
            profile: "arrows".to_string(),
            custom: None,
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(key(KeyCode::Char('j')), Panel::Sidebar), None);
        assert_eq!(
            map.get_action(key(KeyCode::Down), Panel::Sidebar),
            Some(Action::SelectNextTopic)
        );
    }

    #[test]
    fn test_both_profiles_share_global_bindings() {
        for profile in ["vim", "arrows"] {
            let map = KeyMap::from_config(&KeyConfig {
                profile: profile.to_string(),
                custom: None,
            });
            assert_eq!(map.global.len(), 11, "{profile}");
            assert_eq!(
                map.get_action(key(KeyCode::Char('q')), Panel::Content),
                Some(Action::Quit)
            );
            assert_eq!(
                map.get_action(key(KeyCode::Char('2')), Panel::Sidebar),
                Some(Action::SelectSection(Section::Problems))
            );
            assert_eq!(
                map.get_action(key(KeyCode::Char('/')), Panel::Sidebar),
                Some(Action::EnterSearchMode)
            );
        }
    }

    #[test]
    fn test_custom_bindings() {
        let mut custom = HashMap::new();
        custom.insert("ctrl-y".to_string(), "copy".to_string());
        custom.insert("x".to_string(), "quit".to_string());
        custom.insert("bogus-key".to_string(), "copy".to_string());
        custom.insert("z".to_string(), "no-such-action".to_string());
        let map = KeyMap::from_config(&KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        });

        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(
            map.get_action(ctrl_y, Panel::Content),
            Some(Action::CopySelected)
        );
        assert_eq!(map.get_action(key(KeyCode::Char('x')), Panel::Sidebar), Some(Action::Quit));
        assert_eq!(map.get_action(key(KeyCode::Char('z')), Panel::Sidebar), None);
    }

    #[test]
    fn test_parse_key_specs() {
        assert_eq!(parse_key("y"), Some(key(KeyCode::Char('y'))));
        assert_eq!(parse_key("pagedown"), Some(key(KeyCode::PageDown)));
        assert_eq!(parse_key("F5"), Some(key(KeyCode::F(5))));
        assert_eq!(
            parse_key("Ctrl-Alt-c"),
            Some(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
        assert_eq!(parse_key("f13"), None);
        assert_eq!(parse_key("hyper-x"), None);
        assert_eq!(parse_key(""), None);
    }
}
