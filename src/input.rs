//! Keyboard bindings.
//!
//! | Key | Command |
//! |-----|---------|
//! | `c` / `w` / `p` / `h` | sphere / wave / pulse / graph mode |
//! | `>` / `<` | more edges and smaller dots / fewer edges and larger dots |
//! | `+` / `-` | zoom in / out |
//! | `i` `j` `k` `l` | pan up / left / down / right |
//! | Escape | quit |
//!
//! Bindings go through the logical key so that shifted characters such as
//! `>` and `+` work on any layout.

use winit::keyboard::{Key, NamedKey};

use crate::camera::Pan;
use crate::motion::Mode;

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMode(Mode),
    /// Raise edge probability, shrink dots.
    MoreEdges,
    /// Lower edge probability, grow dots.
    FewerEdges,
    ZoomIn,
    ZoomOut,
    Pan(Pan),
    Exit,
}

impl Command {
    /// Command bound to a typed character.
    pub fn from_char(c: char) -> Option<Self> {
        let command = match c {
            'c' => Command::SetMode(Mode::Sphere),
            'w' => Command::SetMode(Mode::Wave),
            'p' => Command::SetMode(Mode::Pulse),
            'h' => Command::SetMode(Mode::Graph),
            '>' => Command::MoreEdges,
            '<' => Command::FewerEdges,
            '+' => Command::ZoomIn,
            '-' => Command::ZoomOut,
            'i' => Command::Pan(Pan::Up),
            'j' => Command::Pan(Pan::Left),
            'k' => Command::Pan(Pan::Down),
            'l' => Command::Pan(Pan::Right),
            '\u{1b}' => Command::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Command bound to a winit logical key.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Command::Exit),
            Key::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys() {
        assert_eq!(Command::from_char('c'), Some(Command::SetMode(Mode::Sphere)));
        assert_eq!(Command::from_char('w'), Some(Command::SetMode(Mode::Wave)));
        assert_eq!(Command::from_char('p'), Some(Command::SetMode(Mode::Pulse)));
        assert_eq!(Command::from_char('h'), Some(Command::SetMode(Mode::Graph)));
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(Command::from_char('+'), Some(Command::ZoomIn));
        assert_eq!(Command::from_char('-'), Some(Command::ZoomOut));
        assert_eq!(Command::from_char('i'), Some(Command::Pan(Pan::Up)));
        assert_eq!(Command::from_char('j'), Some(Command::Pan(Pan::Left)));
        assert_eq!(Command::from_char('k'), Some(Command::Pan(Pan::Down)));
        assert_eq!(Command::from_char('l'), Some(Command::Pan(Pan::Right)));
    }

    #[test]
    fn test_unbound_keys() {
        for c in ['a', 'W', 'x', ' ', '1', 'r'] {
            assert_eq!(Command::from_char(c), None, "{:?} should be unbound", c);
        }
    }

    #[test]
    fn test_logical_keys() {
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Escape)), Some(Command::Exit));
        assert_eq!(Command::from_key(&Key::Character(">".into())), Some(Command::MoreEdges));
        assert_eq!(Command::from_key(&Key::Character("<".into())), Some(Command::FewerEdges));
        assert_eq!(Command::from_key(&Key::Character("hw".into())), None);
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Space)), None);
    }
}
