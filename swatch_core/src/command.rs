// swatch_core/src/command.rs
use crate::Session;
use crate::color::Rgb;
use crate::input::parse_hex;
use crate::palette::PaletteType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickWord {
    Color(Rgb),
    Count(usize),
    Type(PaletteType),
    /// A `#` followed by fewer than six valid digits.
    PartialColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStatus {
    Applied,
    Incomplete,    // looks like quick entry, but a color is still being typed
    NotQuickEntry, // doesn't look like quick entry syntax
}

fn lex(input: &str) -> Vec<String> {
    input.split_whitespace().map(|s| s.to_string()).collect()
}

fn classify(token: &str) -> Option<QuickWord> {
    if let Ok(rgb) = parse_hex(token) {
        return Some(QuickWord::Color(rgb));
    }
    if let Some(rest) = token.strip_prefix('#') {
        if rest.len() < 6 && rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some(QuickWord::PartialColor);
        }
        return None;
    }
    if let Ok(n) = token.parse::<usize>() {
        return Some(QuickWord::Count(n));
    }
    token.parse::<PaletteType>().ok().map(QuickWord::Type)
}

fn parse_words(tokens: &[String]) -> Result<Vec<QuickWord>, ApplyStatus> {
    if tokens.is_empty() {
        return Err(ApplyStatus::NotQuickEntry);
    }

    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        match classify(t) {
            Some(w) => out.push(w),
            // Unknown token -> the whole line belongs to the named commands
            None => return Err(ApplyStatus::NotQuickEntry),
        }
    }
    Ok(out)
}

/// Apply a quick-entry line such as `#e11d48 12 tints` to the session.
///
/// Grammar: any mix, in any order, of
/// - a hex color (`#rrggbb` or six bare hex digits) -> base
/// - a number -> palette size (clamped)
/// - a palette type name (`mono`, `shades`, `tints`, `tones`) -> type
///
/// Later words win. Nothing is applied if the line is incomplete.
pub fn try_apply_line(line: &str, session: &mut Session) -> ApplyStatus {
    let tokens = lex(line);
    let words = match parse_words(&tokens) {
        Ok(w) => w,
        Err(status) => return status,
    };

    if words.contains(&QuickWord::PartialColor) {
        return ApplyStatus::Incomplete; // "#12" (waiting for the rest)
    }

    let mut base = None;
    let mut count = None;
    let mut palette_type = None;
    for w in words {
        match w {
            QuickWord::Color(rgb) => base = Some(rgb),
            QuickWord::Count(n) => count = Some(n),
            QuickWord::Type(t) => palette_type = Some(t),
            QuickWord::PartialColor => {}
        }
    }

    if let Some(rgb) = base {
        session.set_base_rgb(rgb);
    }
    if let Some(n) = count {
        session.set_count(n);
    }
    if let Some(t) = palette_type {
        session.set_palette_type(t);
    }

    ApplyStatus::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    fn session() -> Session {
        Session::new(Settings::default()).expect("default settings are valid")
    }

    #[test]
    fn applies_color_count_and_type() {
        let mut s = session();
        let st = try_apply_line("#e11d48 12 tints", &mut s);
        assert_eq!(st, ApplyStatus::Applied);
        assert_eq!(s.base(), Rgb::new(0xE1, 0x1D, 0x48));
        assert_eq!(s.count(), 12);
        assert_eq!(s.palette_type(), PaletteType::Tints);
        assert_eq!(s.palette().len(), 12);
    }

    #[test]
    fn words_in_any_order() {
        let mut s = session();
        let st = try_apply_line("shades 5 00ff00", &mut s);
        assert_eq!(st, ApplyStatus::Applied);
        assert_eq!(s.base(), Rgb::new(0, 255, 0));
        assert_eq!(s.palette_type(), PaletteType::Shades);
    }

    #[test]
    fn lone_number_sets_size_with_clamp() {
        let mut s = session();
        assert_eq!(try_apply_line("99", &mut s), ApplyStatus::Applied);
        assert_eq!(s.count(), 50);
    }

    #[test]
    fn partial_color_is_incomplete_and_changes_nothing() {
        let mut s = session();
        let st = try_apply_line("#12 tones", &mut s);
        assert_eq!(st, ApplyStatus::Incomplete);
        assert_eq!(s.palette_type(), PaletteType::Monochromatic);
    }

    #[test]
    fn named_commands_are_not_quick_entry() {
        let mut s = session();
        assert_eq!(try_apply_line("help", &mut s), ApplyStatus::NotQuickEntry);
        assert_eq!(try_apply_line("size 5", &mut s), ApplyStatus::NotQuickEntry);
        assert_eq!(try_apply_line("", &mut s), ApplyStatus::NotQuickEntry);
        assert_eq!(try_apply_line("#zz", &mut s), ApplyStatus::NotQuickEntry);
    }
}
