//! Bullet and checkbox marker families.
//!
//! Markdown accepts three interchangeable bullet characters. Every detection
//! loop tries the variants in the fixed order of [`ListType::ALL`], so matching
//! is deterministic regardless of which family a document mixes.

/// A bullet/checkbox marker family, keyed by its bullet character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    Dash,
    Asterisk,
    Plus,
}

impl ListType {
    /// All variants, in the order detection is attempted.
    pub const ALL: [ListType; 3] = [ListType::Dash, ListType::Asterisk, ListType::Plus];

    /// The bare bullet, e.g. `-`
    pub const fn list_symbol(self) -> &'static str {
        match self {
            ListType::Dash => "-",
            ListType::Asterisk => "*",
            ListType::Plus => "+",
        }
    }

    /// The bullet with one trailing space, e.g. `- `
    pub const fn list_symbol_with_trailing_space(self) -> &'static str {
        match self {
            ListType::Dash => "- ",
            ListType::Asterisk => "* ",
            ListType::Plus => "+ ",
        }
    }

    /// Unchecked checkbox marker, e.g. `- [ ]`
    pub const fn checkbox_unchecked(self) -> &'static str {
        match self {
            ListType::Dash => "- [ ]",
            ListType::Asterisk => "* [ ]",
            ListType::Plus => "+ [ ]",
        }
    }

    /// Checked checkbox marker, e.g. `- [x]`
    pub const fn checkbox_checked(self) -> &'static str {
        match self {
            ListType::Dash => "- [x]",
            ListType::Asterisk => "* [x]",
            ListType::Plus => "+ [x]",
        }
    }

    /// Checked checkbox marker with upper-case x, e.g. `- [X]`
    pub const fn checkbox_checked_upper_case(self) -> &'static str {
        match self {
            ListType::Dash => "- [X]",
            ListType::Asterisk => "* [X]",
            ListType::Plus => "+ [X]",
        }
    }

    /// Unchecked checkbox marker with one trailing space, e.g. `- [ ] `
    pub const fn checkbox_unchecked_with_trailing_space(self) -> &'static str {
        match self {
            ListType::Dash => "- [ ] ",
            ListType::Asterisk => "* [ ] ",
            ListType::Plus => "+ [ ] ",
        }
    }

    /// Checked checkbox marker with one trailing space, e.g. `- [x] `
    pub const fn checkbox_checked_with_trailing_space(self) -> &'static str {
        match self {
            ListType::Dash => "- [x] ",
            ListType::Asterisk => "* [x] ",
            ListType::Plus => "+ [x] ",
        }
    }
}

/// True if the trimmed line starts with this type's checked or unchecked
/// checkbox marker.
pub fn line_starts_with_checkbox(line: &str, list_type: ListType) -> bool {
    line_starts_with_checked_checkbox(line, list_type)
        || line_starts_with_unchecked_checkbox(line, list_type)
}

pub fn line_starts_with_checked_checkbox(line: &str, list_type: ListType) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(list_type.checkbox_checked())
        || trimmed.starts_with(list_type.checkbox_checked_upper_case())
}

pub fn line_starts_with_unchecked_checkbox(line: &str, list_type: ListType) -> bool {
    line.trim().starts_with(list_type.checkbox_unchecked())
}

/// True if the trimmed line starts with any variant's checkbox marker.
pub fn line_starts_with_any_checkbox(line: &str) -> bool {
    ListType::ALL
        .iter()
        .any(|&t| line_starts_with_checkbox(line, t))
}

/// True if the trimmed line starts with this type's bullet-plus-space.
pub fn line_starts_with_list(line: &str, list_type: ListType) -> bool {
    line.trim()
        .starts_with(list_type.list_symbol_with_trailing_space())
}

/// Which variant's bullet-plus-space the trimmed line starts with, if any.
pub fn detect_list(line: &str) -> Option<ListType> {
    ListType::ALL
        .into_iter()
        .find(|&t| line_starts_with_list(line, t))
}

/// Which variant's checkbox marker the trimmed line starts with, if any.
pub fn detect_checkbox(line: &str) -> Option<ListType> {
    ListType::ALL
        .into_iter()
        .find(|&t| line_starts_with_checkbox(line, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_strings() {
        assert_eq!(ListType::Dash.checkbox_unchecked(), "- [ ]");
        assert_eq!(ListType::Asterisk.checkbox_checked_with_trailing_space(), "* [x] ");
        assert_eq!(ListType::Plus.list_symbol_with_trailing_space(), "+ ");
    }

    #[test]
    fn test_line_starts_with_checkbox() {
        assert!(line_starts_with_checkbox("- [ ] task", ListType::Dash));
        assert!(line_starts_with_checkbox("- [x] done", ListType::Dash));
        assert!(line_starts_with_checkbox("- [X] done", ListType::Dash));
        assert!(line_starts_with_checkbox("  - [ ] indented", ListType::Dash));
        assert!(!line_starts_with_checkbox("- task", ListType::Dash));
        assert!(!line_starts_with_checkbox("* [ ] task", ListType::Dash));
    }

    #[test]
    fn test_detect_checkbox_order() {
        assert_eq!(detect_checkbox("- [ ] a"), Some(ListType::Dash));
        assert_eq!(detect_checkbox("* [x] b"), Some(ListType::Asterisk));
        assert_eq!(detect_checkbox("+ [ ] c"), Some(ListType::Plus));
        assert_eq!(detect_checkbox("1. d"), None);
    }

    #[test]
    fn test_detect_list() {
        assert_eq!(detect_list("- item"), Some(ListType::Dash));
        assert_eq!(detect_list("   * item"), Some(ListType::Asterisk));
        assert_eq!(detect_list("-item"), None);
        assert_eq!(detect_list("plain"), None);
    }

    #[test]
    fn test_checked_detection_is_case_insensitive() {
        assert!(line_starts_with_checked_checkbox("- [X] shout", ListType::Dash));
        assert!(line_starts_with_checked_checkbox("- [x] calm", ListType::Dash));
        assert!(!line_starts_with_checked_checkbox("- [ ] open", ListType::Dash));
    }
}
