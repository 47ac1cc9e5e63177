//! Fence-aware bulk operations on checkbox lines.
//!
//! Whole-document scans must not interpret list syntax inside fenced code
//! blocks, so every scan here threads a [`CodeFenceTracker`] through the
//! lines. Selection-local appliers operate on a single line and do not need
//! the tracker.

use crate::list_type::{self, ListType};
use crate::scan;

/// Tracks fenced-code-block state across a top-to-bottom line scan.
///
/// A line opening with three or more backticks opens a fence; only a line with
/// the same backtick count closes it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFenceTracker {
    signs: Option<usize>,
}

impl CodeFenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line, updating the fence state.
    pub fn observe(&mut self, line: &str) {
        if let Some(current) = scan::code_fence_signs(line) {
            match self.signs {
                Some(open) if open == current => self.signs = None,
                Some(_) => {}
                None => self.signs = Some(current),
            }
        }
    }

    /// True while between an opening fence and its matching close.
    pub fn in_fenced_code_block(&self) -> bool {
        self.signs.is_some()
    }
}

/// True if the line starts with a checkbox marker *and* carries content beyond
/// it. A bare `- [ ]` is not a renderable checkbox item.
pub fn is_checkbox_line(line: &str) -> bool {
    list_type::line_starts_with_any_checkbox(line)
        && line.trim().len() > ListType::Dash.checkbox_checked().len()
}

/// Apply `map` to every checkbox line outside fenced code blocks and return
/// the rebuilt content.
pub fn map_checkbox_lines<F>(content: &str, mut map: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut tracker = CodeFenceTracker::new();
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            tracker.observe(line);
            if !tracker.in_fenced_code_block() && is_checkbox_line(line) {
                map(line)
            } else {
                line.to_string()
            }
        })
        .collect();
    lines.join("\n")
}

/// Number of renderable checkbox items, fenced regions excluded.
pub fn checkbox_line_count(content: &str) -> usize {
    let mut tracker = CodeFenceTracker::new();
    content
        .split('\n')
        .filter(|line| {
            tracker.observe(line);
            !tracker.in_fenced_code_block() && is_checkbox_line(line)
        })
        .count()
}

/// Check or uncheck the `target_index`-th checkbox item (0-based, counted over
/// renderable checkbox lines outside fenced code blocks) and return the
/// rebuilt content. Out-of-range indices leave the content unchanged.
pub fn set_checkbox_status(content: &str, target_index: usize, checked: bool) -> String {
    let mut tracker = CodeFenceTracker::new();
    let mut checkbox_index = 0;
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            tracker.observe(line);
            if !tracker.in_fenced_code_block() && is_checkbox_line(line) {
                let index = checkbox_index;
                checkbox_index += 1;
                if index == target_index {
                    if let Some(bracket) = line.find('[') {
                        let state = if checked { "x" } else { " " };
                        return format!(
                            "{}{}{}",
                            &line[..bracket + 1],
                            state,
                            &line[bracket + 2..]
                        );
                    }
                }
            }
            line.to_string()
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_tracker_toggles() {
        let mut t = CodeFenceTracker::new();
        assert!(!t.in_fenced_code_block());
        t.observe("```");
        assert!(t.in_fenced_code_block());
        t.observe("- [ ] not a checkbox");
        assert!(t.in_fenced_code_block());
        t.observe("```");
        assert!(!t.in_fenced_code_block());
    }

    #[test]
    fn test_fence_close_requires_equal_signs() {
        let mut t = CodeFenceTracker::new();
        t.observe("````");
        t.observe("```");
        assert!(t.in_fenced_code_block());
        t.observe("````");
        assert!(!t.in_fenced_code_block());
    }

    #[test]
    fn test_is_checkbox_line() {
        assert!(is_checkbox_line("- [ ] task"));
        assert!(is_checkbox_line("* [x] done"));
        assert!(!is_checkbox_line("- [ ]"));
        assert!(!is_checkbox_line("- [ ] "));
        assert!(!is_checkbox_line("- task"));
    }

    #[test]
    fn test_fenced_checkbox_is_not_scanned() {
        assert_eq!(checkbox_line_count("```\n- [ ] not a checkbox\n```"), 0);
        assert_eq!(checkbox_line_count("- [ ] real checkbox"), 1);
    }

    #[test]
    fn test_map_checkbox_lines_skips_fences() {
        let content = "- [ ] outside\n```\n- [ ] inside\n```\n- [x] after";
        let mapped = map_checkbox_lines(content, |line| line.to_uppercase());
        assert_eq!(mapped, "- [ ] OUTSIDE\n```\n- [ ] inside\n```\n- [X] AFTER");
    }

    #[test]
    fn test_set_checkbox_status_checks() {
        assert_eq!(
            set_checkbox_status("- [ ] a\n- [ ] b", 1, true),
            "- [ ] a\n- [x] b"
        );
        assert_eq!(
            set_checkbox_status("- [x] a\n- [X] b", 0, false),
            "- [ ] a\n- [X] b"
        );
    }

    #[test]
    fn test_set_checkbox_status_skips_fenced_and_empty_items() {
        // the fenced line and the bare marker line are not counted
        let content = "```\n- [ ] zero\n```\n- [ ]\n- [ ] one";
        assert_eq!(
            set_checkbox_status(content, 0, true),
            "```\n- [ ] zero\n```\n- [ ]\n- [x] one"
        );
    }

    #[test]
    fn test_set_checkbox_status_out_of_range() {
        assert_eq!(set_checkbox_status("- [ ] a", 5, true), "- [ ] a");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(set_checkbox_status("- [ ] a\n", 0, true), "- [x] a\n");
    }
}
