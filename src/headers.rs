//! Hierarchical numbering of ATX-style Markdown headers.
//!
//! Rewrites `## Title` lines as `## 1.2 Title`, maintaining a counter per
//! header depth. Only ATX headers (a leading `#` run) are recognized;
//! setext headers and ordinary text pass through untouched.

/// Splits a line into its leading `#` count and title text.
///
/// The title is the remainder of the line with leading whitespace stripped;
/// its trailing content, terminator included, is preserved. A remainder
/// that is all whitespace strips down to the empty string, terminator and
/// all.
fn parse_header(line: &str) -> (usize, &str) {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    (hashes, line[hashes..].trim_start())
}

/// Streaming section numberer for ATX headers.
///
/// One value numbers one document: the counter stack is threaded across
/// `process_line` calls. Index 0 of the stack is the document-title level
/// and never appears in rendered numbers.
///
/// # Examples
///
/// ```
/// use mdnum_tools::HeaderEnumerator;
///
/// let mut enumerator = HeaderEnumerator::new();
/// assert_eq!(enumerator.process_line("## Setup"), "## 1. Setup");
/// assert_eq!(enumerator.process_line("### Linux"), "### 1.1 Linux");
/// assert_eq!(enumerator.process_line("## Usage"), "## 2. Usage");
/// ```
pub struct HeaderEnumerator {
    counters: Vec<u64>,
}

impl HeaderEnumerator {
    /// Creates an enumerator with an empty counter stack.
    pub fn new() -> Self {
        Self {
            counters: Vec::new(),
        }
    }

    /// Rewrites one line, numbering it when it is a section header.
    ///
    /// The section level of a header is its `#` count minus one; lines with
    /// no `#` or a lone `#` have no section level and pass through
    /// unchanged, stack untouched. For numbered headers the stack grows
    /// with zeros up to the header's level, the counter at that level is
    /// incremented, and deeper counters are discarded so revisited
    /// subsections restart at 1.
    pub fn process_line(&mut self, line: &str) -> String {
        let (hashes, title) = parse_header(line);
        if hashes <= 1 {
            return line.to_string();
        }
        let depth = hashes - 1;

        while self.counters.len() <= depth {
            self.counters.push(0);
        }
        self.counters[depth] += 1;
        self.counters.truncate(depth + 1);

        format!("{} {} {}", "#".repeat(depth + 1), self.section_number(), title)
    }

    /// Dot-joined counters below the document-title level.
    ///
    /// Top-level sections (stack length 2) render with a trailing dot:
    /// `1.` rather than `1`, while `1.2` stays bare.
    fn section_number(&self) -> String {
        let joined = self.counters[1..]
            .iter()
            .map(|counter| counter.to_string())
            .collect::<Vec<_>>()
            .join(".");
        if self.counters.len() == 2 {
            format!("{}.", joined)
        } else {
            joined
        }
    }
}

impl Default for HeaderEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(enumerator.process_line("plain text\n"), "plain text\n");
    }

    #[test]
    fn test_blank_line_passes_through() {
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(enumerator.process_line("\n"), "\n");
        assert_eq!(enumerator.process_line(""), "");
    }

    #[test]
    fn test_single_hash_passes_through() {
        // Given: lines whose `#` run has length one
        let mut enumerator = HeaderEnumerator::new();

        // When/Then: they pass through with no stack mutation
        assert_eq!(enumerator.process_line("# Title\n"), "# Title\n");
        assert_eq!(enumerator.process_line("#\n"), "#\n");
        assert_eq!(enumerator.process_line("#no-space\n"), "#no-space\n");

        // And: a following section still starts at 1
        assert_eq!(enumerator.process_line("## First\n"), "## 1. First\n");
    }

    #[test]
    fn test_top_level_sections_get_trailing_dot() {
        // Given: two sibling top-level sections
        let mut enumerator = HeaderEnumerator::new();

        // When/Then: both render as `N.` with the dot
        assert_eq!(enumerator.process_line("## Intro\n"), "## 1. Intro\n");
        assert_eq!(enumerator.process_line("## Body\n"), "## 2. Body\n");
    }

    #[test]
    fn test_nested_sections() {
        // Given: a nested header sequence
        let mut enumerator = HeaderEnumerator::new();

        // When/Then: numbering follows the hierarchy
        assert_eq!(enumerator.process_line("## A\n"), "## 1. A\n");
        assert_eq!(enumerator.process_line("### B\n"), "### 1.1 B\n");
        assert_eq!(enumerator.process_line("### C\n"), "### 1.2 C\n");
        assert_eq!(enumerator.process_line("#### D\n"), "#### 1.2.1 D\n");
    }

    #[test]
    fn test_deeper_counters_reset_under_new_parent() {
        // Given: a subsection, then a new sibling of its parent
        let mut enumerator = HeaderEnumerator::new();
        enumerator.process_line("## A\n");
        enumerator.process_line("### B\n");

        // When: the parent level advances
        let parent = enumerator.process_line("## C\n");
        let child = enumerator.process_line("### D\n");

        // Then: the subsection numbering restarts at 1
        assert_eq!(parent, "## 2. C\n");
        assert_eq!(child, "### 2.1 D\n");
    }

    #[test]
    fn test_depth_jump_leaves_stale_zeros() {
        // Given: a jump from level 1 straight to level 4
        let mut enumerator = HeaderEnumerator::new();
        enumerator.process_line("## A\n");

        // When: a much deeper header appears
        let result = enumerator.process_line("##### B\n");

        // Then: the new counter starts at 1; skipped levels render as 0
        assert_eq!(result, "##### 1.0.0.1 B\n");
    }

    #[test]
    fn test_header_without_space_is_still_numbered() {
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(enumerator.process_line("##no-space\n"), "## 1. no-space\n");
    }

    #[test]
    fn test_title_leading_whitespace_is_stripped() {
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(
            enumerator.process_line("##    Indented title\n"),
            "## 1. Indented title\n"
        );
    }

    #[test]
    fn test_whitespace_only_title_loses_terminator() {
        // The strip consumes a remainder that is all whitespace, terminator
        // included.
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(enumerator.process_line("##  \n"), "## 1. ");
    }

    #[test]
    fn test_setext_header_passes_through() {
        // Given: a setext-style underlined header
        let mut enumerator = HeaderEnumerator::new();

        // When/Then: neither line is touched
        assert_eq!(enumerator.process_line("Title\n"), "Title\n");
        assert_eq!(enumerator.process_line("=====\n"), "=====\n");
    }

    #[test]
    fn test_line_without_terminator_stays_without_terminator() {
        let mut enumerator = HeaderEnumerator::new();
        assert_eq!(enumerator.process_line("## End"), "## 1. End");
    }

    #[test]
    fn test_separate_enumerators_do_not_interfere() {
        // Given: two independent transform values
        let mut first = HeaderEnumerator::new();
        let mut second = HeaderEnumerator::new();

        // When: each processes its own document
        first.process_line("## A\n");
        first.process_line("## B\n");
        let result = second.process_line("## Z\n");

        // Then: the second still counts from 1
        assert_eq!(result, "## 1. Z\n");
    }
}
