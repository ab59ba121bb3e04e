//! Citation placeholder numbering.
//!
//! Rewrites `[citation](target)` links into sequentially numbered
//! `[N](target)` links and expands the `*INSERT REFERENCES HERE*` marker
//! into a reference table of the targets collected so far.

use regex::Regex;

/// Marker replaced by the rendered reference table.
pub const REFERENCES_MARKER: &str = "*INSERT REFERENCES HERE*";

/// Streaming rewriter for citation placeholder links.
///
/// One value processes one document: the running citation number and the
/// list of collected link targets are threaded across `process_line` calls,
/// so separate documents need separate values.
///
/// # Examples
///
/// ```
/// use mdnum_tools::CitationNumberer;
///
/// let mut numberer = CitationNumberer::new();
/// assert_eq!(
///     numberer.process_line("See [citation](https://example.com)."),
///     "See [1](https://example.com)."
/// );
/// assert_eq!(numberer.targets(), ["https://example.com"]);
/// ```
pub struct CitationNumberer {
    pattern: Regex,
    targets: Vec<String>,
    next_number: usize,
}

impl CitationNumberer {
    /// Creates a numberer with an empty reference list, counting from 1.
    pub fn new() -> Self {
        // Non-greedy so the target stops at the first closing parenthesis.
        let pattern = Regex::new(r"\[citation\]\((.+?)\)").unwrap();
        Self {
            pattern,
            targets: Vec::new(),
            next_number: 1,
        }
    }

    /// Rewrites one line, keeping its terminator.
    ///
    /// Placeholders are replaced leftmost-first, one at a time, each
    /// replacement mutating the line before the next search. This keeps the
    /// emitted numbers in lockstep with the order targets are appended to
    /// the reference list, even when a line holds several placeholders.
    ///
    /// After substitution, every occurrence of [`REFERENCES_MARKER`] on the
    /// line is replaced with the reference table collected up to this point
    /// in the stream (including targets found earlier on this same line).
    pub fn process_line(&mut self, line: &str) -> String {
        let mut line = line.to_string();

        loop {
            // Copy the match bounds out so the borrow of `line` ends before
            // the in-place replacement.
            let (start, end, target) = match self.pattern.captures(&line) {
                Some(caps) => {
                    let matched = caps.get(0).unwrap();
                    let target = caps.get(1).unwrap().as_str().to_string();
                    (matched.start(), matched.end(), target)
                }
                None => break,
            };
            let numbered = format!("[{}]({})", self.next_number, target);
            line.replace_range(start..end, &numbered);
            self.targets.push(target);
            self.next_number += 1;
        }

        if line.contains(REFERENCES_MARKER) {
            line = line.replace(REFERENCES_MARKER, &self.reference_table());
        }

        line
    }

    /// Renders the reference table for the targets collected so far.
    ///
    /// One line per target, newline-joined, no trailing terminator. Every
    /// entry carries the literal ordinal marker `1.`; Markdown renderers
    /// number ordered-list items themselves.
    pub fn reference_table(&self) -> String {
        self.targets
            .iter()
            .map(|target| format!("1. {}", target))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Link targets collected so far, in encounter order.
    ///
    /// The Nth entry corresponds to the citation numbered N in the output.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

impl Default for CitationNumberer {
    fn default() -> Self {
        Self::new()
    }
}
