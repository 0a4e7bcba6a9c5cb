//! Matcher: runs a compiled [`Ast`] against input text.
//!
//! All positions are **character** (not byte) indices. The search is a
//! recursive backtracking walk over `(text_position, ast_index)`; variable
//! length class nodes try their longest admissible run first and shrink until
//! some continuation of the remaining pattern succeeds. Worst case is
//! exponential for adjacent variable-length nodes; there is no memoization.

use crate::ast::{Ast, ClassNode, Node};
use crate::lexer::PatternError;
use crate::parser::parse;
use crate::token::ClassKind;

/// A successful match: char-index span plus the matched substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Match {
    fn new(text: &[char], start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: text[start..end].iter().collect(),
        }
    }
}

/// Runs match operations against a borrowed, compiled [`Ast`].
///
/// Holds no state between calls; one matcher may serve any number of texts.
pub struct Matcher<'a> {
    ast: &'a Ast,
}

// ─── Public API ─────────────────────────────────────────────────────────────

impl<'a> Matcher<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self { ast }
    }

    /// True iff the whole of `text` matches the pattern.
    pub fn match_full(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.match_at(&chars, 0, 0) == Some(chars.len())
    }

    /// Leftmost match anywhere in `text`.
    pub fn find_first(&self, text: &str) -> Option<Match> {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).find_map(|start| {
            self.match_at(&chars, start, 0)
                .map(|end| Match::new(&chars, start, end))
        })
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            match self.match_at(&chars, pos, 0) {
                Some(end) => {
                    matches.push(Match::new(&chars, pos, end));
                    // A zero-width match must still advance the cursor.
                    pos = if end == pos { pos + 1 } else { end };
                }
                None => pos += 1,
            }
        }

        matches
    }

    // ─── Backtracking search ────────────────────────────────────────────────

    /// Drive the AST from `idx` over the text from `pos`. Returns the end
    /// position of the first successful exhaustion of the remaining nodes.
    fn match_at(&self, text: &[char], pos: usize, idx: usize) -> Option<usize> {
        let Some(node) = self.ast.nodes().get(idx) else {
            // All nodes consumed: the match ends here.
            return Some(pos);
        };

        match node {
            Node::Literal(ch) => {
                if text.get(pos) == Some(ch) {
                    self.match_at(text, pos + 1, idx + 1)
                } else {
                    None
                }
            }
            Node::Class(class) => match &class.kind {
                ClassKind::Literals(alts) => self.match_alternatives(text, pos, idx, alts),
                _ => self.match_run(text, pos, idx, class),
            },
        }
    }

    /// Try each literal alternative in declared order. An alternative wins
    /// only if the remaining text starts with it AND the rest of the pattern
    /// matches after it, so the choice is driven by the full depth-first
    /// search, not by a flat prefix scan.
    fn match_alternatives(
        &self,
        text: &[char],
        pos: usize,
        idx: usize,
        alts: &[String],
    ) -> Option<usize> {
        for alt in alts {
            if text_starts_with(text, pos, alt)
                && let Some(end) = self.match_at(text, pos + alt.chars().count(), idx + 1)
            {
                return Some(end);
            }
        }
        None
    }

    /// Match a set or wildcard node: greedily take the longest admissible
    /// run, then back off one character at a time down to the node minimum.
    fn match_run(&self, text: &[char], pos: usize, idx: usize, class: &ClassNode) -> Option<usize> {
        let mut run = 0;
        while pos + run < text.len() {
            if let Some(max) = class.max
                && run >= max
            {
                break;
            }
            if !class.admits(text[pos + run]) {
                break;
            }
            run += 1;
        }

        // Greedy descent. When min is 0 this reaches a zero-width take, so an
        // optional node can always drop out of the match.
        for take in (class.min..=run).rev() {
            if let Some(end) = self.match_at(text, pos + take, idx + 1) {
                return Some(end);
            }
        }
        None
    }
}

/// True if the characters at `pos` spell out `literal`.
fn text_starts_with(text: &[char], pos: usize, literal: &str) -> bool {
    let mut i = pos;
    for ch in literal.chars() {
        if text.get(i) != Some(&ch) {
            return false;
        }
        i += 1;
    }
    true
}

// ─── Convenience functions ──────────────────────────────────────────────────

/// True iff the whole of `text` matches `pattern`.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, PatternError> {
    let ast = parse(pattern)?;
    Ok(Matcher::new(&ast).match_full(text))
}

/// First match of `pattern` anywhere in `text`, if any.
pub fn find(pattern: &str, text: &str) -> Result<Option<String>, PatternError> {
    let ast = parse(pattern)?;
    Ok(Matcher::new(&ast).find_first(text).map(|m| m.text))
}

/// All non-overlapping matches of `pattern` in `text`, left to right.
pub fn find_all(pattern: &str, text: &str) -> Result<Vec<String>, PatternError> {
    let ast = parse(pattern)?;
    Ok(Matcher::new(&ast)
        .find_all(text)
        .into_iter()
        .map(|m| m.text)
        .collect())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
