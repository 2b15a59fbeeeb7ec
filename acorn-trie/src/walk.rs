use crate::alphabet::{self, ALPHABET_LEN};
use crate::node::Node;

/// Direction of a word listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Depth-first listing of the words under a start node.
///
/// Ascending output takes children by rising rank and emits a word before
/// descending; descending output takes children by falling rank and emits
/// after the subtree. Both give strict (reverse-)lexicographic order under
/// the alphabet ranking.
pub(crate) struct WordWalker {
    order: Order,
    path: String,
    words: Vec<String>,
}

impl WordWalker {
    pub(crate) fn new(seed: &str, order: Order) -> Self {
        Self {
            order,
            path: seed.to_string(),
            words: Vec::new(),
        }
    }

    pub(crate) fn collect(mut self, start: &Node) -> Vec<String> {
        self.visit(start);
        self.words
    }

    fn visit(&mut self, node: &Node) {
        if self.order == Order::Ascending && node.is_word() {
            self.words.push(self.path.clone());
        }
        match self.order {
            Order::Ascending => {
                for rank in 0..ALPHABET_LEN {
                    self.descend(node, rank);
                }
            }
            Order::Descending => {
                for rank in (0..ALPHABET_LEN).rev() {
                    self.descend(node, rank);
                }
            }
        }
        if self.order == Order::Descending && node.is_word() {
            self.words.push(self.path.clone());
        }
    }

    fn descend(&mut self, node: &Node, rank: usize) {
        if let Some(child) = node.child(rank)
            && let Some(c) = alphabet::symbol(rank)
        {
            self.path.push(c);
            self.visit(child);
            self.path.pop();
        }
    }
}

/// Depth-first substring scan, ascending.
///
/// The cursor is a prefix-automaton state: on each edge it advances to the
/// longest pattern prefix that still ends there, so overlapping occurrences
/// are not lost. Once the whole pattern has matched somewhere on the path,
/// every word in the subtree below is collected without further comparisons.
pub(crate) struct SubstringWalker {
    pattern: Vec<usize>,
    fallback: Vec<usize>,
    path: String,
    words: Vec<String>,
}

impl SubstringWalker {
    pub(crate) fn new(pattern: Vec<usize>) -> Self {
        let fallback = fallback_table(&pattern);
        Self {
            pattern,
            fallback,
            path: String::new(),
            words: Vec::new(),
        }
    }

    pub(crate) fn collect(mut self, root: &Node) -> Vec<String> {
        self.visit(root, 0, false);
        self.words
    }

    fn visit(&mut self, node: &Node, matched: usize, inherited: bool) {
        let confirmed = inherited || matched == self.pattern.len();
        if confirmed && node.is_word() {
            self.words.push(self.path.clone());
        }
        for rank in 0..ALPHABET_LEN {
            if let Some(child) = node.child(rank)
                && let Some(c) = alphabet::symbol(rank)
            {
                let next = if confirmed {
                    matched
                } else {
                    self.advance(matched, rank)
                };
                self.path.push(c);
                self.visit(child, next, confirmed);
                self.path.pop();
            }
        }
    }

    /// One automaton step: longest pattern prefix ending with `rank` given
    /// `matched` symbols already matched. Only called while unconfirmed, so
    /// `matched` is always a valid pattern position.
    fn advance(&self, matched: usize, rank: usize) -> usize {
        let mut state = matched;
        while state > 0 && self.pattern.get(state) != Some(&rank) {
            state = self.fallback.get(state - 1).copied().unwrap_or(0);
        }
        if self.pattern.get(state) == Some(&rank) {
            state + 1
        } else {
            state
        }
    }
}

/// Prefix-function table: entry `i` is the length of the longest proper
/// pattern prefix that is also a suffix of `pattern[..=i]`.
fn fallback_table(pattern: &[usize]) -> Vec<usize> {
    let mut table = Vec::with_capacity(pattern.len());
    let mut len = 0;
    for (i, &symbol) in pattern.iter().enumerate() {
        if i == 0 {
            table.push(0);
            continue;
        }
        while len > 0 && pattern.get(len) != Some(&symbol) {
            len = table.get(len - 1).copied().unwrap_or(0);
        }
        if pattern.get(len) == Some(&symbol) {
            len += 1;
        }
        table.push(len);
    }
    table
}
