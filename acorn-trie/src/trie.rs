use crate::alphabet;
use crate::error::AlphabetError;
use crate::node::Node;
use crate::walk::{Order, SubstringWalker, WordWalker};

/// Verdict a node reports to its parent while a deletion unwinds.
enum Prune {
    /// Nothing under the node anymore; the parent must drop the link.
    Dead,
    /// The node still carries words; all pruning stops here.
    Retain,
}

/// Prefix tree over the 62-symbol alphanumeric alphabet.
///
/// Every node tracks how many stored words pass through it, so prefix counts
/// are a single downward walk and deletions can free dead branches without
/// touching live siblings. The root never stands for a word: the empty
/// string is not storable and the root count stays zero.
#[derive(Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Node reached by consuming `path`, if every edge exists.
    fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = &self.root;
        for &rank in path {
            node = node.child(rank)?;
        }
        Some(node)
    }

    /// Stores `word`. Returns `false` without touching the tree when the
    /// word is already present or empty. Rejects the whole word before any
    /// mutation if a character falls outside the alphabet.
    pub fn insert(&mut self, word: &str) -> Result<bool, AlphabetError> {
        let path = alphabet::ranks(word)?;
        if path.is_empty() {
            return Ok(false);
        }
        if let Some(found) = self.node_at(&path)
            && found.is_word()
        {
            return Ok(false);
        }

        // Every node under the root on the way down gains the new word in
        // its subtree; the root count stays pinned at zero.
        let mut node = &mut self.root;
        for &rank in &path {
            node = node.child_or_insert(rank);
            node.increment_count();
        }
        node.mark_word();
        self.len += 1;
        Ok(true)
    }

    /// Whether `word` was inserted and not removed since.
    pub fn contains(&self, word: &str) -> Result<bool, AlphabetError> {
        let path = alphabet::ranks(word)?;
        Ok(self.node_at(&path).is_some_and(Node::is_word))
    }

    /// Number of stored words starting with `prefix`. A prefix leading off
    /// the tree counts zero; so does the empty prefix, which resolves to the
    /// root and its pinned zero.
    pub fn count_with_prefix(&self, prefix: &str) -> Result<usize, AlphabetError> {
        let path = alphabet::ranks(prefix)?;
        Ok(self.node_at(&path).map_or(0, Node::word_count))
    }

    /// Removes `word` and prunes whatever part of its path no longer leads
    /// to any stored word. Returns `false` when the word was absent, which
    /// includes the path existing without the end-of-word flag.
    pub fn remove(&mut self, word: &str) -> Result<bool, AlphabetError> {
        let path = alphabet::ranks(word)?;
        match self.node_at(&path) {
            Some(found) if found.is_word() => {
                prune(&mut self.root, &path);
                self.len -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// All stored words, lexicographic for [`Order::Ascending`] and
    /// reverse-lexicographic for [`Order::Descending`].
    pub fn words_in_order(&self, order: Order) -> Vec<String> {
        let words = WordWalker::new("", order).collect(&self.root);
        debug_assert_eq!(words.len(), self.len);
        words
    }

    /// Stored words starting with `prefix`, in the requested order.
    pub fn words_with_prefix(
        &self,
        prefix: &str,
        order: Order,
    ) -> Result<Vec<String>, AlphabetError> {
        let path = alphabet::ranks(prefix)?;
        Ok(match self.node_at(&path) {
            Some(node) => WordWalker::new(prefix, order).collect(node),
            None => Vec::new(),
        })
    }

    /// Stored words containing `pattern` as a contiguous substring, in
    /// ascending order. The empty pattern matches every word.
    pub fn words_containing(&self, pattern: &str) -> Result<Vec<String>, AlphabetError> {
        let pattern = alphabet::ranks(pattern)?;
        Ok(SubstringWalker::new(pattern).collect(&self.root))
    }
}

/// Deletion pass below an already verified end-of-word path.
///
/// Counts drop by one on the way down. The unwind drops the link to every
/// child that reports [`Prune::Dead`]; the first node left with words in its
/// subtree reports [`Prune::Retain`] and ends the pruning for all ancestors.
/// The root is neither decremented nor ever removed.
fn prune(node: &mut Node, path: &[usize]) -> Prune {
    let Some((&rank, rest)) = path.split_first() else {
        node.clear_word();
        return if node.word_count() > 0 {
            Prune::Retain
        } else {
            Prune::Dead
        };
    };

    // The caller's search walked this exact path, so the child is there.
    let Some(child) = node.child_mut(rank) else {
        return Prune::Retain;
    };
    child.decrement_count();
    if let Prune::Retain = prune(child, rest) {
        return Prune::Retain;
    }

    node.take_child(rank);
    if node.word_count() > 0 {
        Prune::Retain
    } else {
        Prune::Dead
    }
}

#[cfg(test)]
impl Trie {
    /// Full-tree check of the counting rules: every node's count equals its
    /// own flag plus its children's counts, no node subtends zero words, and
    /// the root stays word-less with a zero count.
    pub(crate) fn assert_invariants(&self) {
        use crate::alphabet::ALPHABET_LEN;

        assert!(!self.root.is_word(), "root must never be a word");
        assert_eq!(self.root.word_count(), 0, "root count must stay zero");
        let mut total = 0;
        for rank in 0..ALPHABET_LEN {
            if let Some(child) = self.root.child(rank) {
                total += assert_subtree(child);
            }
        }
        assert_eq!(total, self.len, "len must match the words in the tree");
    }
}

#[cfg(test)]
fn assert_subtree(node: &Node) -> usize {
    use crate::alphabet::ALPHABET_LEN;

    let mut sum = usize::from(node.is_word());
    for rank in 0..ALPHABET_LEN {
        if let Some(child) = node.child(rank) {
            sum += assert_subtree(child);
        }
    }
    assert_eq!(
        node.word_count(),
        sum,
        "count must equal own flag plus children"
    );
    assert!(sum > 0, "nodes with no words underneath must be pruned");
    sum
}
