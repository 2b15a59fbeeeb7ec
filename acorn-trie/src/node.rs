use crate::alphabet::ALPHABET_LEN;

/// One tree node: a child slot per alphabet rank, the number of stored words
/// in the subtree (a word ending here included), and the end-of-word flag.
pub(crate) struct Node {
    children: [Option<Box<Node>>; ALPHABET_LEN],
    word_count: usize,
    word: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            children: [const { None }; ALPHABET_LEN],
            word_count: 0,
            word: false,
        }
    }
}

impl Node {
    pub(crate) fn child(&self, rank: usize) -> Option<&Node> {
        self.children.get(rank).and_then(|slot| slot.as_deref())
    }

    pub(crate) fn child_mut(&mut self, rank: usize) -> Option<&mut Node> {
        self.children.get_mut(rank).and_then(|slot| slot.as_deref_mut())
    }

    /// Existing child at `rank`, or a fresh empty one hung there.
    pub(crate) fn child_or_insert(&mut self, rank: usize) -> &mut Node {
        self.children[rank].get_or_insert_with(Box::default)
    }

    /// Unhooks the child at `rank`; dropping the box frees the whole subtree.
    pub(crate) fn take_child(&mut self, rank: usize) -> Option<Box<Node>> {
        self.children.get_mut(rank).and_then(Option::take)
    }

    pub(crate) fn is_word(&self) -> bool {
        self.word
    }

    pub(crate) fn mark_word(&mut self) {
        self.word = true;
    }

    pub(crate) fn clear_word(&mut self) {
        self.word = false;
    }

    pub(crate) fn word_count(&self) -> usize {
        self.word_count
    }

    pub(crate) fn increment_count(&mut self) {
        self.word_count += 1;
    }

    pub(crate) fn decrement_count(&mut self) {
        self.word_count -= 1;
    }

    #[cfg(test)]
    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_node_is_empty() {
        let node = Node::default();
        assert!(!node.is_word());
        assert_eq!(node.word_count(), 0);
        assert!(!node.has_children());
    }

    #[test]
    fn test_child_or_insert_reuses_slot() {
        let mut node = Node::default();
        node.child_or_insert(5).increment_count();
        node.child_or_insert(5).increment_count();
        assert_eq!(node.child(5).map(Node::word_count), Some(2));
        assert!(node.child(6).is_none());
    }

    #[test]
    fn test_take_child_empties_slot() {
        let mut node = Node::default();
        node.child_or_insert(61).mark_word();
        assert!(node.take_child(61).is_some());
        assert!(node.child(61).is_none());
        assert!(node.take_child(61).is_none());
    }
}
