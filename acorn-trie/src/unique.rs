use crate::alphabet::{self, ALPHABET_LEN};
use crate::node::Node;
use crate::trie::Trie;

impl Trie {
    /// Shortest prefix of each stored word that no other stored word shares.
    ///
    /// The scan walks down only while a prefix is still ambiguous and stops
    /// at the first node that covers exactly one word, so each result is as
    /// short as possible. A word that is itself a prefix of another stored
    /// word never becomes unambiguous and contributes nothing. Results come
    /// back in ascending order.
    pub fn shortest_unique_prefixes(&self) -> Vec<String> {
        let mut scan = PrefixScan::default();
        scan.visit(self.root());
        scan.prefixes
    }
}

#[derive(Default)]
struct PrefixScan {
    path: String,
    prefixes: Vec<String>,
}

impl PrefixScan {
    fn visit(&mut self, node: &Node) {
        for rank in 0..ALPHABET_LEN {
            if let Some(child) = node.child(rank)
                && let Some(c) = alphabet::symbol(rank)
            {
                self.path.push(c);
                if child.word_count() == 1 {
                    self.prefixes.push(self.path.clone());
                } else {
                    self.visit(child);
                }
                self.path.pop();
            }
        }
    }
}
