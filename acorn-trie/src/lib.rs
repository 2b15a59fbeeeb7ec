pub mod alphabet;
mod error;
mod node;
mod trie;
mod unique;
mod walk;

pub use error::AlphabetError;
pub use trie::Trie;
pub use walk::Order;
