#![allow(clippy::print_stdout)]

use acorn_trie::{Order, Trie};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Corpus file with whitespace-separated words; stdin when absent.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the first token as the number of words that follow.
    #[arg(long)]
    counted: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shortest unambiguous prefix of every word.
    Prefixes,
    /// List the stored words in order.
    List {
        #[arg(long)]
        descending: bool,

        /// Restrict the listing to words under this prefix.
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Count the words under a prefix.
    Count { prefix: String },
    /// Check whether a word is stored.
    Contains { word: String },
    /// List the words containing a pattern.
    Matches { pattern: String },
    /// Remove a word, then list what remains.
    Remove { word: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };
    let words = parse_corpus(&text, args.counted)?;

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word)
            .with_context(|| format!("rejected corpus word {word:?}"))?;
    }

    match args.command {
        Command::Prefixes => {
            for (index, prefix) in trie.shortest_unique_prefixes().iter().enumerate() {
                println!("Word #{}: {}", index + 1, prefix);
            }
        }
        Command::List { descending, prefix } => {
            let order = if descending {
                Order::Descending
            } else {
                Order::Ascending
            };
            let listed = match prefix {
                Some(prefix) => trie.words_with_prefix(&prefix, order)?,
                None => trie.words_in_order(order),
            };
            for word in listed {
                println!("{word}");
            }
        }
        Command::Count { prefix } => {
            println!("{}", trie.count_with_prefix(&prefix)?);
        }
        Command::Contains { word } => {
            println!("{}", trie.contains(&word)?);
        }
        Command::Matches { pattern } => {
            for word in trie.words_containing(&pattern)? {
                println!("{word}");
            }
        }
        Command::Remove { word } => {
            println!("{}", trie.remove(&word)?);
            for remaining in trie.words_in_order(Order::Ascending) {
                println!("{remaining}");
            }
        }
    }
    Ok(())
}

fn parse_corpus(text: &str, counted: bool) -> anyhow::Result<Vec<String>> {
    let mut tokens = text.split_whitespace();
    let expected = if counted {
        let head = tokens
            .next()
            .context("empty input, expected a leading word count")?;
        let count = head
            .parse::<usize>()
            .with_context(|| format!("bad word count {head:?}"))?;
        Some(count)
    } else {
        None
    };

    let words: Vec<String> = tokens.map(str::to_string).collect();
    if let Some(expected) = expected
        && words.len() != expected
    {
        anyhow::bail!("expected {expected} words, found {}", words.len());
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::parse_corpus;

    #[test]
    fn test_plain_corpus_splits_on_whitespace() {
        let words = parse_corpus("dog duck\n zebra\tdove", false).unwrap();
        assert_eq!(words, vec!["dog", "duck", "zebra", "dove"]);
    }

    #[test]
    fn test_counted_corpus_checks_the_header() {
        let words = parse_corpus("3 cat car cab", true).unwrap();
        assert_eq!(words, vec!["cat", "car", "cab"]);

        assert!(parse_corpus("4 cat car cab", true).is_err());
        assert!(parse_corpus("x cat", true).is_err());
        assert!(parse_corpus("", true).is_err());
    }

    #[test]
    fn test_empty_plain_corpus_is_fine() {
        assert!(parse_corpus("", false).unwrap().is_empty());
    }
}
