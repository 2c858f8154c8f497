//! The state a host keeps for as long as it shows a tree: the tree itself,
//! how to lay it out, and the commands a user can issue against it.
//!
//! # Examples
//!
//! ```
//! use bst_view::session::{Outcome, Session};
//!
//! let mut session = Session::default();
//!
//! assert_eq!(session.add("5").unwrap(), Outcome::Applied);
//! assert_eq!(session.add("5").unwrap(), Outcome::Unchanged);
//! assert!(session.add("five").is_err());
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.sorted, vec![5]);
//! ```

use std::str::FromStr;

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::input::parse_key;
use crate::layout::{self, Edge, LayoutConfig, Positions};
use crate::tree::{Key, Tree};

/// Whether a command changed the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A node was added or removed.
    Applied,
    /// The key was already present (add) or absent (remove).
    Unchanged,
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Unchanged
        }
    }
}

/// What running a [`Command`] produced, for the host to act on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// `add`, `del` or `clear` ran.
    Changed(Outcome),
    /// Answer to `find`.
    Found {
        /// The key that was looked up.
        key: Key,
        /// Whether it is in the tree.
        found: bool,
    },
    /// The host should print the current [`Snapshot`].
    Show,
    /// The host should print [`HELP`].
    Help,
    /// The host should stop reading commands.
    Quit,
}

/// Everything needed to redraw the tree after a change.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// All keys in ascending order.
    pub sorted: Vec<Key>,
    /// Where to draw each key.
    pub positions: Positions,
    /// Lines from each parent to its children.
    pub edges: Vec<Edge>,
}

/// Owns one [`Tree`] for the lifetime of a host.
#[derive(Debug, Default)]
pub struct Session {
    tree: Tree,
    layout: LayoutConfig,
}

impl Session {
    /// A session with an empty tree drawn using `layout`.
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            tree: Tree::new(),
            layout,
        }
    }

    /// The tree being shown.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Validates `text` as a key and inserts it.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, text: &str) -> Result<Outcome> {
        let key = parse_key(text)?;
        let outcome = Outcome::from(self.tree.insert(key));
        match outcome {
            Outcome::Applied => debug!(key, len = self.tree.len(), "inserted"),
            Outcome::Unchanged => trace!(key, "already present"),
        }
        Ok(outcome)
    }

    /// Validates `text` as a key and deletes it.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, text: &str) -> Result<Outcome> {
        let key = parse_key(text)?;
        let outcome = Outcome::from(self.tree.delete(key));
        match outcome {
            Outcome::Applied => debug!(key, len = self.tree.len(), "deleted"),
            Outcome::Unchanged => trace!(key, "not present"),
        }
        Ok(outcome)
    }

    /// Validates `text` as a key and looks it up.
    pub fn contains(&self, text: &str) -> Result<bool> {
        Ok(self.tree.search(parse_key(text)?))
    }

    /// Drops every key. `Unchanged` if the tree was already empty.
    pub fn clear(&mut self) -> Outcome {
        let outcome = Outcome::from(!self.tree.is_empty());
        debug!(len = self.tree.len(), "clearing tree");
        self.tree = Tree::new();
        outcome
    }

    /// Computes the sorted listing, layout and edges for the current tree.
    pub fn snapshot(&self) -> Snapshot {
        let positions = layout::positions(&self.tree, &self.layout);
        let edges = layout::edges(&self.tree, &positions);
        trace!(nodes = positions.len(), edges = edges.len(), "snapshot");
        Snapshot {
            sorted: self.tree.inorder_traversal(),
            positions,
            edges,
        }
    }

    /// Runs one parsed command. Keys are validated here, so a bad key fails
    /// the same way for every command that takes one.
    pub fn run(&mut self, command: &Command) -> Result<Reply> {
        let reply = match command {
            Command::Add(text) => Reply::Changed(self.add(text)?),
            Command::Delete(text) => Reply::Changed(self.remove(text)?),
            Command::Find(text) => {
                let key = parse_key(text)?;
                Reply::Found {
                    key,
                    found: self.tree.search(key),
                }
            }
            Command::Clear => Reply::Changed(self.clear()),
            Command::Show => Reply::Show,
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}

/// One line of user input.
///
/// Keys are kept as text and validated when the command runs so a bad key
/// is reported the same way however it was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add N` / `insert N`
    Add(String),
    /// `del N` / `delete N`
    Delete(String),
    /// `find N` / `search N`
    Find(String),
    /// `show`
    Show,
    /// `clear`
    Clear,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Text printed for the `help` command.
pub const HELP: &str = "\
commands:
  add N      insert N (a non-negative integer)
  del N      delete N
  find N     report whether N is in the tree
  show       print the sorted keys, positions and edges
  clear      remove every key
  help       print this message
  quit       leave";

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let key = |name: &'static str| {
            if rest.is_empty() {
                Err(Error::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" | "insert" => key("add").map(Command::Add),
            "del" | "delete" => key("del").map(Command::Delete),
            "find" | "search" => key("find").map(Command::Find),
            "show" => Ok(Command::Show),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(Error::UnknownCommand(verb.to_string())),
        }
    }
}
