use super::position::Direction;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier of a word within one mapper run: its index in the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Join descriptor stored on the node that was attached to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub peer: NodeId,
    pub peer_index: usize,
    pub self_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    pub id: NodeId,
    pub text: String,
    pub direction: Direction,
    letters: Vec<char>,
    connections: BTreeMap<usize, Connection>,
}

impl WordNode {
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = text.chars().collect();
        Self {
            id,
            text,
            direction: Direction::default(),
            letters,
            connections: BTreeMap::new(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Length in cells, which is the number of characters rather than bytes.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn connections(&self) -> &BTreeMap<usize, Connection> {
        &self.connections
    }

    pub fn connection_at(&self, index: usize) -> Option<&Connection> {
        self.connections.get(&index)
    }

    /// Records a junction at `connection.self_index`.
    ///
    /// A letter can only be a junction once; an existing entry is kept and the
    /// new one is handed back as `Err`.
    pub(crate) fn connect(&mut self, connection: Connection) -> Result<(), Connection> {
        if self.connections.contains_key(&connection.self_index) {
            return Err(connection);
        }
        self.connections.insert(connection.self_index, connection);
        Ok(())
    }
}
