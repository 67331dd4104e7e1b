//! Entry table: the ordered description strings behind the index.

/// Position of an entry in the table, assigned at build time.
///
/// Uses u32 to keep posting lists compact; description lists are far
/// smaller than that.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered collection of entries backed by a single string buffer.
#[derive(Debug, Clone, Default)]
pub struct EntryTable {
    text: String,
    spans: Vec<(usize, usize)>,
}

impl EntryTable {
    /// Create a new empty entry table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its position.
    ///
    /// # Panics
    /// Panics if the table exceeds u32::MAX entries.
    pub fn insert(&mut self, entry: &str) -> EntryId {
        let id = self.spans.len();
        assert!(
            id <= u32::MAX as usize,
            "Entry table exceeded u32::MAX capacity ({} entries)",
            u32::MAX
        );
        let offset = self.text.len();
        self.text.push_str(entry);
        self.spans.push((offset, entry.len()));
        EntryId(id as u32)
    }

    /// Get an entry by position.
    pub fn get(&self, id: EntryId) -> Option<&str> {
        let &(offset, len) = self.spans.get(id.index())?;
        self.text.get(offset..offset + len)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Approximate heap bytes held by the table.
    pub fn allocated_bytes(&self) -> usize {
        self.text.capacity() + self.spans.capacity() * std::mem::size_of::<(usize, usize)>()
    }
}
