use std::fmt;

/// Identifier of a list item.
///
/// Issued by [`TodoList`](super::TodoList) from a monotonic counter, so two
/// items created by the same list never share an id, even when they are
/// added within the same clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(super) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(super) id: ItemId,
    pub(super) text: String,
}

impl Item {
    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether the input field composes a new item or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Add,
    Editing(ItemId),
}

/// What a call to [`TodoList::submit`](super::TodoList::submit) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was blank after trimming; nothing changed.
    Ignored,
    /// A new item was appended.
    Added(ItemId),
    /// The item under edit had its text replaced.
    Updated(ItemId),
}
