//! To-do list state.
//!
//! [`TodoList`] owns the three pieces of view state: the ordered items, the
//! draft text of the input field, and the optional edit target. The fields
//! are private and only change through the operations below, so the edit
//! target always refers to an item that is still in the list.
//!
//! ```
//! use todo_tui::todo::{Mode, SubmitOutcome, TodoList};
//!
//! let mut list = TodoList::new();
//! list.set_draft("Buy milk");
//! let SubmitOutcome::Added(id) = list.submit() else { unreachable!() };
//!
//! assert!(list.begin_edit(id));
//! assert_eq!(list.mode(), Mode::Editing(id));
//! list.set_draft("Buy milk and eggs");
//! assert_eq!(list.submit(), SubmitOutcome::Updated(id));
//!
//! assert_eq!(list.items()[0].text(), "Buy milk and eggs");
//! assert_eq!(list.mode(), Mode::Add);
//! ```

mod types;

pub use types::{Item, ItemId, Mode, SubmitOutcome};

#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<Item>,
    draft: String,
    editing: Option<ItemId>,
    next_id: u64,
}

impl TodoList {
    /// An empty list in add mode with an empty draft.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            editing: None,
            next_id: 1,
        }
    }

    /// Items in insertion order, which is also display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The item currently being edited, if any.
    pub const fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub const fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Editing(id),
            None => Mode::Add,
        }
    }

    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Row index of the item with `id`.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Replace the draft text verbatim. No trimming happens here.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft.
    ///
    /// A draft that is blank after trimming is ignored and left in place.
    /// Otherwise the untrimmed draft either replaces the text of the item
    /// under edit (keeping its id and position) or is appended as a new
    /// item. The draft is cleared and the list returns to add mode.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.draft.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let text = std::mem::take(&mut self.draft);
        if let Some(id) = self.editing.take()
            && let Some(item) = self.items.iter_mut().find(|item| item.id == id)
        {
            item.text = text;
            tracing::debug!(id = %id, "item updated");
            return SubmitOutcome::Updated(id);
        }

        let id = self.issue_id();
        self.items.push(Item { id, text });
        tracing::debug!(id = %id, len = self.items.len(), "item added");
        SubmitOutcome::Added(id)
    }

    /// Load the item with `id` into the draft and make it the edit target.
    ///
    /// Returns `false` and changes nothing when no such item exists.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            tracing::debug!(id = %id, "edit requested for missing item");
            return false;
        };
        self.draft.clone_from(&item.text);
        self.editing = Some(id);
        tracing::debug!(id = %id, "editing item");
        true
    }

    /// Remove the item with `id`.
    ///
    /// Removing the edit target also clears the draft and returns to add
    /// mode. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
            self.draft.clear();
        }
        tracing::debug!(id = %id, len = self.items.len(), "item removed");
        Some(removed)
    }

    fn issue_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
