//! Single-line editing for the draft input.
//!
//! The draft text itself belongs to [`crate::todo::TodoList`]; this module
//! only tracks where the cursor sits and computes the text that results
//! from each keystroke.

mod line;

pub use line::LineCursor;
