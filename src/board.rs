//! Board controller: the selected board, the page within it, and the
//! lookups that turn a button into a file to play.

mod controller;
mod cursor;

pub use controller::{BoardController, PAGE_SIZE};
