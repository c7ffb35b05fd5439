//! Sortable column headers.
//!
//! Clicking a sortable header cycles it through ascending, descending and
//! unsorted, clears every other header, and calls back with the header's
//! field name so the caller can reorder its rows. Only one header is active
//! at a time. The active selection can be captured as a [`SortContext`] and
//! restored later.
//!
//! # Example
//!
//! ```
//! use sortable::{SortContext, SortMode, attach};
//! use tuidom::{Document, Element, Event};
//!
//! let mut doc = Document::new(
//!     Element::row()
//!         .id("thead")
//!         .child(Element::text("Name").id("name").class("sortable"))
//!         .child(Element::text("Age").id("age").class("sortable").attr("fieldname", "age")),
//! );
//!
//! let sorter = attach(&mut doc, "thead", |field, mode| {
//!     println!("sort rows by {field} ({mode})");
//! })
//! .unwrap();
//!
//! doc.dispatch(&Event::release("age"));
//! assert_eq!(sorter.context(), SortContext::single("age", SortMode::Ascending));
//! ```

mod attach;
mod config;
mod context;
mod controller;
mod error;
mod header;
mod mode;

pub use attach::{attach, attach_with};
pub use config::SortConfig;
pub use context::SortContext;
pub use controller::{EventResult, SortCallback, SortController};
pub use error::SortError;
pub use header::Header;
pub use mode::SortMode;

/// Result type for sort operations.
pub type Result<T> = std::result::Result<T, SortError>;
