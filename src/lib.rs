//! An unbalanced, parent-linked binary search tree map for Rust.
//!
//! This crate provides [`OrderedMap`], a map from ordered keys to values stored in
//! a plain binary search tree. Every node carries a link to its parent, which lets
//! removal splice the tree in place: the link that points at the removed node is
//! rewritten directly instead of being rediscovered from the root.
//!
//! # Example
//!
//! ```
//! use bst_map::{Error, OrderedMap};
//!
//! let mut scores = OrderedMap::new();
//! scores.insert_or_update("Alice", 100);
//! scores.insert_or_update("Bob", 85);
//! scores.insert_or_update("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Ok(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Lookups never insert.
//! assert_eq!(scores.get(&"Dave"), Err(Error::KeyNotFound));
//! assert!(!scores.contains(&"Dave"));
//!
//! // Copies are independent of the original.
//! let mut copy = scores.clone();
//! copy.remove(&"Alice");
//! assert!(scores.contains(&"Alice"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **No rebalancing** - The shape of the tree is decided by insertion order alone
//! - **Explicit lookup errors** - [`OrderedMap::get`] returns [`Error::KeyNotFound`]
//! - **Cheap moves** - [`OrderedMap::take`] hands over the nodes without visiting them
//!
//! # Implementation
//!
//! Nodes live in an arena owned by the map and refer to each other through
//! small non-zero handles, so a missing child or parent costs no extra space.
//! Dropping the map drops the arena, which releases each node exactly once
//! without walking the tree.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod ordered_map;

pub use error::{Error, Result};
pub use ordered_map::OrderedMap;
