#![deny(missing_docs)]
//! Concurrent skip-list memtable for a log-structured key-value engine.
//!
//! [`SkipList`] is the in-memory write buffer: an ordered map with expected
//! `O(log n)` insert, delete and lookup, one writer at a time and lock-free
//! readers. Keys are unique and values immutable once inserted; an update is
//! a delete followed by an insert, decided by the surrounding engine.
//!
//! ```rust
//! use skipmem::{SkipList, SkipListError};
//!
//! let list: SkipList<u64, String> = SkipList::new();
//! list.insert(1, "hello".into()).unwrap();
//! list.insert(2, "world".into()).unwrap();
//! assert_eq!(list.insert(2, "again".into()), Err(SkipListError::DuplicateKey));
//!
//! list.delete(&1).unwrap();
//! assert_eq!(list.get(&1), None);
//! assert_eq!(list.get(&2).as_deref(), Some("world"));
//! assert_eq!(list.len(), 1);
//! ```
//!
//! The list talks to three collaborators, all injected at construction:
//! a [`Comparator`] for key order, a [`MemoryOwner`] for node storage and a
//! [`DiagnosticSink`] for operator-facing reports. Structural events are also
//! logged through `tracing` under the `skipmem` target.

/// Key ordering.
pub mod comparator;

/// Leveled diagnostic side channel.
pub mod diagnostics;

mod error;

/// Memory owners node storage is drawn from.
pub mod memory;

mod observability;

/// Construction options.
pub mod option;

/// Byte-size accounting for keys and values.
pub mod size;

/// The ordered index itself.
pub mod skiplist;

pub use crate::{
    comparator::{BytewiseComparator, Comparator, OrdComparator, ReverseComparator},
    diagnostics::{DiagnosticSink, Level, NoopSink, TracingSink},
    error::SkipListError,
    memory::{AllocError, BoundedMemory, MemoryOwner, SystemMemory},
    option::SkipListOptions,
    size::ByteSize,
    skiplist::{Entries, Iter, SkipList, SkipListStats, BRANCHING, MAX_HEIGHT},
};
