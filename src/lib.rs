//! intchain: an integer-keyed chained hash map and an arena-backed singly
//! linked list with a library of structural algorithms.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: express classic pointer-chasing structures (chained hash table,
//!   singly linked list surgery) in safe Rust without giving up the shapes
//!   the algorithms need: bucket chains, shared tails, deliberate cycles.
//! - Layers:
//!   - IntHashMap: separate-chaining table specialized to `i64` keys and
//!     values. Prime initial capacity, `key mod capacity` bucketing, growth
//!     at 0.75 load factor with a full relink rehash. Entries live in a
//!     slotmap arena; chains are slot-key links, not owning pointers.
//!   - ListArena / NodeRef: node storage for any number of singly linked
//!     lists. A list is its head `Option<NodeRef>`; `NodeRef` is a small
//!     `Copy` handle over a generational slot key, so node identity
//!     comparison (intersection, cycle detection) is plain `==`.
//!   - Algorithms on ListArena: reversal, copying, deduplication (backed by
//!     IntHashMap for O(1) membership), removal by value, k-th from end in
//!     three variants, two palindrome strategies, reversed-digit addition,
//!     intersection by identity, Floyd cycle detection, odd/even index
//!     partition.
//!
//! Constraints
//! - Single-threaded; no interior mutability, no locking. Callers serialize
//!   access if they ever need to.
//! - All storage is exclusively owned by the map or the arena. Unlinking is
//!   a link rewrite plus one slotmap removal, so a removed entry/node is
//!   released exactly once and a stale handle never resolves (generational
//!   keys make slot reuse visible).
//! - No `unsafe`. No per-entry heap allocations beyond arena storage.
//!
//! Why an arena?
//! - `Box`-owned `next` pointers cannot express two lists sharing a tail or
//!   a tail linked back into the list, and both shapes are first-class
//!   inputs here. Slot keys keep those graphs safe: following a link to a
//!   removed node yields `None` instead of a dangling read.
//!
//! Notes and non-goals
//! - Keys and values are `i64`; there is no generic key/value typing.
//! - Traversal of a cyclic list is only defined for `detect_cycle` and
//!   `clear`; the other algorithms require acyclic inputs.
//! - Growth doubles capacity without re-priming. Initial sizing is prime;
//!   grown sizes are not. See DESIGN.md for the rationale.

mod algos;
mod int_map;
mod int_map_proptest;
mod list;

// Public surface
pub use int_map::IntHashMap;
pub use list::{ListArena, NodeRef};
