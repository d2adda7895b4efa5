//! # latchgraph
//!
//! Generic, cache-aware hash tables, a pluggable-index binary heap, and
//! the graph traversal algorithms built on top of them: breadth-first
//! and depth-first search, Dijkstra's shortest paths, Prim's minimum
//! spanning tree, and a dynamic-programming exact solver for the
//! travelling salesman problem.
//!
//! ## Module Organization
//!
//! ### Foundation
//! - [`cc`] - Compiler compatibility utilities (bit operations, branch hints)
//! - [`error`] - Fatal-error reporting for unrecoverable conditions
//!
//! ### Containers (C1-C2)
//! - [`dynbuf`] - Generic growable stack/queue buffer
//! - [`dlist`] - Doubly linked list with O(1) removal by handle
//!
//! ### Hash tables (C3-C4)
//! - [`primes`] - Built-in ascending prime table for division hashing
//! - [`hashutil`] - Key-to-u64 reduction shared by both hash tables
//! - [`ht_chained`] - Division-chained hash table
//! - [`mul_table`] - Odd-multiplier table for Knuth multiplicative hashing
//! - [`ht_open`] - Multiplication open-addressing hash table
//!
//! ### Graphs (C5-C7)
//! - [`block`] - Vertex-width parametricity and weight arithmetic
//! - [`adjacency`] - Adjacency-list view over an edge-array graph
//! - [`membership`] - The heap's pluggable element-to-position index
//! - [`heap`] - Generic binary min-heap
//! - [`traversal`] - BFS, DFS, Dijkstra, Prim, and TSP-DP

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![allow(clippy::module_inception)]

extern crate alloc;

#[cfg(test)]
extern crate std;

// =============================================================================
// Tier 0: Foundation (No Internal Dependencies)
// =============================================================================

/// Compiler compatibility utilities.
///
/// Provides bit manipulation operations (ffs, ctz, popcount, hi_bits) and
/// branch prediction hints.
pub mod cc;

/// Fatal-error reporting for the unrecoverable conditions described in
/// this crate's error-handling notes (allocation failure, integer
/// overflow, invalid caller arguments).
pub mod error;

// =============================================================================
// Tier 1: Containers (C1-C2)
// =============================================================================

/// Generic growable stack/queue buffer (C1).
pub mod dynbuf;

/// Doubly linked list with O(1) removal by handle (C2).
pub mod dlist;

// =============================================================================
// Tier 2: Hash tables (C3-C4)
// =============================================================================

/// Built-in ascending prime table for division hashing.
pub mod primes;

/// Key-to-u64 reduction shared by both hash table flavors.
pub mod hashutil;

/// Division-chained hash table (C3).
pub mod ht_chained;

/// Odd-multiplier table for Knuth multiplicative hashing.
pub mod mul_table;

/// Multiplication open-addressing hash table (C4).
pub mod ht_open;

// =============================================================================
// Tier 3: Graphs (C5-C7)
// =============================================================================

/// Vertex-width parametricity and weight arithmetic.
pub mod block;

/// Adjacency-list view over an edge-array graph (C5).
pub mod adjacency;

/// The heap's pluggable element-to-position index.
pub mod membership;

/// Generic binary min-heap with a pluggable membership index (C6).
pub mod heap;

/// Graph traversal algorithms: BFS, DFS, Dijkstra, Prim, TSP-DP (C7).
pub mod traversal;

// =============================================================================
// Re-exports for convenience
// =============================================================================

pub use adjacency::{AdjacencyList, EdgeGraph};
pub use block::{VertexId, Weight};
pub use cc::{ctz, ctz_u64, ffs, ffs_u64, popcount, popcount_u64};
pub use dlist::{DList, DetachedNode, NodeRef};
pub use dynbuf::DynBuf;
pub use heap::MinHeap;
pub use ht_chained::HtChained;
pub use ht_open::HtOpen;
pub use membership::{DenseIndexMap, MembershipMap};
pub use traversal::{bfs, dfs, dijkstra, prim, tsp_dp, DfsResult, TraversalResult};
