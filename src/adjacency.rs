//! Adjacency-list view (C5) over an edge-array graph.
//!
//! Builds, once, a per-vertex buffer of `(neighbour, weight)` pairs from
//! a caller-supplied edge-array graph. The base spec lays these pairs
//! out contiguously for cache locality during relaxation loops; here
//! each vertex's neighbour buffer is a [`crate::dynbuf::DynBuf`] of
//! `(V, W)` pairs, which is exactly a contiguous growable buffer of
//! fixed-size pair entries, just without manual offset arithmetic to
//! reach the weight half of each entry.

use alloc::vec::Vec;

use crate::dynbuf::DynBuf;

/// An edge-array graph: the thin contract this crate's traversal layer
/// consumes from its (external, collaborator) graph-construction layer.
/// `wts` is empty for unweighted graphs (`wt_size == 0` in the base
/// spec).
pub struct EdgeGraph<W> {
    /// Number of vertices (`0..num_vts`).
    pub num_vts: usize,
    /// Parallel source/destination arrays, one entry per edge.
    pub u: Vec<usize>,
    pub v: Vec<usize>,
    /// One weight per edge, or empty for an unweighted graph.
    pub wts: Vec<W>,
}

impl<W: Copy> EdgeGraph<W> {
    /// Construct from parallel edge arrays. `wts` must be either empty
    /// (unweighted) or the same length as `u`/`v`.
    pub fn new(num_vts: usize, u: Vec<usize>, v: Vec<usize>, wts: Vec<W>) -> Self {
        assert_eq!(u.len(), v.len(), "u/v edge arrays must be the same length");
        assert!(
            wts.is_empty() || wts.len() == u.len(),
            "wts must be empty (unweighted) or one weight per edge"
        );
        Self { num_vts, u, v, wts }
    }

    /// Number of edges.
    #[inline]
    pub fn num_es(&self) -> usize {
        self.u.len()
    }

    fn weight_at(&self, e: usize) -> W
    where
        W: Default,
    {
        if self.wts.is_empty() {
            W::default()
        } else {
            self.wts[e]
        }
    }
}

/// The adjacency-list view: for each source vertex, its outgoing
/// `(neighbour, weight)` pairs.
pub struct AdjacencyList<W> {
    vt_wts: Vec<DynBuf<(usize, W)>>,
}

impl<W: Copy + Default> AdjacencyList<W> {
    /// Allocate empty per-vertex buffers (`base_init`). `num_vts == 0`
    /// is accepted here — only the traversal entry points treat it as a
    /// precondition violation (§9 Open Question resolution).
    pub fn base_init(num_vts: usize) -> Self {
        let mut vt_wts = Vec::with_capacity(num_vts);
        vt_wts.resize_with(num_vts, DynBuf::new);
        Self { vt_wts }
    }

    /// Build a directed view: one `(v, w)` pair pushed onto `vt_wts[u]`
    /// per edge.
    pub fn dir_build(graph: &EdgeGraph<W>) -> Self {
        let mut list = Self::base_init(graph.num_vts);
        for e in 0..graph.num_es() {
            let (u, v) = (graph.u[e], graph.v[e]);
            list.vt_wts[u].push((v, graph.weight_at(e)));
        }
        list
    }

    /// Build an undirected view: each edge contributes a pair on both
    /// endpoints' buffers.
    pub fn undir_build(graph: &EdgeGraph<W>) -> Self {
        let mut list = Self::base_init(graph.num_vts);
        for e in 0..graph.num_es() {
            let (u, v) = (graph.u[e], graph.v[e]);
            let w = graph.weight_at(e);
            list.vt_wts[u].push((v, w));
            list.vt_wts[v].push((u, w));
        }
        list
    }

    /// Number of vertices this view was built over.
    #[inline]
    pub fn num_vts(&self) -> usize {
        self.vt_wts.len()
    }

    /// Iterate `u`'s outgoing `(neighbour, weight)` pairs.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = &(usize, W)> {
        self.vt_wts[u].iter()
    }

    /// `u`'s `idx`-th outgoing pair, or `None` past the end of its
    /// buffer. Used by DFS to resume a partially-scanned vertex.
    #[inline]
    pub fn neighbor_at(&self, u: usize, idx: usize) -> Option<&(usize, W)> {
        self.vt_wts[u].get(idx)
    }

    /// Out-degree of `u`.
    #[inline]
    pub fn degree(&self, u: usize) -> usize {
        self.vt_wts[u].len()
    }

    /// Total pair count across all buffers — equals `num_es` for a
    /// directed build or `2 * num_es` for an undirected one (§3
    /// invariant).
    pub fn total_pairs(&self) -> usize {
        self.vt_wts.iter().map(DynBuf::len).sum()
    }
}
