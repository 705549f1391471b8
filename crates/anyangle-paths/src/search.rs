use std::cmp::Ordering;
use std::collections::BinaryHeap;

use anyangle_core::{MeshNodeId, Point};

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::traits::AnyAnglePather;

/// Parent index of a node with no predecessor (the start).
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-node search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Open,
    Closed,
}

/// Scratch state of one node. Entries stamped with an older generation are
/// unseen in the current search.
#[derive(Clone, Debug)]
struct Node {
    g: f64,
    h: f64,
    parent: usize,
    generation: u32,
    status: Status,
    /// Sequence number of the node's live heap entry.
    seq: u64,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            status: Status::Open,
            seq: 0,
        }
    }
}

/// Heap entry, ordered by `f` then insertion sequence.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    idx: usize,
    f: f64,
    seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest inserted among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// ThetaStar
// ---------------------------------------------------------------------------

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<N> {
    /// Waypoints from start to goal, both included.
    pub path: Vec<N>,
    /// Cost of the path: the goal's final G-score.
    pub cost: f64,
    /// Number of nodes taken off the open set, goal included.
    pub expanded: usize,
}

/// Theta* search engine.
///
/// `ThetaStar` owns every piece of mutable search state: per-node costs and
/// parents, open/closed flags, the open heap and a neighbor buffer. The
/// searched grid or mesh is only read, so one topology can serve several
/// engines at once, one per thread. Node state is invalidated lazily by a
/// generation counter, so repeated queries need no reset and incur no
/// allocations once the buffers have grown to the size of the space.
pub struct ThetaStar<N> {
    nodes: Vec<Node>,
    generation: u32,
    open: BinaryHeap<OpenEntry>,
    nbuf: Vec<N>,
    /// Every `(index, G)` assignment of the last search, in order.
    #[cfg(test)]
    g_history: Vec<(usize, f64)>,
}

/// Engine for [`OccupancyGrid`](anyangle_core::OccupancyGrid) searches.
pub type GridSearch = ThetaStar<Point>;

/// Engine for [`NavMesh`](anyangle_core::NavMesh) searches.
pub type MeshSearch = ThetaStar<MeshNodeId>;

impl<N> Default for ThetaStar<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ThetaStar<N> {
    /// Create an engine with empty buffers.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
            #[cfg(test)]
            g_history: Vec::new(),
        }
    }

    /// Size the node table for `len` nodes and start a new generation.
    fn prepare(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped around: stale stamps could collide with the new one.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        #[cfg(test)]
        self.g_history.clear();
        self.generation
    }

    /// Store a new G-score for node `idx`. Within one search, G only ever
    /// decreases.
    #[inline]
    fn set_g(&mut self, idx: usize, g: f64, cur_gen: u32) {
        let node = &mut self.nodes[idx];
        debug_assert!(g >= 0.0, "negative G {g} at node {idx}");
        debug_assert!(
            node.generation != cur_gen || g < node.g,
            "G of node {idx} raised from {} to {g}",
            node.g
        );
        node.g = g;
        #[cfg(test)]
        self.g_history.push((idx, g));
    }
}

impl<N: Copy + Eq + std::fmt::Debug> ThetaStar<N> {
    /// Find a path from `start` to `goal` with Theta*.
    ///
    /// Nodes are expanded in order of `G + H`, ties going to the node queued
    /// first. When a neighbor is already open, it is re-parented to the
    /// current node's parent if that parent can see it and the direct edge
    /// is cheaper; otherwise the usual A* relaxation through the current
    /// node applies. Closed nodes are never reopened.
    ///
    /// Fails with [`SearchError::InvalidStart`] / [`SearchError::InvalidGoal`]
    /// if an endpoint is not part of `pather`'s space, and with
    /// [`SearchError::NoPathFound`] if the goal cannot be reached.
    pub fn search<P>(
        &mut self,
        pather: &P,
        start: N,
        goal: N,
        heuristic: Heuristic,
    ) -> Result<SearchResult<N>, SearchError>
    where
        P: AnyAnglePather<Node = N>,
    {
        let start_idx = pather.index(start).ok_or(SearchError::InvalidStart)?;
        let goal_idx = pather.index(goal).ok_or(SearchError::InvalidGoal)?;
        let goal_pos = pather.position(goal);

        let cur_gen = self.prepare(pather.node_count());
        let mut seq: u64 = 0;

        self.set_g(start_idx, 0.0, cur_gen);
        self.nodes[start_idx] = Node {
            g: 0.0,
            h: heuristic(pather.position(start), goal_pos),
            parent: NO_PARENT,
            generation: cur_gen,
            status: Status::Open,
            seq,
        };
        self.open.push(OpenEntry {
            idx: start_idx,
            f: self.nodes[start_idx].h,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        let found = 'search: loop {
            let Some(entry) = self.open.pop() else {
                break 'search false;
            };
            let ci = entry.idx;

            // Skip entries superseded by a later decrease, or already closed.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || cn.status != Status::Open || cn.seq != entry.seq {
                continue;
            }
            expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].status = Status::Closed;
            let current = pather.node(ci);
            let current_g = self.nodes[ci].g;
            let parent = self.nodes[ci].parent;
            log::trace!("theta*: expand {current:?} (g = {current_g:.3})");

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                let Some(ni) = pather.index(n) else {
                    continue;
                };

                if self.nodes[ni].generation == cur_gen {
                    if self.nodes[ni].status == Status::Closed {
                        continue;
                    }
                    // Vertex update: prefer the straight edge from the
                    // grandparent when it is visible.
                    let via = if parent != NO_PARENT && pather.line_of_sight(pather.node(parent), n)
                    {
                        parent
                    } else {
                        ci
                    };
                    let new_g = self.nodes[via].g + pather.move_cost(pather.node(via), n);
                    if new_g < self.nodes[ni].g {
                        self.set_g(ni, new_g, cur_gen);
                        seq += 1;
                        let node = &mut self.nodes[ni];
                        node.parent = via;
                        node.seq = seq;
                        self.open.push(OpenEntry {
                            idx: ni,
                            f: new_g + node.h,
                            seq,
                        });
                    }
                } else {
                    seq += 1;
                    let g = current_g + pather.move_cost(current, n);
                    let h = heuristic(pather.position(n), goal_pos);
                    self.set_g(ni, g, cur_gen);
                    self.nodes[ni] = Node {
                        g,
                        h,
                        parent: ci,
                        generation: cur_gen,
                        status: Status::Open,
                        seq,
                    };
                    self.open.push(OpenEntry {
                        idx: ni,
                        f: g + h,
                        seq,
                    });
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("theta*: no path from {start:?} to {goal:?} after {expanded} expansions");
            return Err(SearchError::NoPathFound);
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(pather.node(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        let cost = self.nodes[goal_idx].g;
        log::debug!(
            "theta*: {} waypoints from {start:?} to {goal:?}, cost {cost:.3}, {expanded} expanded",
            path.len()
        );
        Ok(SearchResult {
            path,
            cost,
            expanded,
        })
    }
}
