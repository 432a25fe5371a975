//! A single best-first search loop shared by every solver. Breadth-first search and A* differ
//! only in the [Frontier] that decides which discovered node is expanded next, so both are
//! expressed as [search] with a different frontier and heuristic.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A node waiting to be expanded. `index` refers to the node's slot in the discovery map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry<C> {
    pub estimated_cost: C,
    pub cost: C,
    pub index: usize,
}

/// The set of discovered but not yet expanded nodes.
pub trait Frontier<C> {
    /// Whether a node that is already discovered may be pushed again when a strictly cheaper
    /// route to it turns up.
    const REOPEN: bool;

    fn push(&mut self, entry: FrontierEntry<C>);
    fn pop(&mut self) -> Option<FrontierEntry<C>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Nodes are never reopened, which makes discovery equivalent to marking a
/// node visited on enqueue.
#[derive(Clone, Debug)]
pub struct FifoFrontier<C> {
    queue: VecDeque<FrontierEntry<C>>,
}

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    const REOPEN: bool = false;

    fn push(&mut self, entry: FrontierEntry<C>) {
        self.queue.push_back(entry);
    }
    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

struct SmallestCostHolder<C> {
    entry: FrontierEntry<C>,
    sequence: usize,
}

impl<C: Ord> Eq for SmallestCostHolder<C> {}

impl<C: Ord> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Ord> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element: the smallest estimated cost wins, and among equal
        // estimates the entry pushed first.
        other
            .entry
            .estimated_cost
            .cmp(&self.entry.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Pops the entry with the lowest estimated cost. Ties are broken by insertion order, the
/// earliest push first, so exploration is reproducible for identical inputs.
pub struct PriorityFrontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
    pushed: usize,
}

impl<C: Ord> Default for PriorityFrontier<C> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<C: Ord> Frontier<C> for PriorityFrontier<C> {
    const REOPEN: bool = true;

    fn push(&mut self, entry: FrontierEntry<C>) {
        self.heap.push(SmallestCostHolder {
            entry,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }
    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.heap.pop().map(|holder| holder.entry)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Clone, Copy, Debug)]
struct Visit<C> {
    parent: usize,
    cost: C,
    expanded: bool,
}

/// Outcome of a search: every node in the order it was expanded, every node in the order it was
/// first discovered, and the path from the start to the first node satisfying the success
/// predicate. The path is empty when no such node was reachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<N, C> {
    pub trace: Vec<N>,
    pub discovered: Vec<N>,
    pub path: Vec<N>,
    pub cost: Option<C>,
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, Visit<C>>, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
        parents.get_index(i).map(|(_, visit)| visit.parent)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Expands nodes in the order chosen by `frontier`, starting from `start`, until a node
/// satisfying `success` is expanded or the frontier runs dry.
///
/// A node is expanded at most once. With a reopening frontier a discovered node is pushed again
/// only for a strictly lower cost, and stale entries are dropped when popped. With a consistent
/// heuristic this yields optimal paths; a zero heuristic on a [FifoFrontier] with unit costs is
/// breadth-first search.
pub fn search<N, C, FR, FN, IN, FH, FS>(
    start: &N,
    mut frontier: FR,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FR: Frontier<C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, Visit<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        Visit {
            parent: usize::MAX,
            cost: Zero::zero(),
            expanded: false,
        },
    );
    frontier.push(FrontierEntry {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut trace = Vec::new();
    let mut discovered = vec![start.clone()];
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let Some((node, visit)) = parents.get_index_mut(index) else {
                continue;
            };
            // A node may sit in the frontier several times if a cheaper route was found after
            // it was pushed. Only the entry matching the best known cost is expanded.
            if visit.expanded || cost > visit.cost {
                continue;
            }
            visit.expanded = true;
            trace.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, index);
                return Exploration {
                    trace,
                    discovered,
                    path,
                    cost: Some(cost),
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    discovered.push(e.key().clone());
                    e.insert(Visit {
                        parent: index,
                        cost: new_cost,
                        expanded: false,
                    });
                }
                Occupied(mut e) => {
                    let visit = e.get();
                    if FR::REOPEN && !visit.expanded && new_cost < visit.cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(Visit {
                            parent: index,
                            cost: new_cost,
                            expanded: false,
                        });
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Frontier exhausted after expanding {} of {} discovered nodes",
        trace.len(),
        parents.len()
    );
    Exploration {
        trace,
        discovered,
        path: Vec::new(),
        cost: None,
    }
}
