use crate::maze::Cell;
use crate::search::FifoFrontier;
use crate::solver::GridSolver;

/// Breadth-first search. Cells are expanded in order of discovery, which yields shortest paths
/// on a uniform-cost grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<u32>;

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> u32 {
        0
    }
}
