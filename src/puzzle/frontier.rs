use crate::tubes::{Move, PuzzleState, StateKey};
use std::collections::VecDeque;

pub(super) struct SolverNode {
    pub state: PuzzleState,
    pub key: StateKey,
    pub path: Option<usize>,
    pub depth: usize,
}

impl SolverNode {
    pub fn root(state: PuzzleState) -> SolverNode {
        let key = state.canonical_key();

        SolverNode {
            state,
            key,
            path: None,
            depth: 0,
        }
    }
}

/// Move paths shared between search nodes, stored as parent links.
pub(super) struct PathArena {
    links: Vec<(Option<usize>, Move)>,
}

impl PathArena {
    pub fn new() -> PathArena {
        PathArena { links: Vec::new() }
    }

    pub fn extend(&mut self, parent: Option<usize>, game_move: Move) -> usize {
        self.links.push((parent, game_move));
        self.links.len() - 1
    }

    pub fn moves(&self, mut tip: Option<usize>) -> Vec<Move> {
        let mut moves = Vec::new();

        while let Some(index) = tip {
            let (parent, game_move) = self.links[index];
            moves.push(game_move);
            tip = parent;
        }

        moves.reverse();
        moves
    }
}

/// Queue of nodes waiting to be explored, ordered by path length.
///
/// Children are always one move deeper than the node being expanded, which is the deepest
/// node dequeued so far, so appending keeps the queue sorted.
pub(super) struct Frontier {
    queue: VecDeque<SolverNode>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, node: SolverNode) {
        debug_assert!(self.queue.back().map_or(true, |last| last.depth <= node.depth));
        self.queue.push_back(node);
    }

    pub fn pop(&mut self) -> Option<SolverNode> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn retain_shorter_than(&mut self, depth: usize) {
        self.queue.retain(|node| node.depth < depth);
    }
}
