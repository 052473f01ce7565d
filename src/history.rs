//! Branching move history: a tree of positions connected by moves.
//!
//! Every node holds the position it represents, the notation of the move
//! that produced it (absent only at the root), an optional free-text
//! comment, one optional main-line child and an ordered list of variant
//! branches. Nodes live in an arena addressed by stable [`NodeId`]s;
//! deleting a line frees its whole subtree and recycles the slots.
//!
//! The tree is a plain mutable structure with no internal synchronization:
//! callers sharing one across threads must serialize the edit operations
//! themselves.

#[cfg(feature = "logging")]
use log::debug;

use crate::game::Game;

/// Stable handle to a node in a [`History`] arena.
///
/// Ids stay valid until their node's line is deleted; using a deleted id
/// afterwards panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    game: Game,
    parent: Option<NodeId>,
    notation: Option<String>,
    comment: Option<String>,
    main_line: Option<NodeId>,
    variants: Vec<NodeId>,
}

/// A rooted tree of positions with a distinguished main line and ordered
/// variant branches per node.
#[derive(Clone, Debug)]
pub struct History {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl History {
    /// Create a tree whose root holds `root_game`.
    #[must_use]
    pub fn new(root_game: Game) -> Self {
        let root = Node {
            game: root_game,
            parent: None,
            notation: None,
            comment: None,
            main_line: None,
            variants: Vec::new(),
        };
        History {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The position a node holds.
    #[must_use]
    pub fn game(&self, id: NodeId) -> &Game {
        &self.node(id).game
    }

    /// The node's parent; `None` only at the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Notation of the move that produced this node; `None` only at the
    /// root.
    #[must_use]
    pub fn notation(&self, id: NodeId) -> Option<&str> {
        self.node(id).notation.as_deref()
    }

    #[must_use]
    pub fn comment(&self, id: NodeId) -> Option<&str> {
        self.node(id).comment.as_deref()
    }

    pub fn set_comment(&mut self, id: NodeId, comment: impl Into<String>) {
        self.node_mut(id).comment = Some(comment.into());
    }

    pub fn clear_comment(&mut self, id: NodeId) {
        self.node_mut(id).comment = None;
    }

    /// The node's main-line child, if any.
    #[must_use]
    pub fn main_line(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).main_line
    }

    /// The node's variant branches, in insertion order.
    #[must_use]
    pub fn variants(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).variants
    }

    /// Attach a child produced by the move written as `notation`.
    ///
    /// The first child of a node becomes its main line; later children are
    /// appended as variants. A child whose notation matches an existing
    /// sibling (main line or variant) is not added again: the existing
    /// node's id is returned instead.
    pub fn add_child(&mut self, parent: NodeId, game: Game, notation: String) -> NodeId {
        if let Some(existing) = self.child_with_notation(parent, &notation) {
            return existing;
        }

        let id = self.alloc(Node {
            game,
            parent: Some(parent),
            notation: Some(notation),
            comment: None,
            main_line: None,
            variants: Vec::new(),
        });

        let parent_node = self.node_mut(parent);
        if parent_node.main_line.is_none() {
            parent_node.main_line = Some(id);
        } else {
            parent_node.variants.push(id);
        }

        id
    }

    /// The node that owns this line: the nearest ancestor recording one of
    /// the walked nodes as a variant, or the tree root.
    #[must_use]
    pub fn line_root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            match self.node(current).parent {
                None => return current,
                Some(parent) => {
                    if self.node(parent).variants.contains(&current) {
                        return parent;
                    }
                    current = parent;
                }
            }
        }
    }

    /// Delete the line `id` belongs to.
    ///
    /// If the line is owned by the tree root itself, the entire tree (main
    /// line and all variants) is cleared back to an empty root. Otherwise
    /// the variant branch whose main-line descent contains `id` is removed
    /// from its branch point.
    pub fn delete_line(&mut self, id: NodeId) {
        let line_root = self.line_root(id);

        if self.node(line_root).parent.is_none() {
            #[cfg(feature = "logging")]
            debug!("clearing history tree back to its root");

            let children: Vec<NodeId> = {
                let root = self.node(self.root);
                root.main_line
                    .into_iter()
                    .chain(root.variants.iter().copied())
                    .collect()
            };
            for child in children {
                self.free_subtree(child);
            }
            let root = self.node_mut(self.root);
            root.main_line = None;
            root.variants.clear();
        } else if let Some(index) = self.owning_variant_index(line_root, id) {
            let head = self.node_mut(line_root).variants.remove(index);

            #[cfg(feature = "logging")]
            debug!("deleting variant {index} at branch point {line_root:?}");

            self.free_subtree(head);
        }
    }

    /// Make the line `id` belongs to the main line at its branch point,
    /// demoting the previous main line to a variant in its place.
    ///
    /// No-op when the line is owned by the tree root (there is nothing to
    /// promote against).
    pub fn promote_line(&mut self, id: NodeId) {
        let line_root = self.line_root(id);
        if self.node(line_root).parent.is_none() {
            return;
        }

        let Some(index) = self.owning_variant_index(line_root, id) else {
            return;
        };

        #[cfg(feature = "logging")]
        debug!("promoting variant {index} at branch point {line_root:?}");

        let node = self.node_mut(line_root);
        if let Some(main) = node.main_line {
            let promoted = node.variants[index];
            node.variants[index] = main;
            node.main_line = Some(promoted);
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("deleted history node id")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("deleted history node id")
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn child_with_notation(&self, parent: NodeId, notation: &str) -> Option<NodeId> {
        let node = self.node(parent);
        node.main_line
            .into_iter()
            .chain(node.variants.iter().copied())
            .find(|&child| self.node(child).notation.as_deref() == Some(notation))
    }

    /// Index of the line root's variant whose main-line descent contains
    /// `id`.
    fn owning_variant_index(&self, line_root: NodeId, id: NodeId) -> Option<usize> {
        self.node(line_root)
            .variants
            .iter()
            .position(|&head| self.main_line_descent_contains(head, id))
    }

    fn main_line_descent_contains(&self, head: NodeId, id: NodeId) -> bool {
        let mut place = head;
        loop {
            if place == id {
                return true;
            }
            match self.node(place).main_line {
                Some(next) => place = next,
                None => return false,
            }
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes[current.0].take() {
                stack.extend(node.main_line);
                stack.extend(node.variants.iter().copied());
                self.free.push(current.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Move, Square};

    fn play(history: &mut History, from: NodeId, mv: Move) -> NodeId {
        let game = history.game(from);
        let san = game.san_for_move(mv, None).unwrap();
        let next = game.apply_move(mv, None).unwrap();
        history.add_child(from, next, san)
    }

    const E4: Move = Move::new(Square(1, 4), Square(3, 4));
    const D4: Move = Move::new(Square(1, 3), Square(3, 3));
    const NF3: Move = Move::new(Square(0, 6), Square(2, 5));
    const E5: Move = Move::new(Square(6, 4), Square(4, 4));
    const C5: Move = Move::new(Square(6, 2), Square(4, 2));

    #[test]
    fn test_first_child_becomes_main_line() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let main = play(&mut history, root, E4);
        let variant = play(&mut history, root, D4);

        assert_eq!(history.main_line(root), Some(main));
        assert_eq!(history.variants(root), &[variant]);
        assert_eq!(history.notation(main), Some("e4"));
        assert_eq!(history.notation(variant), Some("d4"));
        assert_eq!(history.parent(main), Some(root));
        assert_eq!(history.notation(root), None);
    }

    #[test]
    fn test_duplicate_notation_is_ignored() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let first = play(&mut history, root, E4);
        let again = play(&mut history, root, E4);

        assert_eq!(first, again);
        assert_eq!(history.main_line(root), Some(first));
        assert!(history.variants(root).is_empty());
    }

    #[test]
    fn test_line_root_of_main_line_is_tree_root() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let a = play(&mut history, root, E4);
        let b = play(&mut history, a, E5);

        assert_eq!(history.line_root(b), root);
        assert_eq!(history.line_root(a), root);
        assert_eq!(history.line_root(root), root);
    }

    #[test]
    fn test_line_root_of_variant_is_branch_point() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let e4 = play(&mut history, root, E4);
        let _e5 = play(&mut history, e4, E5);
        let c5 = play(&mut history, e4, C5); // variant at e4
        let deeper = play(&mut history, c5, NF3);

        assert_eq!(history.line_root(c5), e4);
        assert_eq!(history.line_root(deeper), e4);
    }

    #[test]
    fn test_promote_swaps_at_branch_point() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let e4 = play(&mut history, root, E4);
        let e5 = play(&mut history, e4, E5);
        let c5 = play(&mut history, e4, C5);
        let deeper = play(&mut history, c5, NF3);

        history.promote_line(deeper);

        assert_eq!(history.main_line(e4), Some(c5));
        assert_eq!(history.variants(e4), &[e5]);
        // Promoting the whole-tree main line has nothing to swap against.
        history.promote_line(e4);
        assert_eq!(history.main_line(root), Some(e4));
    }

    #[test]
    fn test_delete_main_line_clears_tree() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let e4 = play(&mut history, root, E4);
        let e5 = play(&mut history, e4, E5);
        let _d4 = play(&mut history, root, D4);

        history.delete_line(e5);

        assert_eq!(history.main_line(root), None);
        assert!(history.variants(root).is_empty());
    }

    #[test]
    fn test_delete_variant_removes_only_that_branch() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let e4 = play(&mut history, root, E4);
        let e5 = play(&mut history, e4, E5);
        let c5 = play(&mut history, e4, C5);
        let deeper = play(&mut history, c5, NF3);

        history.delete_line(deeper);

        assert_eq!(history.main_line(e4), Some(e5));
        assert!(history.variants(e4).is_empty());
        assert_eq!(history.main_line(root), Some(e4));
    }

    #[test]
    fn test_deleted_slots_are_recycled() {
        let mut history = History::new(Game::initial());
        let root = history.root();

        let e4 = play(&mut history, root, E4);
        let _e5 = play(&mut history, e4, E5);
        let before = history.nodes.len();

        history.delete_line(e4);
        let d4 = play(&mut history, root, D4);

        assert!(d4.0 < before, "freed slot should be reused");
        assert_eq!(history.nodes.len(), before);
    }

    #[test]
    fn test_comments() {
        let mut history = History::new(Game::initial());
        let root = history.root();
        let e4 = play(&mut history, root, E4);

        assert_eq!(history.comment(e4), None);
        history.set_comment(e4, "best by test");
        assert_eq!(history.comment(e4), Some("best by test"));
        history.clear_comment(e4);
        assert_eq!(history.comment(e4), None);

        // Comments are independent of tree structure.
        history.set_comment(root, "start");
        assert_eq!(history.comment(root), Some("start"));
    }
}
