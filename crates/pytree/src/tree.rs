//! Level-by-level expansion of a branch into a tree.
//!
//! Generation `n` of a branch is every branch exactly `n` growth steps below
//! it, listed in parent order with the left child before the right one.
//! Generation `n` is generation `n - 1` with the growth rule applied to each
//! member, so building all levels up to a depth only ever grows each level
//! once as long as the generations are memoized.

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use crate::branch::{Branch, BranchColors};
use crate::cache::{BranchKey, GenerationCache};

/// How a branch produces its children.
pub trait Growth {
    fn grow(&self, branch: &Branch) -> Vec<Branch>;
}

/// The plain binary rule: children keep their parent's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryGrowth {
    pub left: bool,
    pub right: bool,
}

impl Default for BinaryGrowth {
    fn default() -> Self {
        Self { left: true, right: true }
    }
}

impl Growth for BinaryGrowth {
    fn grow(&self, branch: &Branch) -> Vec<Branch> {
        branch.grow(self.left, self.right)
    }
}

/// The binary rule with every grown branch repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredGrowth {
    pub colors: BranchColors,
    pub left: bool,
    pub right: bool,
}

impl ColoredGrowth {
    pub fn new(colors: BranchColors) -> Self {
        Self { colors, left: true, right: true }
    }
}

impl Growth for ColoredGrowth {
    fn grow(&self, branch: &Branch) -> Vec<Branch> {
        branch.grow_colored(self.colors, self.left, self.right)
    }
}

/// A growth rule together with the memo table of what it has produced.
#[derive(Debug, Default)]
pub struct Expansion<G> {
    growth: G,
    cache: GenerationCache,
}

impl<G: Growth> Expansion<G> {
    pub fn new(growth: G) -> Self {
        Self { growth, cache: GenerationCache::new() }
    }

    pub fn growth(&self) -> &G {
        &self.growth
    }

    pub fn cache(&self) -> &GenerationCache {
        &self.cache
    }

    /// Branches exactly `n` growth steps below `root`.
    pub fn nth_generation(&self, root: &Branch, n: usize) -> Arc<[Branch]> {
        let Some(key) = BranchKey::of(root) else {
            debug!(n, "root has non-finite parameters, expanding without cache");
            return self.expand_uncached(root, n).into();
        };

        if let Some(hit) = self.cache.get(&key, n) {
            trace!(n, "generation cache hit");
            return hit;
        }

        // Resume from the deepest generation already known.
        let (mut level, mut current) = (1..n)
            .rev()
            .find_map(|k| self.cache.get(&key, k).map(|g| (k, g)))
            .unwrap_or_else(|| (0, Arc::from(vec![*root])));

        while level < n {
            let next = self.step(&current);
            level += 1;
            trace!(level, branches = next.len(), "grew generation");
            current = self.cache.insert(key, level, next.into());
        }
        current
    }

    /// Generations `0..depth` of `root`. Zero depth gives an empty tree.
    pub fn build_tree(&self, root: &Branch, depth: usize) -> Tree {
        let levels: Vec<Arc<[Branch]>> = (0..depth)
            .map(|n| self.nth_generation(root, n))
            .collect();
        debug!(depth, branches = levels.iter().map(|l| l.len()).sum::<usize>(), "built tree");
        Tree { levels }
    }

    fn expand_uncached(&self, root: &Branch, n: usize) -> Vec<Branch> {
        let mut current = vec![*root];
        for _ in 0..n {
            current = self.step(&current);
        }
        current
    }

    fn step(&self, generation: &[Branch]) -> Vec<Branch> {
        generation
            .iter()
            .flat_map(|b| self.growth.grow(b))
            .collect()
    }
}

/// Process-wide expansion used by the `Branch` convenience methods.
fn shared() -> &'static Expansion<BinaryGrowth> {
    static SHARED: OnceLock<Expansion<BinaryGrowth>> = OnceLock::new();
    SHARED.get_or_init(|| Expansion::new(BinaryGrowth::default()))
}

impl Branch {
    /// Descendants exactly `n` growth steps below this branch (both children
    /// every time). Memoized for the life of the process.
    pub fn nth_generation(&self, n: usize) -> Arc<[Branch]> {
        shared().nth_generation(self, n)
    }

    /// Generations `0..depth` of this branch.
    pub fn build_tree(&self, depth: usize) -> Tree {
        shared().build_tree(self, depth)
    }
}

/// Branches grouped by generation; `level(0)` holds the root alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    levels: Vec<Arc<[Branch]>>,
}

impl Tree {
    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, n: usize) -> Option<&[Branch]> {
        self.levels.get(n).map(|l| &**l)
    }

    /// `(level, branches)` pairs in level order.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &[Branch])> {
        self.levels.iter().enumerate().map(|(i, l)| (i, &**l))
    }

    /// Every branch with its level, level by level.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Branch)> {
        self.levels().flat_map(|(i, l)| l.iter().map(move |b| (i, b)))
    }

    /// Total number of branches over all levels.
    pub fn branch_count(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }
}
