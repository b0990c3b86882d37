//! Frozen random-forest evaluator.
//!
//! The forest is deserialized from the artifact and never mutated. Each tree
//! is a flat node arena walked from index 0; the artifact loader guarantees
//! child indexes stay in bounds and only point forward, so every walk
//! terminates at a leaf.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::model::ChurnLabel;

/// One node of a decision tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Terminal node carrying the tree's vote (0 or 1).
    Leaf {
        /// Class label this leaf votes for.
        label: u8,
    },
    /// Binary split: `feature <= threshold` goes left, otherwise right.
    Split {
        /// Column index into the feature vector.
        feature: usize,
        /// Split threshold on the (scaled) feature value.
        threshold: f64,
        /// Node index taken when the feature is at or below the threshold.
        left: usize,
        /// Node index taken when the feature is above the threshold.
        right: usize,
    },
}

/// A single decision tree as a flat node arena rooted at index 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Nodes of the tree; children always sit at higher indexes than their
    /// parent.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one feature vector and return its vote.
    ///
    /// Out-of-range indexes vote 0; they cannot occur for a tree that passed
    /// artifact validation.
    pub fn decide(&self, features: ArrayView1<'_, f64>) -> u8 {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { label }) => return *label,
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(0.0);
                    let next = if value <= *threshold { *left } else { *right };
                    // Children sit strictly after their parent, so a
                    // non-advancing index means a malformed tree.
                    if next <= index {
                        return 0;
                    }
                    index = next;
                }
                None => return 0,
            }
        }
    }
}

/// Majority vote across all trees; ties go to [`ChurnLabel::Stays`].
pub fn vote(trees: &[DecisionTree], features: ArrayView1<'_, f64>) -> ChurnLabel {
    let churn_votes = trees
        .iter()
        .filter(|tree| tree.decide(features) == 1)
        .count();
    if churn_votes * 2 > trees.len() {
        ChurnLabel::Churns
    } else {
        ChurnLabel::Stays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn stump(feature: usize, threshold: f64, low: u8, high: u8) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { label: low },
                TreeNode::Leaf { label: high },
            ],
        }
    }

    #[test]
    fn split_sends_low_values_left() {
        let tree = stump(0, 0.5, 1, 0);
        let low = Array1::from(vec![0.0]);
        let high = Array1::from(vec![1.0]);
        assert_eq!(tree.decide(low.view()), 1);
        assert_eq!(tree.decide(high.view()), 0);
    }

    #[test]
    fn boundary_value_goes_left() {
        let tree = stump(0, 1.0, 1, 0);
        let boundary = Array1::from(vec![1.0]);
        assert_eq!(tree.decide(boundary.view()), 1);
    }

    #[test]
    fn majority_vote_needs_a_strict_majority() {
        let features = Array1::from(vec![0.0]);
        let churny = stump(0, 0.5, 1, 0);
        let loyal = stump(0, 0.5, 0, 1);
        assert_eq!(
            vote(&[churny.clone(), churny.clone(), loyal.clone()], features.view()),
            ChurnLabel::Churns
        );
        assert_eq!(
            vote(&[churny.clone(), loyal.clone()], features.view()),
            ChurnLabel::Stays
        );
        assert_eq!(vote(&[], features.view()), ChurnLabel::Stays);
    }

    #[test]
    fn single_leaf_tree_always_votes_its_label() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Leaf { label: 1 }],
        };
        let features = Array1::from(vec![0.0; 13]);
        assert_eq!(tree.decide(features.view()), 1);
    }
}
