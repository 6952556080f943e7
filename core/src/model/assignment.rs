use serde::{Deserialize, Serialize};

/// Per-position cluster head picks. Duplicates are expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterHeadAssignment {
    heads: Vec<usize>,
}

impl ClusterHeadAssignment {
    pub fn new(heads: Vec<usize>) -> Self {
        Self { heads }
    }

    pub fn len(&self) -> usize {
        self.heads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.heads
    }

    /// Sorted unique head indices; these are the heads that get drawn.
    pub fn distinct(&self) -> Vec<usize> {
        let mut distinct = self.heads.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }
}

impl From<Vec<usize>> for ClusterHeadAssignment {
    fn from(heads: Vec<usize>) -> Self {
        Self::new(heads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_collapses_repeated_heads() {
        let assignment = ClusterHeadAssignment::from(vec![2, 2, 2, 2, 2]);
        assert_eq!(assignment.distinct(), vec![2]);
        assert_eq!(assignment.len(), 5);
    }

    #[test]
    fn distinct_is_sorted() {
        let assignment = ClusterHeadAssignment::from(vec![4, 0, 3, 0, 1, 4]);
        assert_eq!(assignment.distinct(), vec![0, 1, 3, 4]);
    }
}
