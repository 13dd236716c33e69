#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Code 1..=63 for a letter in a trie alphabet. 0 is the label of the root node.
pub type Label = u8;

/// Highest label a `LabelSet` can hold.
pub const MAX_LABEL: Label = 63;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.popcnt() as u32
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n & ((1 << v) - 1)
}

/// A bitset representing the labels of the children of a trie node
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u64);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        label <= MAX_LABEL && self.0 & (1 << label) != 0
    }

    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label <= MAX_LABEL);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Return the rank of `label` among the labels in the set, if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| format!("{}", label))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    count: u32,
    value: u64,
}

impl IteratorLabelSet {
    pub fn new(value: u64) -> IteratorLabelSet {
        IteratorLabelSet { count: 0, value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < 64 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelset() {
        let mut labels = LabelSet::new();
        for &n in &[2, 25, 2, 1, 63] {
            labels.insert(n);
        }
        for &n in &[1, 2, 25, 63] {
            assert!(labels.contains(n));
        }
        assert!(!labels.contains(5));
        assert!(!labels.contains(64));
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_index() {
        let labels: LabelSet = vec![0u8, 1, 4, 5, 7, 8, 10, 12, 14, 15, 40]
            .into_iter()
            .collect();
        assert_eq!(labels.index_of(0), Some(0));
        assert_eq!(labels.index_of(15), Some(9));
        assert_eq!(labels.index_of(40), Some(10));
        assert_eq!(labels.index_of(2), None);
        assert_eq!(labels.len(), 11);
    }

    #[test]
    fn test_iter_is_ascending() {
        let labels: LabelSet = vec![33u8, 3, 17].into_iter().collect();
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec![3, 17, 33]);
    }

    #[test]
    fn test_zero_highbits() {
        let n = 0b1111_0010_u64;
        let s = 0b0001_0010_u64;
        assert_eq!(zero_highbits(n, 5), s);
    }
}
