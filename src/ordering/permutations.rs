//! Lazy permutation generator.
//!
//! # Algorithm
//!
//! Iterative form of Heap's algorithm: each successive permutation differs
//! from the previous one by a single swap, driven by a per-level counter
//! array instead of recursion. Only the current arrangement and the
//! counters are held in memory.
//!
//! # Reference
//!
//! Heap, B.R. (1963). "Permutations by interchanges", *The Computer Journal*
//! 6(3), 293-294.

/// Iterator over every permutation of a sequence, yielded one at a time.
///
/// The first item is the input order. A sequence of length `n` yields `n!`
/// items (one for `n == 0`).
///
/// # Examples
///
/// ```
/// use u_postman::ordering::Permutations;
///
/// let all: Vec<Vec<u8>> = Permutations::new(vec![1, 2, 3]).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    level: usize,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator over the permutations of `items`.
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Self {
            items,
            counters: vec![0; n],
            level: 1,
            started: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        let n = self.items.len();
        while self.level < n {
            let i = self.level;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.level = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.level += 1;
        }
        None
    }
}

/// `n!`, saturating at `usize::MAX`.
pub fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<Vec<u32>> = Permutations::new(vec![]).collect();
        assert_eq!(empty, vec![Vec::<u32>::new()]);
        let one: Vec<Vec<u32>> = Permutations::new(vec![7]).collect();
        assert_eq!(one, vec![vec![7]]);
    }

    #[test]
    fn test_three_items() {
        let all: HashSet<Vec<u32>> = Permutations::new(vec![0, 1, 2]).collect();
        assert_eq!(all.len(), 6);
        assert!(all.contains(&vec![2, 1, 0]));
        assert!(all.contains(&vec![1, 2, 0]));
    }

    #[test]
    fn test_eight_items_count() {
        let items: Vec<usize> = (0..8).collect();
        assert_eq!(Permutations::new(items).count(), 40320);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut it = Permutations::new(vec![1, 2]);
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(8), 40320);
        assert_eq!(factorial(12), 479_001_600);
    }

    proptest! {
        #[test]
        fn prop_permutations_are_distinct_and_complete(n in 0usize..7) {
            let items: Vec<usize> = (0..n).collect();
            let all: Vec<Vec<usize>> = Permutations::new(items.clone()).collect();
            prop_assert_eq!(all.len(), factorial(n));
            let unique: HashSet<Vec<usize>> = all.iter().cloned().collect();
            prop_assert_eq!(unique.len(), all.len());
            for p in &all {
                let mut sorted = p.clone();
                sorted.sort_unstable();
                prop_assert_eq!(&sorted, &items);
            }
        }
    }
}
