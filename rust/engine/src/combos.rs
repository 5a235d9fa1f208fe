//! Fixed-size subset enumeration.
//!
//! Subsets are produced in lexicographic order of their indices into the
//! input slice, so the sequence is fully determined by the input order.

/// Number of `k`-element subsets of an `n`-element set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc = 1usize;
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Lazy iterator over all `k`-element subsets of a slice.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    remaining: usize,
}

/// Returns every `k`-element subset of `items`.
///
/// `k == 0` yields a single empty subset; `k > items.len()` yields nothing.
///
/// ```
/// use handreader_engine::combos::combinations;
///
/// let picks: Vec<Vec<u8>> = combinations(&[1, 2, 3], 2).collect();
/// assert_eq!(picks, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        remaining: binomial(items.len(), k),
    }
}

impl<T: Copy> Combinations<'_, T> {
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i]).collect();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Combinations<'_, T> {}
