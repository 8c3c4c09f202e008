//! Unordered pair and subset enumeration over index sequences.

/// Returns all unordered pairs of distinct items, in canonical nested-scan
/// order: outer item first, each later item as partner, no pair repeated
/// under either ordering. `n` items yield `n*(n-1)/2` pairs.
pub fn pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    let mut out = Vec::with_capacity(items.len() * items.len().saturating_sub(1) / 2);
    for (i, first) in items.iter().enumerate() {
        for second in &items[i + 1..] {
            out.push((first.clone(), second.clone()));
        }
    }
    out
}

/// Lazily enumerates all size-`size` subsets of an item sequence.
///
/// Subsets appear in lexicographic position order, each exactly once as an
/// unordered set. The iterator keeps an index cursor rather than
/// materializing the `C(n, size)` results.
#[derive(Debug, Clone)]
pub struct SubsetIter<T> {
    items: Vec<T>,
    cursor: Vec<usize>,
    done: bool,
}

impl<T> SubsetIter<T> {
    /// Creates an enumerator over subsets of the given size.
    pub fn new(items: Vec<T>, size: usize) -> Self {
        let done = size > items.len();
        Self {
            items,
            cursor: (0..size).collect(),
            done,
        }
    }
}

impl<T: Clone> Iterator for SubsetIter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self
            .cursor
            .iter()
            .map(|&position| self.items[position].clone())
            .collect();
        self.done = !advance(&mut self.cursor, self.items.len());
        Some(subset)
    }
}

/// Moves the cursor to the next lexicographic selection; false when exhausted.
fn advance(cursor: &mut [usize], n: usize) -> bool {
    let k = cursor.len();
    for slot in (0..k).rev() {
        if cursor[slot] < n - (k - slot) {
            cursor[slot] += 1;
            for follow in slot + 1..k {
                cursor[follow] = cursor[follow - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Collects all size-`size` subsets of `items` eagerly.
pub fn subsets<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    SubsetIter::new(items.to_vec(), size).collect()
}

/// Exact binomial coefficient `C(n, k)`.
///
/// The running product stays an integer at every step, so no rounding occurs
/// for the sizes the resolution cap admits.
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}
