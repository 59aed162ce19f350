//! Combination enumeration.
//!
//! We search candidate mixtures exhaustively: every strictly increasing
//! sequence of catalog indices of length `1..=K`, where
//! `K = min(M, N + 1)` (`M` candidates, `N` analyzed elements). Larger
//! mixtures are underdetermined and never generated.
//!
//! Order is fixed: ascending by length, lexicographic within a length.
//! For `M = 4, K = 2`:
//!
//! ```text
//! 0  1  2  3  01  02  03  12  13  23
//! ```

/// Largest mixture size worth fitting for `candidates` components and
/// `elements` analyzed elements.
pub fn max_combination_size(candidates: usize, elements: usize) -> usize {
    if candidates == 0 || elements == 0 {
        return 0;
    }
    candidates.min(elements + 1)
}

/// Number of combinations `Combinations::new(candidates, max_size)` yields:
/// `Σ_{k=1}^{max_size} C(candidates, k)`.
pub fn combination_count(candidates: usize, max_size: usize) -> usize {
    let mut total = 0usize;
    let mut binom = 1usize;
    for k in 1..=max_size.min(candidates) {
        // C(m, k) = C(m, k-1) * (m - k + 1) / k, exact at every step.
        binom = binom * (candidates - k + 1) / k;
        total += binom;
    }
    total
}

/// Lazy generator over candidate index combinations.
///
/// Not restartable: once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct Combinations {
    candidates: usize,
    max_size: usize,
    current: Vec<usize>,
    state: CursorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Active,
    Exhausted,
}

impl Combinations {
    /// Enumerate subsets of `0..candidates` with lengths `1..=max_size`.
    ///
    /// `max_size` is clamped to `candidates`.
    pub fn new(candidates: usize, max_size: usize) -> Self {
        let max_size = max_size.min(candidates);
        let state = if max_size == 0 {
            CursorState::Exhausted
        } else {
            CursorState::Fresh
        };
        Self {
            candidates,
            max_size,
            current: Vec::with_capacity(max_size),
            state,
        }
    }

    /// Enumerate every mixture worth fitting for the given problem size.
    pub fn for_problem(candidates: usize, elements: usize) -> Self {
        Self::new(candidates, max_combination_size(candidates, elements))
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Move the cursor to the next combination; false once exhausted.
    fn advance(&mut self) -> bool {
        match self.state {
            CursorState::Exhausted => return false,
            CursorState::Fresh => {
                self.reset_to_length(1);
                self.state = CursorState::Active;
                return true;
            }
            CursorState::Active => {}
        }

        let k = self.current.len();
        // Rightmost position that can still be incremented: position `i` may
        // reach at most `candidates - k + i`.
        let pivot = (0..k)
            .rev()
            .find(|&i| self.current[i] < self.candidates - k + i);

        match pivot {
            Some(i) => {
                self.current[i] += 1;
                for j in (i + 1)..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                true
            }
            None if k < self.max_size => {
                self.reset_to_length(k + 1);
                true
            }
            None => {
                self.state = CursorState::Exhausted;
                self.current.clear();
                false
            }
        }
    }

    fn reset_to_length(&mut self, k: usize) {
        self.current.clear();
        self.current.extend(0..k);
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.current.clone())
        } else {
            None
        }
    }
}
