//! Workload generators for the Strata benchmarks.
//!
//! Every generator is seeded, so a benchmark run replays the exact same
//! operation sequence:
//!
//! - [`mixed_workload`]: interleaved appends, inserts, erases and pops
//! - [`filled_array`] / [`filled_list`]: containers pre-populated with
//!   `0..n`
//! - [`replay`]: apply a workload to a [`DynamicArray`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strata_array::DynamicArray;
use strata_list::LinkedList;

/// A single step of a [`mixed_workload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Push(u64),
    /// Insert the value at `pos % (len + 1)`.
    Insert(usize, u64),
    /// Erase at `pos % len`; skipped when empty.
    Erase(usize),
    /// Remove the last element; skipped when empty.
    Pop,
}

/// Generate `n` operations, biased towards growth (about half pushes).
pub fn mixed_workload(n: usize, seed: u64) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| match rng.random_range(0..8u8) {
            0..=3 => Op::Push(rng.random()),
            4 | 5 => Op::Insert(rng.random_range(0..usize::MAX), rng.random()),
            6 => Op::Erase(rng.random_range(0..usize::MAX)),
            _ => Op::Pop,
        })
        .collect()
}

/// Apply `ops` to `arr`. Returns the number of operations that took effect.
pub fn replay(arr: &mut DynamicArray<u64>, ops: &[Op]) -> usize {
    let mut applied = 0;
    for op in ops {
        let len = arr.len();
        let ok = match *op {
            Op::Push(v) => arr.push_back(v).is_ok(),
            Op::Insert(pos, v) => arr.insert(pos % (len + 1), v).is_ok(),
            Op::Erase(_) if len == 0 => false,
            Op::Erase(pos) => arr.erase(pos % len).is_ok(),
            Op::Pop => arr.pop_back().is_ok(),
        };
        applied += usize::from(ok);
    }
    applied
}

/// An array holding `0..n`.
pub fn filled_array(n: u64) -> DynamicArray<u64> {
    (0..n).collect()
}

/// A list holding `0..n`.
pub fn filled_list(n: u64) -> LinkedList<u64> {
    (0..n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(mixed_workload(256, 7), mixed_workload(256, 7));
        assert_ne!(mixed_workload(256, 7), mixed_workload(256, 8));
    }

    #[test]
    fn replay_matches_vec() {
        let ops = mixed_workload(2_000, 42);
        let mut arr = DynamicArray::new();
        replay(&mut arr, &ops);

        let mut model: Vec<u64> = Vec::new();
        for op in &ops {
            let len = model.len();
            match *op {
                Op::Push(v) => model.push(v),
                Op::Insert(pos, v) => model.insert(pos % (len + 1), v),
                Op::Erase(_) if len == 0 => {}
                Op::Erase(pos) => {
                    model.remove(pos % len);
                }
                Op::Pop => {
                    model.pop();
                }
            }
        }
        assert_eq!(arr.as_slice(), model.as_slice());
    }

    #[test]
    fn filled_containers_agree() {
        let arr = filled_array(100);
        let list = filled_list(100);
        assert!(arr.iter().eq(list.iter()));
    }
}
