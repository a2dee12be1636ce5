// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Generic k-subsets enumeration.
//!
//! The estimator enumerates up to C(47, 5) candidate hands on every call so
//! enumeration is lazy, each subset is produced in a scratch buffer passed
//! to a closure instead of materializing the full subsets list.

#[cfg(feature = "parallel")]
pub mod parallel;

/// Calls the `f` closure for each k-subset of `source`.
///
/// Subsets preserve the relative order of the elements in `source` and are
/// generated exactly once each, in lexicographic index order. A degenerate
/// request with `k == 0` or `k > source.len()` generates no subsets.
pub fn for_each_combination<T, F>(source: &[T], k: usize, mut f: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let n = source.len();
    if k == 0 || k > n {
        return;
    }

    // Selected indices, start from the first k elements.
    let mut c = (0..k).collect::<Vec<_>>();
    let mut subset = source[0..k].to_vec();

    loop {
        f(&subset);

        // Find the rightmost index that can still be advanced, the index at
        // position i tops out at n - k + i.
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }

            i -= 1;
            if c[i] != i + n - k {
                break;
            }
        }

        c[i] += 1;
        subset[i] = source[c[i]].clone();

        for j in (i + 1)..k {
            c[j] = c[j - 1] + 1;
            subset[j] = source[c[j]].clone();
        }
    }
}

/// Returns all the k-subsets of `source`.
///
/// A degenerate request with `k == 0` or `k > source.len()` returns an empty
/// list, for `k == source.len()` the only subset is `source` itself.
pub fn combinations<T: Clone>(source: &[T], k: usize) -> Vec<Vec<T>> {
    let mut subsets = Vec::new();
    for_each_combination(source, k, |subset| subsets.push(subset.to_vec()));
    subsets
}
