// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel k-subsets enumeration.
use std::thread;

/// Creates a table for nck(n, k) for n <= 52 and k <= 5.
const fn make_nck() -> [[u32; 6]; 52] {
    let mut t = [[0u32; 6]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 5 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 6]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub(crate) fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 5, "k={k} must be 0 <= k <= 5");

    if n < k || n == 0 {
        0
    } else {
        NCKS[n.saturating_sub(1)][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 5] {
    assert!(k <= 5);

    let mut out = [0; 5];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets starting from the nth ksubset.
fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    for i in 0..k {
        c[i + 1] = ks[i];
    }

    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Parallel for each, calls the `f` closure for each k-subset of `source`.
///
/// The closure takes an usize that is the task identifier (0..num_tasks)
/// and a subset of length k. Degenerate requests with `k == 0` or
/// `k > source.len()` generate no subsets.
///
/// Panics if k > 5 or num_tasks is zero.
pub fn par_for_each_combination<T, F>(source: &[T], num_tasks: usize, k: usize, f: F)
where
    T: Clone + Sync,
    F: Fn(usize, &[T]) + Send + Sync,
{
    assert!(k <= 5, "k={k} must be 0 <= k <= 5");
    assert!(num_tasks > 0);

    if k == 0 || k > source.len() {
        return;
    }

    let n = source.len();
    let num_subsets = nck(n, k);
    let subsets_per_task = num_subsets.div_ceil(num_tasks);

    thread::scope(|s| {
        for task_id in 0..num_tasks {
            let start = task_id * subsets_per_task;
            if start >= num_subsets {
                break;
            }

            let count = subsets_per_task.min(num_subsets - start);
            let f = &f;
            s.spawn(move || {
                let mut subset = source[0..k].to_vec();
                for_each_ksubset(n, k, start, count, |p| {
                    for (idx, &pos) in p.iter().enumerate() {
                        subset[idx] = source[pos].clone();
                    }

                    f(task_id, &subset);
                });
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 47, 1081, 16215, 178365, 1533939]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(47, k), v));

        [1, 5, 10, 10, 5, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 1, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));
    }

    #[test]
    fn test_nth_ksubset() {
        let mut counter = 0;
        let count = nck(20, 5);
        for_each_ksubset(20, 5, 0, count, |s| {
            let ks = nth_ksubset(counter, 5);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(count, counter);

        // Start from half way.
        counter = 0;
        let nth = nck(20, 5) / 2;
        for_each_ksubset(20, 5, nth, nth, |s| {
            let ks = nth_ksubset(nth + counter, 5);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(nth, counter);
    }

    #[test]
    fn par_matches_serial() {
        let source = (0..47).collect::<Vec<_>>();

        for k in 1..=5 {
            let mut serial_count = 0u64;
            let mut serial_sum = 0u64;
            crate::for_each_combination(&source, k, |s| {
                serial_count += 1;
                serial_sum += s.iter().sum::<u64>();
            });

            let par_count = AtomicU64::new(0);
            let par_sum = AtomicU64::new(0);
            par_for_each_combination(&source, 4, k, |_, s| {
                par_count.fetch_add(1, Ordering::Relaxed);
                par_sum.fetch_add(s.iter().sum::<u64>(), Ordering::Relaxed);
            });

            assert_eq!(par_count.load(Ordering::Relaxed), serial_count);
            assert_eq!(par_sum.load(Ordering::Relaxed), serial_sum);
        }
    }

    #[test]
    fn par_with_more_tasks_than_subsets() {
        let source = (0..3).collect::<Vec<_>>();

        // C(3, 2) = 3 subsets over 8 tasks, idle tasks are skipped.
        let count = AtomicU64::new(0);
        par_for_each_combination(&source, 8, 2, |_, s| {
            assert_eq!(s.len(), 2);
            count.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(count.load(Ordering::Relaxed), 3);
    }
}
