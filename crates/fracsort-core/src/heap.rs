//! Explicit binary max-heap sort.
//!
//! The heap is built bottom-up in place, then the root is repeatedly swapped
//! with the last unsorted slot and sifted back down. Sift-down prefers the
//! left child when both children compare equal.

use crate::cancel::CancellationToken;
use crate::error::FracError;

/// Sort `v` ascending with heap sort.
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, T::lt);
}

/// Sort `v` ascending with heap sort under the strict ordering `is_less`.
pub fn heap_sort_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // An uncancellable checkpoint never fails.
    let _ = run(v, is_less, || Ok(()));
}

/// Heap sort that checks `cancel` once per extraction round.
///
/// On cancellation the slice is left partially ordered and
/// `FracError::Cancelled` is returned.
pub fn heap_sort_cancellable<T, F>(
    v: &mut [T],
    cancel: &CancellationToken,
    is_less: F,
) -> Result<(), FracError>
where
    F: FnMut(&T, &T) -> bool,
{
    run(v, is_less, || cancel.check_cancelled())
}

fn run<T, F, C>(v: &mut [T], mut is_less: F, mut checkpoint: C) -> Result<(), FracError>
where
    F: FnMut(&T, &T) -> bool,
    C: FnMut() -> Result<(), FracError>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    for node in (0..len / 2).rev() {
        sift_down(v, node, len, &mut is_less);
    }

    for end in (1..len).rev() {
        checkpoint()?;
        v.swap(0, end);
        sift_down(v, 0, end, &mut is_less);
    }
    Ok(())
}

/// Restore the max-heap property for the subtree at `node` within `v[..end]`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let left = 2 * node + 1;
        if left >= end {
            break;
        }

        let right = left + 1;
        let child = if right < end && is_less(&v[left], &v[right]) {
            right
        } else {
            left
        };

        if !is_less(&v[node], &v[child]) {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}
