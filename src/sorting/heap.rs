//! 堆排序（数组内嵌的二叉大顶堆）
//!
//! Variables:
//!   last          = 堆的最后一个下标
//!   left(i)       = 2*i + 1
//!   right(i)      = 2*i + 2
//!
//! 堆性质: a[parent] >= a[child]，对 [0, last] 内的所有节点成立
//!
//! 1. 建堆: i 从 n/2 - 1 递减到 0，heapify_down(a, n - 1, i)
//! 2. 取最大: 当 last > 0 时交换 a[0] 与 a[last]，last -= 1，
//!    若 last > 0 则从根节点下沉

use super::comparator::{Comparator, NaturalOrder};
use super::{SortStats, Sorter};
use std::cmp::Ordering;

/// 堆排序
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
    const NAME: &'static str = "heap";

    fn sort_by<T, C: Comparator<T>>(&self, a: &mut [T], cmp: &C) -> SortStats {
        let mut stats = SortStats::default();
        if a.len() < 2 {
            return stats;
        }

        build_heap(a, cmp, &mut stats);

        let mut last = a.len() - 1;
        while last > 0 {
            a.swap(0, last);
            stats.swaps += 1;
            last -= 1;
            if last > 0 {
                heapify_down(a, last, 0, cmp, &mut stats);
            }
        }

        tracing::debug!(
            algorithm = Self::NAME,
            len = a.len(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            max_depth = stats.max_depth,
            "sorted"
        );
        stats
    }
}

fn build_heap<T, C: Comparator<T>>(a: &mut [T], cmp: &C, stats: &mut SortStats) {
    let n = a.len();
    if n < 2 {
        return;
    }
    for i in (0..n / 2).rev() {
        heapify_down(a, n - 1, i, cmp, stats);
    }
}

/// 从 `ind` 开始在 `[0, last]` 范围内下沉
fn heapify_down<T, C: Comparator<T>>(
    a: &mut [T],
    last: usize,
    mut ind: usize,
    cmp: &C,
    stats: &mut SortStats,
) {
    let mut depth = 0;
    loop {
        let mut largest = ind;
        let left = 2 * ind + 1;
        let right = 2 * ind + 2;

        if left <= last && stats.compare(cmp, &a[left], &a[largest]) == Ordering::Greater {
            largest = left;
        }
        if right <= last && stats.compare(cmp, &a[right], &a[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == ind {
            break;
        }

        a.swap(largest, ind);
        stats.swaps += 1;
        ind = largest;
        depth += 1;
    }
    stats.max_depth = stats.max_depth.max(depth);
}

/// 把整个切片整理成大顶堆
pub fn build_max_heap<T: Ord>(a: &mut [T]) {
    build_heap(a, &NaturalOrder, &mut SortStats::default());
}

/// `a[0..=last]` 是否满足大顶堆性质
pub fn is_max_heap_by<T, C: Comparator<T>>(a: &[T], last: usize, cmp: &C) -> bool {
    let end = last.min(a.len().saturating_sub(1));
    (1..=end).all(|child| cmp.compare(&a[(child - 1) / 2], &a[child]) != Ordering::Less)
}

pub fn is_max_heap<T: Ord>(a: &[T]) -> bool {
    is_max_heap_by(a, a.len().saturating_sub(1), &NaturalOrder)
}

/// 升序堆排序
pub fn heap_sort<T: Ord>(a: &mut [T]) {
    HeapSort.sort_by(a, &NaturalOrder);
}
