//! 快速排序（双指针划分）
//!
//! 划分 `[low, high]`：
//!   pivot = a[low]（固定取第一个元素，不做随机化或三数取中）
//!   i 从 low 向右，直到 a[i] > pivot 或 i == high
//!   j 从 high 向左，直到 a[j] <= pivot 或 j == low
//!   i < j 时交换 a[i], a[j] 并继续；否则停止
//!   交换 a[low] 与 a[j]，返回 j
//!
//! 划分后 j 左侧都 <= pivot，右侧都 > pivot。
//! 子区间用显式工作栈处理，不依赖调用栈深度。已排序输入的划分层数为 O(n)，
//! 记录在 `SortStats::max_depth` 中。

use super::comparator::{Comparator, NaturalOrder};
use super::{SortStats, Sorter};
use std::cmp::Ordering;

/// 快速排序
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    const NAME: &'static str = "quick";

    fn sort_by<T, C: Comparator<T>>(&self, a: &mut [T], cmp: &C) -> SortStats {
        let mut stats = SortStats::default();
        if a.len() < 2 {
            return stats;
        }

        // (low, high, 划分层数)
        let mut stack: Vec<(usize, usize, usize)> = vec![(0, a.len() - 1, 1)];
        stats.peak_stack = 1;

        while let Some((low, high, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);

            let p = partition(a, low, high, cmp, &mut stats);

            // 先压右区间，保证左区间先处理
            if p + 1 < high {
                stack.push((p + 1, high, depth + 1));
            }
            if p > low + 1 {
                stack.push((low, p - 1, depth + 1));
            }
            stats.peak_stack = stats.peak_stack.max(stack.len());
        }

        tracing::debug!(
            algorithm = Self::NAME,
            len = a.len(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            max_depth = stats.max_depth,
            peak_stack = stats.peak_stack,
            "sorted"
        );
        stats
    }
}

/// 划分 `[low, high]`（要求 low < high），返回 pivot 的最终下标
pub(crate) fn partition<T, C: Comparator<T>>(
    a: &mut [T],
    low: usize,
    high: usize,
    cmp: &C,
    stats: &mut SortStats,
) -> usize {
    let mut i = low;
    let mut j = high;

    // a[low] 在循环中不会被交换：i 第一步就会越过 low
    while i < j {
        while i < high && stats.compare(cmp, &a[i], &a[low]) != Ordering::Greater {
            i += 1;
        }
        while j > low && stats.compare(cmp, &a[j], &a[low]) == Ordering::Greater {
            j -= 1;
        }
        if i < j {
            a.swap(i, j);
            stats.swaps += 1;
        }
    }

    if j != low {
        a.swap(low, j);
        stats.swaps += 1;
    }
    tracing::trace!(low, high, pivot = j, "partitioned");
    j
}

/// 升序快速排序，返回同一个切片
pub fn quick_sort<T: Ord>(a: &mut [T]) -> &mut [T] {
    QuickSort.sort_by(a, &NaturalOrder);
    a
}
