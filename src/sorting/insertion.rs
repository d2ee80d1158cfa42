//! 插入排序
//!
//! 对每个 `i in 1..n`，取出 `key = a[i]`，把前面所有大于 key 的元素
//! 依次右移一格，再把 key 放入空出的位置。只在严格大于时移动，因此是稳定的。
//!
//! 循环开始前 `a[0..i)` 始终有序。最坏 O(n²) 时间，O(1) 额外空间。

use super::comparator::{Comparator, NaturalOrder};
use super::{SortStats, Sorter};
use std::cmp::Ordering;

/// 插入排序
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    const NAME: &'static str = "insertion";

    fn sort_by<T, C: Comparator<T>>(&self, a: &mut [T], cmp: &C) -> SortStats {
        let mut stats = SortStats::default();

        for i in 1..a.len() {
            // 向后扫描，找到 key 的落点
            let mut j = i;
            while j > 0 && stats.compare(cmp, &a[j - 1], &a[i]) == Ordering::Greater {
                j -= 1;
            }
            if j < i {
                a[j..=i].rotate_right(1);
                stats.swaps += (i - j) as u64;
            }
        }

        tracing::debug!(
            algorithm = Self::NAME,
            len = a.len(),
            comparisons = stats.comparisons,
            shifts = stats.swaps,
            "sorted"
        );
        stats
    }
}

/// 升序插入排序，返回同一个切片
pub fn insertion_sort<T: Ord>(a: &mut [T]) -> &mut [T] {
    InsertionSort.sort_by(a, &NaturalOrder);
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_example() {
        let mut nums = [13, 46, 24, 52, 20, 9];
        assert_eq!(insertion_sort(&mut nums), &[9, 13, 20, 24, 46, 52]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i64; 0] = [];
        assert!(insertion_sort(&mut empty).is_empty());

        let mut one = [7];
        let stats = InsertionSort.sort(&mut one);
        assert_eq!(one, [7]);
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let mut nums: Vec<i64> = (0..100).collect();
        let stats = InsertionSort.sort(&mut nums);

        assert_eq!(stats.comparisons, 99);
        assert_eq!(stats.swaps, 0);
        assert!(nums.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        InsertionSort.sort_by(&mut pairs, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_reverse_input_shift_count() {
        let mut nums = [5, 4, 3, 2, 1];
        let stats = InsertionSort.sort(&mut nums);
        assert_eq!(nums, [1, 2, 3, 4, 5]);
        // 每对逆序恰好移动一次
        assert_eq!(stats.swaps, 10);
    }
}
