//! 排序算法模块
//!
//! 插入排序、快速排序和堆排序，均为原地升序排序。
//! 算法只通过 [`Comparator`] 比较元素，整数入口使用自然序。

mod comparator;
mod heap;
mod insertion;
mod quick;

pub use comparator::{by_key, Comparator, NaturalOrder, Reversed};
pub use heap::{build_max_heap, heap_sort, is_max_heap, is_max_heap_by, HeapSort};
pub use insertion::{insertion_sort, InsertionSort};
pub use quick::{quick_sort, QuickSort};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 一次排序的计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// 比较次数
    pub comparisons: u64,
    /// 交换次数（插入排序为右移次数）
    pub swaps: u64,
    /// 快速排序的最大划分层数 / 堆排序的最大下沉层数
    pub max_depth: usize,
    /// 快速排序工作栈的最大长度
    pub peak_stack: usize,
}

impl SortStats {
    fn compare<T, C: Comparator<T>>(&mut self, cmp: &C, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        cmp.compare(a, b)
    }
}

/// 原地排序算法
pub trait Sorter {
    const NAME: &'static str;

    /// 按给定比较器升序排序
    fn sort_by<T, C: Comparator<T>>(&self, a: &mut [T], cmp: &C) -> SortStats;

    /// 按自然序升序排序
    fn sort<T: Ord>(&self, a: &mut [T]) -> SortStats {
        self.sort_by(a, &NaturalOrder)
    }
}

/// 可选的排序算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Insertion,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => InsertionSort::NAME,
            SortAlgorithm::Quick => QuickSort::NAME,
            SortAlgorithm::Heap => HeapSort::NAME,
        }
    }

    pub fn sort_by<T, C: Comparator<T>>(&self, a: &mut [T], cmp: &C) -> SortStats {
        match self {
            SortAlgorithm::Insertion => InsertionSort.sort_by(a, cmp),
            SortAlgorithm::Quick => QuickSort.sort_by(a, cmp),
            SortAlgorithm::Heap => HeapSort.sort_by(a, cmp),
        }
    }

    pub fn sort<T: Ord>(&self, a: &mut [T]) -> SortStats {
        self.sort_by(a, &NaturalOrder)
    }

    /// 该算法的演示数组
    pub fn demo_input(&self) -> Vec<i64> {
        match self {
            SortAlgorithm::Insertion => vec![13, 46, 24, 52, 20, 9],
            SortAlgorithm::Quick => vec![4, 6, 2, 5, 7, 9, 1, 3],
            SortAlgorithm::Heap => vec![60, 30, 40, 20, 10, 50],
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "insertion" | "insertion_sort" | "insert" => Ok(SortAlgorithm::Insertion),
            "quick" | "quick_sort" | "quicksort" => Ok(SortAlgorithm::Quick),
            "heap" | "heap_sort" | "heapsort" => Ok(SortAlgorithm::Heap),
            other => Err(Error::ParseError(format!("未知的排序算法: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
        assert_eq!("HeapSort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Heap);
        assert_eq!(
            "insertion_sort".parse::<SortAlgorithm>().unwrap(),
            SortAlgorithm::Insertion
        );
        assert!("bubble".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn test_demo_inputs_sort() {
        let expected = [
            vec![9, 13, 20, 24, 46, 52],
            vec![1, 2, 3, 4, 5, 6, 7, 9],
            vec![10, 20, 30, 40, 50, 60],
        ];
        for (algo, want) in SortAlgorithm::ALL.iter().zip(expected) {
            let mut nums = algo.demo_input();
            algo.sort(&mut nums);
            assert_eq!(nums, want, "{}", algo);
        }
    }

    #[test]
    fn test_reversed_comparator() {
        for algo in SortAlgorithm::ALL {
            let mut nums = vec![3, -1, 4, 1, -5, 9, 2, 6];
            algo.sort_by(&mut nums, &Reversed(NaturalOrder));
            assert_eq!(nums, vec![9, 6, 4, 3, 2, 1, -1, -5], "{}", algo);
        }
    }

    #[test]
    fn test_key_comparator() {
        for algo in SortAlgorithm::ALL {
            let mut words = vec!["pear", "fig", "banana", "kiwi"];
            algo.sort_by(&mut words, &by_key(|w: &&str| w.len()));
            let lens: Vec<usize> = words.iter().map(|w| w.len()).collect();
            assert_eq!(lens, vec![3, 4, 4, 6], "{}", algo);
        }
    }

    #[test]
    fn test_empty_is_noop() {
        for algo in SortAlgorithm::ALL {
            let mut empty: Vec<i64> = Vec::new();
            let stats = algo.sort(&mut empty);
            assert!(empty.is_empty());
            assert_eq!(stats.comparisons, 0);
        }
    }

    #[test]
    fn test_stats_field_names() {
        let mut nums = [3i64, 1, 2];
        let stats = SortAlgorithm::Quick.sort(&mut nums);
        let value = serde_json::to_value(stats).unwrap();

        for key in ["comparisons", "swaps", "max_depth", "peak_stack"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
