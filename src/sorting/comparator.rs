//! 比较器抽象
//!
//! 排序算法只依赖 `compare(a, b) -> Ordering`，整数版本使用自然序。

use std::cmp::Ordering;

/// 比较能力
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// 自然序（`Ord`）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// 反转另一个比较器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// 按提取出的键比较
pub fn by_key<T, K, F>(key: F) -> impl Comparator<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}
