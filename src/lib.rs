//! AlgoKit - 经典内存算法工具集
//!
//! 包含两组互相独立的组件：
//! - 排序：插入排序、快速排序、堆排序（原地、升序，可自定义比较器）
//! - 图表示：无向图的邻接表和邻接矩阵构建（顶点从 1 开始编号）

pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod sorting;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{AdjacencyList, AdjacencyListBuilder, AdjacencyMatrix, AdjacencyMatrixBuilder, Edge};
pub use sorting::{
    heap_sort, insertion_sort, quick_sort, Comparator, HeapSort, InsertionSort, NaturalOrder,
    QuickSort, SortAlgorithm, SortStats, Sorter,
};
pub use types::{GraphInput, VertexId, RESERVED_SLOT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
