//! 图表示模块
//!
//! 无向图的邻接表和邻接矩阵构建

mod adj_list;
mod adj_matrix;
mod edge;

pub use adj_list::{AdjacencyList, AdjacencyListBuilder, Neighbors};
pub use adj_matrix::{AdjacencyMatrix, AdjacencyMatrixBuilder};
pub use edge::Edge;
