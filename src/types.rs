//! 通用类型定义

use crate::graph::Edge;
use serde::{Deserialize, Serialize};

/// 顶点标签（从 1 开始）
pub type VertexId = usize;

/// 保留的 0 号槽位
///
/// 邻接表和邻接矩阵都按 `n + 1` 分配，下标 0 永远为空，
/// 这样顶点标签可以直接作为下标使用。
pub const RESERVED_SLOT: usize = 0;

/// 图的输入：顶点数和边列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    /// 顶点数 n
    pub vertices: usize,
    /// 边列表，按到达顺序
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphInput {
    pub fn new(vertices: usize, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// 边数 m
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
