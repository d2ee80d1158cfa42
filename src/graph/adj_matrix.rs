//! 邻接矩阵
//!
//! `(n + 1) × (n + 1)` 的布尔矩阵，顶点标签直接作为行列下标，
//! 第 0 行和第 0 列保留且始终为 false。矩阵对称，重复的边不会产生额外效果。

use super::edge::Edge;
use crate::error::{Error, Result};
use crate::types::{GraphInput, VertexId, RESERVED_SLOT};
use serde::{Deserialize, Serialize};
use std::alloc::Layout;

/// 邻接矩阵构建器
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixBuilder {
    dim: usize,
    cells: Vec<bool>,
    edges_added: usize,
}

impl AdjacencyMatrixBuilder {
    /// 为 `n` 个顶点分配全 false 的 `(n + 1)²` 矩阵；格子数无法表示时返回 `CapacityOverflow`
    pub fn new(n: usize) -> Result<Self> {
        let (dim, len) = n
            .checked_add(1)
            .and_then(|dim| dim.checked_mul(dim).map(|len| (dim, len)))
            .filter(|&(_, len)| Layout::array::<bool>(len).is_ok())
            .ok_or(Error::CapacityOverflow { n })?;

        Ok(Self {
            dim,
            cells: vec![false; len],
            edges_added: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.dim - 1
    }

    /// 设置 `[x][y]` 和 `[y][x]`；顶点越界时返回错误且不修改矩阵
    pub fn add_edge(&mut self, x: VertexId, y: VertexId) -> Result<&mut Self> {
        Edge::new(x, y).validate(self.vertex_count(), self.edges_added)?;

        self.cells[x * self.dim + y] = true;
        self.cells[y * self.dim + x] = true;
        self.edges_added += 1;
        Ok(self)
    }

    pub fn extend<I>(&mut self, edges: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            self.add_edge(edge.x, edge.y)?;
        }
        Ok(self)
    }

    pub fn build(self) -> AdjacencyMatrix {
        tracing::debug!(
            vertices = self.dim - 1,
            edges = self.edges_added,
            "adjacency matrix built"
        );
        AdjacencyMatrix {
            dim: self.dim,
            cells: self.cells,
        }
    }
}

/// 邻接矩阵（构建后不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyMatrixRepr")]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<bool>,
}

#[derive(Deserialize)]
struct AdjacencyMatrixRepr {
    dim: usize,
    cells: Vec<bool>,
}

impl TryFrom<AdjacencyMatrixRepr> for AdjacencyMatrix {
    type Error = Error;

    /// 要求 `dim ≥ 1`、`cells.len() == dim²`、第 0 行/列为空且矩阵对称
    fn try_from(repr: AdjacencyMatrixRepr) -> Result<Self> {
        let AdjacencyMatrixRepr { dim, cells } = repr;

        if dim == 0 || dim.checked_mul(dim) != Some(cells.len()) {
            return Err(Error::SerializationError(format!(
                "矩阵边长 {} 与格子数 {} 不匹配",
                dim,
                cells.len()
            )));
        }

        let matrix = Self { dim, cells };
        if !matrix.reserved_slot_clear() {
            return Err(Error::SerializationError(
                "矩阵的第 0 行/列必须为 false".to_string(),
            ));
        }
        for x in 1..dim {
            for y in (x + 1)..dim {
                if matrix.cells[x * dim + y] != matrix.cells[y * dim + x] {
                    return Err(Error::SerializationError(format!(
                        "矩阵在 ({}, {}) 处不对称",
                        x, y
                    )));
                }
            }
        }
        Ok(matrix)
    }
}

impl AdjacencyMatrix {
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut builder = AdjacencyMatrixBuilder::new(n)?;
        builder.extend(edges)?;
        Ok(builder.build())
    }

    pub fn from_pairs(n: usize, pairs: &[(VertexId, VertexId)]) -> Result<Self> {
        Self::from_edges(n, pairs.iter().copied().map(Edge::from))
    }

    pub fn from_input(input: &GraphInput) -> Result<Self> {
        Self::from_edges(input.vertices, input.edges.iter().copied())
    }

    /// 顶点数 n
    pub fn vertex_count(&self) -> usize {
        self.dim - 1
    }

    /// 矩阵边长 `n + 1`（包括保留的第 0 行/列）
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// `[x][y]` 的值；下标超出 `n` 时为 false
    pub fn has_edge(&self, x: VertexId, y: VertexId) -> bool {
        x < self.dim && y < self.dim && self.cells[x * self.dim + y]
    }

    /// 第 `x` 行，长度为 `n + 1`
    pub fn row(&self, x: VertexId) -> Option<&[bool]> {
        if x >= self.dim {
            return None;
        }
        Some(&self.cells[x * self.dim..(x + 1) * self.dim])
    }

    /// 按 `1..=n` 遍历各行，每行去掉保留的第 0 列
    pub fn rows(&self) -> impl Iterator<Item = (VertexId, &[bool])> + '_ {
        self.cells
            .chunks(self.dim)
            .enumerate()
            .skip(1)
            .map(|(x, row)| (x, &row[1..]))
    }

    /// 值为 true 的格子数（自环只占一个格子）
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// 保留的第 0 行和第 0 列是否全为 false
    pub fn reserved_slot_clear(&self) -> bool {
        (0..self.dim).all(|i| {
            !self.cells[RESERVED_SLOT * self.dim + i] && !self.cells[i * self.dim + RESERVED_SLOT]
        })
    }
}
