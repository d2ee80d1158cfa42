//! 邻接表
//!
//! 无向图的邻接表表示。顶点 `1..=n`，底层按 `n + 1` 个槽位分配，
//! 0 号槽位保留且始终为空，与邻接矩阵的下标方式保持一致。
//!
//! 边 `(x, y)` 到达时先把 `y` 追加到 `x` 的列表，再把 `x` 追加到 `y` 的列表。
//! 重边和自环都会原样记录：自环 `(x, x)` 会在 `x` 的列表中追加两次 `x`。

use super::edge::Edge;
use crate::error::{Error, Result};
use crate::types::{GraphInput, VertexId, RESERVED_SLOT};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::alloc::Layout;

/// 单个顶点的邻居序列
pub type Neighbors = SmallVec<[VertexId; 4]>;

/// 邻接表构建器
#[derive(Debug, Clone)]
pub struct AdjacencyListBuilder {
    adj: Vec<Neighbors>,
    edges_added: usize,
}

impl AdjacencyListBuilder {
    /// 为 `n` 个顶点分配 `n + 1` 个空列表；槽位数无法表示时返回 `CapacityOverflow`
    pub fn new(n: usize) -> Result<Self> {
        let slots = n
            .checked_add(1)
            .filter(|&slots| Layout::array::<Neighbors>(slots).is_ok())
            .ok_or(Error::CapacityOverflow { n })?;

        Ok(Self {
            adj: vec![Neighbors::new(); slots],
            edges_added: 0,
        })
    }

    /// 顶点数 n
    pub fn vertex_count(&self) -> usize {
        self.adj.len() - 1
    }

    /// 添加一条无向边；顶点越界时返回错误且不修改任何列表
    pub fn add_edge(&mut self, x: VertexId, y: VertexId) -> Result<&mut Self> {
        let edge = Edge::new(x, y);
        edge.validate(self.vertex_count(), self.edges_added)?;

        self.adj[x].push(y);
        self.adj[y].push(x);
        self.edges_added += 1;
        Ok(self)
    }

    /// 按顺序添加一组边
    pub fn extend<I>(&mut self, edges: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            self.add_edge(edge.x, edge.y)?;
        }
        Ok(self)
    }

    /// 完成构建
    pub fn build(self) -> AdjacencyList {
        tracing::debug!(
            vertices = self.adj.len() - 1,
            edges = self.edges_added,
            "adjacency list built"
        );
        AdjacencyList {
            adj: self.adj,
            edge_count: self.edges_added,
        }
    }
}

/// 邻接表（构建后不可变）
///
/// 反序列化时会重新检查槽位结构，不满足时返回错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyListRepr")]
pub struct AdjacencyList {
    adj: Vec<Neighbors>,
    edge_count: usize,
}

#[derive(Deserialize)]
struct AdjacencyListRepr {
    adj: Vec<Neighbors>,
    edge_count: usize,
}

impl TryFrom<AdjacencyListRepr> for AdjacencyList {
    type Error = Error;

    fn try_from(repr: AdjacencyListRepr) -> Result<Self> {
        let AdjacencyListRepr { adj, edge_count } = repr;

        let n = adj.len().checked_sub(1).ok_or_else(|| {
            Error::SerializationError("邻接表缺少保留的 0 号槽位".to_string())
        })?;
        if !adj[RESERVED_SLOT].is_empty() {
            return Err(Error::SerializationError(
                "邻接表的 0 号槽位必须为空".to_string(),
            ));
        }
        for (v, neighbors) in adj.iter().enumerate() {
            if let Some(&u) = neighbors.iter().find(|&&u| u == RESERVED_SLOT || u > n) {
                return Err(Error::SerializationError(format!(
                    "顶点 {} 的邻居 {} 超出范围 [1, {}]",
                    v, u, n
                )));
            }
        }

        let entries: usize = adj.iter().map(|list| list.len()).sum();
        if edge_count.checked_mul(2) != Some(entries) {
            return Err(Error::SerializationError(format!(
                "边数 {} 与条目数 {} 不一致",
                edge_count, entries
            )));
        }

        Ok(Self { adj, edge_count })
    }
}

impl AdjacencyList {
    /// 从顶点数和边列表一次性构建
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut builder = AdjacencyListBuilder::new(n)?;
        builder.extend(edges)?;
        Ok(builder.build())
    }

    /// 从 `(x, y)` 对构建
    pub fn from_pairs(n: usize, pairs: &[(VertexId, VertexId)]) -> Result<Self> {
        Self::from_edges(n, pairs.iter().copied().map(Edge::from))
    }

    /// 从解析后的输入构建
    pub fn from_input(input: &GraphInput) -> Result<Self> {
        Self::from_edges(input.vertices, input.edges.iter().copied())
    }

    /// 顶点数 n
    pub fn vertex_count(&self) -> usize {
        self.adj.len() - 1
    }

    /// 输入的边数 m
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 所有列表中的条目总数，恒等于 `2m`
    pub fn entry_count(&self) -> usize {
        self.adj.iter().map(|n| n.len()).sum()
    }

    /// 顶点 `v` 的邻居，按边到达顺序；`v` 不在 `[1, n]` 内时返回 `None`
    pub fn neighbors(&self, v: VertexId) -> Option<&[VertexId]> {
        if v == RESERVED_SLOT {
            return None;
        }
        self.adj.get(v).map(|n| n.as_slice())
    }

    /// 顶点 `v` 的度数（自环计两次）
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.neighbors(v).map(|n| n.len())
    }

    /// `y` 是否出现在 `x` 的邻居中
    pub fn contains(&self, x: VertexId, y: VertexId) -> bool {
        self.neighbors(x).map_or(false, |n| n.contains(&y))
    }

    /// 按 `1..=n` 遍历 `(顶点, 邻居)`
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.adj
            .iter()
            .enumerate()
            .skip(1)
            .map(|(v, n)| (v, n.as_slice()))
    }

    /// 底层的 `n + 1` 个槽位，包括保留的 0 号槽位
    pub fn slots(&self) -> &[Neighbors] {
        &self.adj
    }
}
