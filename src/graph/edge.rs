//! 边定义
//!
//! 无向边 `(x, y)`，顶点标签从 1 开始

use crate::error::{Error, Result};
use crate::types::{VertexId, RESERVED_SLOT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "EdgeRepr")]
pub struct Edge {
    pub x: VertexId,
    pub y: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(x: VertexId, y: VertexId) -> Self {
        Self { x, y }
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.x == self.y
    }

    /// 检查两个端点都在 `[1, n]` 内，`position` 为该边在输入中的序号
    pub fn validate(&self, n: usize, position: usize) -> Result<()> {
        for vertex in [self.x, self.y] {
            if vertex == RESERVED_SLOT || vertex > n {
                return Err(Error::InvalidVertex {
                    vertex,
                    n,
                    edge: position,
                    x: self.x,
                    y: self.y,
                });
            }
        }
        Ok(())
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.x {
            Some(self.y)
        } else if v == self.y {
            Some(self.x)
        } else {
            None
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((x, y): (VertexId, VertexId)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// JSON 中的边既可以写成 `[x, y]`，也可以写成 `{"x": .., "y": ..}`
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeRepr {
    Pair(VertexId, VertexId),
    Named { x: VertexId, y: VertexId },
}

impl From<EdgeRepr> for Edge {
    fn from(repr: EdgeRepr) -> Self {
        match repr {
            EdgeRepr::Pair(x, y) | EdgeRepr::Named { x, y } => Edge { x, y },
        }
    }
}
