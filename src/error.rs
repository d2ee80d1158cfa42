//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的顶点: 第 {edge} 条边 ({x}, {y}) 中的顶点 {vertex} 超出范围 [1, {n}]")]
    InvalidVertex {
        vertex: usize,
        n: usize,
        edge: usize,
        x: usize,
        y: usize,
    },

    #[error("顶点数过大: n = {n}，无法分配 (n + 1) 个槽位")]
    CapacityOverflow { n: usize },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("输入提前结束: {0}")]
    UnexpectedEof(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
