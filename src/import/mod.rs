//! 输入读取模块
//!
//! 图输入支持两种格式：
//! - 文本: 先是 `n m`，随后 `m` 对 `x y`，以任意空白分隔（不要求按行排列）
//! - JSON: `{"vertices": n, "edges": [[x, y], ...]}`
//!
//! 另外提供整数数组的读取，供排序使用。

use crate::error::{Error, Result};
use crate::graph::Edge;
use crate::types::GraphInput;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// 图输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(Error::ParseError(format!("不支持的格式: {}", other))),
        }
    }
}

/// 图输入读取器
#[derive(Debug, Clone, Default)]
pub struct GraphReader {
    format: InputFormat,
}

impl GraphReader {
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    /// 从文件读取
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<GraphInput> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), format = ?self.format, "reading graph input");
        self.read(BufReader::new(file))
    }

    /// 从任意 reader 读取
    pub fn read<R: BufRead>(&self, reader: R) -> Result<GraphInput> {
        let input = match self.format {
            InputFormat::Text => read_text(reader)?,
            InputFormat::Json => read_json(reader)?,
        };
        tracing::debug!(
            vertices = input.vertices,
            edges = input.edge_count(),
            "graph input parsed"
        );
        Ok(input)
    }

    /// 从字符串读取
    pub fn read_str(&self, s: &str) -> Result<GraphInput> {
        self.read(s.as_bytes())
    }
}

/// 按空白切分的整数记号流
struct Tokens<R> {
    lines: std::io::Lines<R>,
    pending: std::vec::IntoIter<String>,
    line_no: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            line_no: 0,
        }
    }

    /// 读取下一个整数；`what` 用于错误信息
    fn next_usize(&mut self, what: &str) -> Result<usize> {
        loop {
            if let Some(token) = self.pending.next() {
                return token.parse::<usize>().map_err(|_| {
                    Error::ParseError(format!(
                        "第 {} 行: {} 不是有效的非负整数: {:?}",
                        self.line_no, what, token
                    ))
                });
            }
            match self.lines.next() {
                Some(line) => {
                    let line = line?;
                    self.line_no += 1;
                    self.pending = line
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                None => return Err(Error::UnexpectedEof(format!("缺少{}", what))),
            }
        }
    }
}

fn read_text<R: BufRead>(reader: R) -> Result<GraphInput> {
    let mut tokens = Tokens::new(reader);

    let vertices = tokens.next_usize("顶点数 n")?;
    let m = tokens.next_usize("边数 m")?;

    let mut edges = Vec::with_capacity(m.min(1 << 16));
    for i in 0..m {
        let x = tokens.next_usize(&format!("第 {} 条边的 x", i + 1))?;
        let y = tokens.next_usize(&format!("第 {} 条边的 y", i + 1))?;
        edges.push(Edge::new(x, y));
    }

    Ok(GraphInput { vertices, edges })
}

fn read_json<R: Read>(reader: R) -> Result<GraphInput> {
    Ok(serde_json::from_reader(reader)?)
}

/// 解析整数数组，元素可用逗号、空白分隔，允许外层方括号
pub fn parse_array(s: &str) -> Result<Vec<i64>> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<i64>()
                .map_err(|_| Error::ParseError(format!("无效的整数: {:?}", t)))
        })
        .collect()
}

/// 从文件读取整数数组
pub fn read_array_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let content = std::fs::read_to_string(path)?;
    parse_array(&content)
}
