//! 结果打印器
//!
//! 提供纯文本和表格两种格式的输出

use crate::graph::{AdjacencyList, AdjacencyMatrix};
use crate::sorting::{SortAlgorithm, SortStats};
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Write;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMode {
    /// 纯文本模式
    #[default]
    Plain,
    /// 表格模式
    Table,
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    mode: PrintMode,
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 数组，如 `[1, 2, 3]`
    pub fn format_array(&self, nums: &[i64]) -> String {
        let items: Vec<String> = nums.iter().map(|x| x.to_string()).collect();
        format!("[{}]", items.join(", "))
    }

    /// 排序前后对比
    pub fn format_sort_run(&self, algorithm: SortAlgorithm, before: &[i64], after: &[i64]) -> String {
        format!(
            "Before Using {} Sort: {}\nAfter Using {} Sort: {}\n",
            title_case(algorithm.as_str()),
            self.format_array(before),
            title_case(algorithm.as_str()),
            self.format_array(after)
        )
    }

    /// 各算法的计数
    pub fn format_sort_stats(&self, runs: &[(SortAlgorithm, SortStats)]) -> String {
        match self.mode {
            PrintMode::Plain => {
                let mut out = String::new();
                for (algorithm, stats) in runs {
                    let _ = writeln!(
                        out,
                        "{}: comparisons={} swaps={} max_depth={} peak_stack={}",
                        algorithm,
                        stats.comparisons,
                        stats.swaps,
                        stats.max_depth,
                        stats.peak_stack
                    );
                }
                out
            }
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Algorithm", "Comparisons", "Swaps", "Max Depth", "Peak Stack"]);
                for (algorithm, stats) in runs {
                    table.add_row(row![
                        algorithm.as_str(),
                        stats.comparisons.to_string(),
                        stats.swaps.to_string(),
                        stats.max_depth.to_string(),
                        stats.peak_stack.to_string()
                    ]);
                }
                table.to_string()
            }
        }
    }

    /// 邻接表，每行 `i -> a b `
    pub fn format_adjacency_list(&self, list: &AdjacencyList) -> String {
        match self.mode {
            PrintMode::Plain => {
                let mut out = String::from("The Adjacency List is :\n");
                for (v, neighbors) in list.iter() {
                    let _ = write!(out, "{} -> ", v);
                    for n in neighbors {
                        let _ = write!(out, "{} ", n);
                    }
                    out.push('\n');
                }
                out
            }
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Vertex", "Neighbors"]);
                for (v, neighbors) in list.iter() {
                    let joined: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
                    table.add_row(row![v.to_string(), joined.join(" ")]);
                }
                table.to_string()
            }
        }
    }

    /// 邻接矩阵，只输出 `1..=n` 行列，值为 0/1
    pub fn format_adjacency_matrix(&self, matrix: &AdjacencyMatrix) -> String {
        match self.mode {
            PrintMode::Plain => {
                let mut out = String::from("The Adjacency Matrix is :\n");
                for (_, row) in matrix.rows() {
                    for &cell in row {
                        let _ = write!(out, "{} ", u8::from(cell));
                    }
                    out.push('\n');
                }
                out
            }
            PrintMode::Table => {
                let mut table = new_table();
                let mut header = vec![Cell::new("")];
                header.extend((1..=matrix.vertex_count()).map(|v| Cell::new(&v.to_string())));
                table.set_titles(Row::new(header));

                for (x, row) in matrix.rows() {
                    let mut cells = vec![Cell::new(&x.to_string())];
                    cells.extend(row.iter().map(|&c| Cell::new(if c { "1" } else { "0" })));
                    table.add_row(Row::new(cells));
                }
                table.to_string()
            }
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
