//! AlgoKit 图表示工具
//!
//! 读取 `n m` 和 `m` 条边，输出邻接表和/或邻接矩阵

use algokit::cli::{init_tracing, PrintMode, Printer};
use algokit::graph::{AdjacencyList, AdjacencyMatrix};
use algokit::import::{GraphReader, InputFormat};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Repr {
    List,
    Matrix,
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => InputFormat::Text,
            FormatArg::Json => InputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "algokit-graph")]
#[command(about = "AlgoKit 无向图表示工具")]
struct Args {
    /// 输出的表示形式
    #[arg(short, long, value_enum, default_value = "both")]
    repr: Repr,

    /// 输入文件路径，缺省时从标准输入读取
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输入格式
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// 以表格形式输出
    #[arg(long)]
    table: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let reader = GraphReader::new(args.format.into());
    let input = match &args.input {
        Some(path) => reader.read_file(path)?,
        None => reader.read(io::stdin().lock())?,
    };

    let mode = if args.table {
        PrintMode::Table
    } else {
        PrintMode::Plain
    };
    let printer = Printer::new(mode);

    if matches!(args.repr, Repr::List | Repr::Both) {
        let list = AdjacencyList::from_input(&input)?;
        print!("{}", printer.format_adjacency_list(&list));
    }

    if matches!(args.repr, Repr::Matrix | Repr::Both) {
        let matrix = AdjacencyMatrix::from_input(&input)?;
        print!("{}", printer.format_adjacency_matrix(&matrix));
    }

    Ok(())
}
