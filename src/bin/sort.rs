//! AlgoKit 排序演示工具
//!
//! 对给定数组（或各算法的演示数组）排序并打印前后状态

use algokit::cli::{init_tracing, PrintMode, Printer};
use algokit::import::read_array_file;
use algokit::sorting::SortAlgorithm;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Insertion,
    Quick,
    Heap,
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<SortAlgorithm> {
        match self {
            AlgorithmArg::Insertion => vec![SortAlgorithm::Insertion],
            AlgorithmArg::Quick => vec![SortAlgorithm::Quick],
            AlgorithmArg::Heap => vec![SortAlgorithm::Heap],
            AlgorithmArg::All => SortAlgorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "algokit-sort")]
#[command(about = "AlgoKit 排序演示工具")]
struct Args {
    /// 排序算法
    #[arg(short, long, value_enum, default_value = "all")]
    algorithm: AlgorithmArg,

    /// 从文件读取数组（逗号或空白分隔）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 打印比较/交换计数
    #[arg(short, long)]
    stats: bool,

    /// 以表格形式打印计数
    #[arg(long)]
    table: bool,

    /// 待排序的整数；为空时使用各算法的演示数组
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let mode = if args.table {
        PrintMode::Table
    } else {
        PrintMode::Plain
    };
    let printer = Printer::new(mode);

    let given = if !args.values.is_empty() {
        Some(args.values.clone())
    } else if let Some(path) = &args.input {
        Some(read_array_file(path)?)
    } else {
        None
    };

    let mut runs = Vec::new();
    for algorithm in args.algorithm.algorithms() {
        let before = given.clone().unwrap_or_else(|| algorithm.demo_input());
        let mut after = before.clone();
        let stats = algorithm.sort(&mut after);

        print!("{}", printer.format_sort_run(algorithm, &before, &after));
        runs.push((algorithm, stats));
    }

    if args.stats {
        println!();
        print!("{}", printer.format_sort_stats(&runs));
    }

    Ok(())
}
