//! 邻接表 / 邻接矩阵的性质测试

use algokit::graph::{AdjacencyList, AdjacencyMatrix, Edge};
use algokit::import::GraphReader;
use algokit::{Error, RESERVED_SLOT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng) -> (usize, Vec<Edge>) {
    let n = rng.gen_range(1..20);
    let m = rng.gen_range(0..40);
    let edges = (0..m)
        .map(|_| Edge::new(rng.gen_range(1..=n), rng.gen_range(1..=n)))
        .collect();
    (n, edges)
}

#[test]
fn test_symmetry_and_entry_count() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let (n, edges) = random_graph(&mut rng);
        let list = AdjacencyList::from_edges(n, edges.iter().copied()).unwrap();
        let matrix = AdjacencyMatrix::from_edges(n, edges.iter().copied()).unwrap();

        assert_eq!(list.entry_count(), 2 * edges.len());

        for x in 1..=n {
            for y in 1..=n {
                assert_eq!(list.contains(x, y), list.contains(y, x));
                assert_eq!(matrix.has_edge(x, y), matrix.has_edge(y, x));
                // 两种表示描述同一张图
                assert_eq!(list.contains(x, y), matrix.has_edge(x, y));
            }
        }

        assert!(list.slots()[RESERVED_SLOT].is_empty());
        assert!(matrix.reserved_slot_clear());
    }
}

#[test]
fn test_list_records_duplicates_matrix_does_not() {
    let pairs = [(1, 2), (1, 2), (2, 1)];
    let list = AdjacencyList::from_pairs(2, &pairs).unwrap();
    let matrix = AdjacencyMatrix::from_pairs(2, &pairs).unwrap();

    assert_eq!(list.neighbors(1).unwrap(), &[2, 2, 2]);
    assert_eq!(list.neighbors(2).unwrap(), &[1, 1, 1]);
    assert_eq!(matrix.cell_count(), 2);
}

#[test]
fn test_self_loop_appends_twice() {
    let list = AdjacencyList::from_pairs(3, &[(2, 2)]).unwrap();
    assert_eq!(list.neighbors(2).unwrap(), &[2, 2]);
    assert_eq!(list.entry_count(), 2);
}

#[test]
fn test_reader_to_builders() {
    let input = GraphReader::default()
        .read_str("4 3\n1 2\n2 3\n3 4\n")
        .unwrap();

    let list = AdjacencyList::from_input(&input).unwrap();
    let expected: Vec<(usize, Vec<usize>)> = vec![
        (1, vec![2]),
        (2, vec![1, 3]),
        (3, vec![2, 4]),
        (4, vec![3]),
    ];
    let actual: Vec<(usize, Vec<usize>)> = list.iter().map(|(v, n)| (v, n.to_vec())).collect();
    assert_eq!(actual, expected);

    let matrix = AdjacencyMatrix::from_input(&input).unwrap();
    let ones: Vec<(usize, usize)> = (1..=4)
        .flat_map(|x| (1..=4).map(move |y| (x, y)))
        .filter(|&(x, y)| matrix.has_edge(x, y))
        .collect();
    assert_eq!(
        ones,
        vec![(1, 2), (2, 1), (2, 3), (3, 2), (3, 4), (4, 3)]
    );
}

#[test]
fn test_out_of_range_input_rejected_by_both() {
    let input = GraphReader::default().read_str("3 2\n1 2\n3 4\n").unwrap();

    for err in [
        AdjacencyList::from_input(&input).unwrap_err(),
        AdjacencyMatrix::from_input(&input).unwrap_err(),
    ] {
        match err {
            Error::InvalidVertex { vertex, n, edge, x, y } => {
                assert_eq!((vertex, n, edge, x, y), (4, 3, 1, 3, 4));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}

#[test]
fn test_oversized_vertex_count_is_an_error() {
    let input = GraphReader::default()
        .read_str("18446744073709551615 0\n")
        .unwrap();

    for err in [
        AdjacencyList::from_input(&input).unwrap_err(),
        AdjacencyMatrix::from_input(&input).unwrap_err(),
    ] {
        assert!(matches!(err, Error::CapacityOverflow { n } if n == usize::MAX));
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_matrix_rejects_unrepresentable_square() {
    let input = GraphReader::default().read_str("4294967296 0").unwrap();
    assert!(matches!(
        AdjacencyMatrix::from_input(&input),
        Err(Error::CapacityOverflow { n: 4294967296 })
    ));
}
