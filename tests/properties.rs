//! Property tests for route planning and cursor progress on small
//! synthetic campuses.

use campus_nav::{shortest_path, CampusGraph, CursorState, NavigationCursor, Path, Position, WaypointId};
use proptest::prelude::*;

const MAX_NODES: usize = 7;

fn name(i: usize) -> String {
    format!("N{i}")
}

/// Undirected graph on `n` nodes from an edge list.
fn build(n: usize, edges: &[(usize, usize)]) -> CampusGraph {
    let mut builder = CampusGraph::builder();
    for i in 0..n {
        builder = builder.waypoint(name(i));
    }
    for &(a, b) in edges {
        if a != b {
            builder = builder.edge(name(a), name(b));
        }
    }
    builder.build().unwrap()
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        (Just(n), prop::collection::vec((0..n, 0..n), 0..(n * 2)))
    })
}

/// Fewest hops over all simple walks, by exhaustive enumeration.
fn brute_force_hops(graph: &CampusGraph, start: &str, end: &str) -> Option<usize> {
    fn dfs<'a>(
        graph: &'a CampusGraph,
        current: &'a str,
        end: &str,
        on_path: &mut Vec<&'a str>,
        best: &mut Option<usize>,
    ) {
        if current == end {
            let hops = on_path.len() - 1;
            if best.map_or(true, |b| hops < b) {
                *best = Some(hops);
            }
            return;
        }
        for next in graph.neighbors(current) {
            let next = next.as_str();
            if !on_path.contains(&next) {
                on_path.push(next);
                dfs(graph, next, end, on_path, best);
                on_path.pop();
            }
        }
    }

    let start = graph.ids().into_iter().find(|id| id.as_str() == start)?;
    let mut best = None;
    dfs(graph, start.as_str(), end, &mut vec![start.as_str()], &mut best);
    best
}

fn is_valid_walk(graph: &CampusGraph, path: &Path) -> bool {
    path.as_slice()
        .windows(2)
        .all(|pair| graph.neighbors(pair[0].as_str()).contains(&pair[1]))
}

proptest! {
    #[test]
    fn same_start_and_end_is_single_waypoint((n, edges) in graph_strategy(), a in 0..MAX_NODES) {
        let graph = build(n, &edges);
        let a = name(a % n);
        let path = shortest_path(&graph, &a, &a).unwrap();
        let expected = vec![WaypointId::from(a)];
        prop_assert_eq!(path.as_slice(), expected.as_slice());
    }

    #[test]
    fn not_found_is_symmetric((n, edges) in graph_strategy(), a in 0..MAX_NODES, b in 0..MAX_NODES) {
        let graph = build(n, &edges);
        let (a, b) = (name(a % n), name(b % n));
        prop_assert_eq!(
            shortest_path(&graph, &a, &b).is_none(),
            shortest_path(&graph, &b, &a).is_none()
        );
    }

    #[test]
    fn paths_are_simple_walks_of_minimum_length(
        (n, edges) in graph_strategy(),
        a in 0..MAX_NODES,
        b in 0..MAX_NODES,
    ) {
        let graph = build(n, &edges);
        let (a, b) = (name(a % n), name(b % n));
        let expected = brute_force_hops(&graph, &a, &b);

        match shortest_path(&graph, &a, &b) {
            Some(path) => {
                prop_assert_eq!(path.start().as_str(), a.as_str());
                prop_assert_eq!(path.end().as_str(), b.as_str());
                prop_assert!(path.is_simple());
                prop_assert!(is_valid_walk(&graph, &path));
                prop_assert_eq!(Some(path.hops()), expected);
            }
            None => prop_assert_eq!(expected, None),
        }
    }

    #[test]
    fn cursor_index_follows_advances(len in 1usize..12, k in 0usize..20) {
        let mut builder = CampusGraph::builder();
        for i in 0..len {
            builder = builder.position(name(i), Position::new(i as f64, (i % 3) as f64));
            if i > 0 {
                builder = builder.edge(name(i - 1), name(i));
            }
        }
        let graph = builder.build().unwrap();
        let path = Path::from_ids((0..len).map(|i| WaypointId::from(name(i)))).unwrap();

        let mut cursor = NavigationCursor::new(path, &graph);
        for _ in 0..k {
            cursor.advance();
        }

        prop_assert_eq!(cursor.index(), k.min(len - 1));
        prop_assert_eq!(cursor.state() == CursorState::Arrived, cursor.index() == len - 1);
        prop_assert_eq!(cursor.current_instruction().is_arrived(), cursor.is_arrived());
    }
}
