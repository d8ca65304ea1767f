//! End-to-end route planning over the embedded campus.
//!
//! Each test exercises: raw text -> normalize/resolve -> breadth-first
//! search -> typed result.

use campus_nav::{
    plan_route, resolve, shortest_path, CampusGraph, Error, Path, RouteRequest, WaypointId,
};
use pretty_assertions::assert_eq;

fn campus() -> CampusGraph {
    CampusGraph::embedded().unwrap()
}

fn ids(path: &Path) -> Vec<&str> {
    path.iter().map(WaypointId::as_str).collect()
}

// ============================================================================
// 1. Concrete routes (tie-break follows declared neighbor order)
// ============================================================================

#[test]
fn test_entry_to_b8() {
    let path = shortest_path(&campus(), "ENTRY", "B8").unwrap();
    assert_eq!(ids(&path), vec!["ENTRY", "R0", "R1", "R3", "B8"]);
}

#[test]
fn test_entry_to_admin_block() {
    let path = RouteRequest::new("entry", "Admin Block").plan(&campus()).unwrap();
    assert_eq!(
        ids(&path),
        vec!["ENTRY", "R0", "R1", "R3", "R4", "R5", "R6", "R7", "R8", "R19", "ADMIN_BLOCK"]
    );
}

#[test]
fn test_entry_to_girls_hostel() {
    let path = RouteRequest::new("ENTRY", "girls hostel").plan(&campus()).unwrap();
    assert_eq!(
        ids(&path),
        vec!["ENTRY", "R0", "R2", "R14", "R13", "R12", "R11", "R10", "R9", "R21", "GIRLS_HOSTEL"]
    );
}

#[test]
fn test_boys_hostel_to_b3() {
    let path = shortest_path(&campus(), "BOYS_HOSTEL", "B3").unwrap();
    assert_eq!(ids(&path), vec!["BOYS_HOSTEL", "R20", "R17", "R5", "R6", "R7", "R8", "B3"]);
}

#[test]
fn test_reverse_route_has_same_length() {
    let graph = campus();
    let there = shortest_path(&graph, "ENTRY", "ADMIN_BLOCK").unwrap();
    let back = shortest_path(&graph, "ADMIN_BLOCK", "ENTRY").unwrap();
    assert_eq!(there.hops(), back.hops());
}

// ============================================================================
// 2. Every pair on the campus
// ============================================================================

#[test]
fn test_campus_is_connected_and_paths_are_valid() {
    let graph = campus();
    let all: Vec<WaypointId> = graph.ids().into_iter().cloned().collect();

    for start in &all {
        for end in &all {
            let path = shortest_path(&graph, start.as_str(), end.as_str())
                .unwrap_or_else(|| panic!("no route {start} -> {end}"));
            assert_eq!(path.start(), start);
            assert_eq!(path.end(), end);
            assert!(path.is_simple(), "route {path} repeats a waypoint");
            for pair in path.as_slice().windows(2) {
                assert!(
                    graph.neighbors(pair[0].as_str()).contains(&pair[1]),
                    "{} -> {} is not an edge",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn test_same_waypoint_everywhere() {
    let graph = campus();
    for id in graph.ids() {
        let path = shortest_path(&graph, id.as_str(), id.as_str()).unwrap();
        assert_eq!(path.as_slice(), std::slice::from_ref(id));
    }
}

// ============================================================================
// 3. Failure taxonomy
// ============================================================================

#[test]
fn test_unknown_destination() {
    let err = RouteRequest::new("ENTRY", "library").plan(&campus()).unwrap_err();
    assert!(matches!(err, Error::UnknownWaypoint(ref id) if id == "LIBRARY"));
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "Unknown place: 'LIBRARY'");
}

#[test]
fn test_empty_destination_is_unknown() {
    let err = RouteRequest::new("ENTRY", "   ").plan(&campus()).unwrap_err();
    assert!(matches!(err, Error::UnknownWaypoint(ref id) if id.is_empty()));
}

#[test]
fn test_unreachable_is_distinct_from_unknown() {
    let json = r#"{
        "positions": { "A": { "x": 0, "y": 0 }, "Z": { "x": 5, "y": 5 } },
        "adjacency": { "A": ["B"], "B": ["A"], "Z": [] }
    }"#;
    let graph = CampusGraph::from_json_str(json).unwrap();

    let err = plan_route(&graph, &"A".into(), &"Z".into()).unwrap_err();
    assert!(matches!(err, Error::NoPathFound { .. }));
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "Destination unreachable: no route from A to Z");

    let err = plan_route(&graph, &"Z".into(), &"A".into()).unwrap_err();
    assert!(matches!(err, Error::NoPathFound { .. }));
}

// ============================================================================
// 4. Normalization against canonical ids
// ============================================================================

#[test]
fn test_spaced_block_number_resolves_to_canonical_id() {
    let graph = campus();
    assert_eq!(campus_nav::normalize("  b 8 "), "B_8");
    assert!(!graph.contains("B_8"));
    assert_eq!(resolve(&graph, "  b 8 ").unwrap(), "B8");

    let path = RouteRequest::new("entry", "  b 8 ").plan(&graph).unwrap();
    assert_eq!(path.end(), "B8");
}

#[test]
fn test_block_numbers_do_not_collide() {
    let graph = campus();
    assert_eq!(resolve(&graph, "b 1 0").unwrap(), "B10");
    assert_eq!(resolve(&graph, "b1").unwrap(), "B1");
    assert_eq!(resolve(&graph, "b 11").unwrap(), "B11");
}
