//! Integration tests for shape detection.
//!
//! These go through the public API only: sketch a map, detect its shapes,
//! and hand the results on (flood fill, SVG, JSON) the way a caller would.

use omnigraph::{
    Coordinate, Cycle, CycleDetection, FloodFill, Grid, Line, LineDetection, SvgStyle, render_svg,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Two rooms knocked into one, with no shared wall.
const MERGED_ROOMS: &str = "
    .....
    .....
    ..###
    ..#.#
    ###.#
    #...#
    #...#
    #####
";

#[test]
fn detect_shape_then_fill_interior() {
    let grid = Grid::parse(MERGED_ROOMS).unwrap();

    let detection = CycleDetection::new(c(4, 0), grid.oracle());
    assert_eq!(detection.cycles().len(), 1);

    let centroid = detection.cycles()[0].triangle_sample().unwrap().centroid();
    assert_eq!(centroid, c(6, 1));

    // Fill the floor from the centroid, remembering every tile painted.
    let mut painted = Vec::new();
    let mut fill = FloodFill::new(|p: Coordinate| {
        let inside = (0..8).contains(&p.x) && (0..5).contains(&p.y);
        let floor = inside && !grid.contains(p);
        if floor {
            painted.push(p);
        }
        floor
    });
    assert_eq!(fill.fill(centroid), 8);
    drop(fill);

    painted.sort();
    let mut deduped = painted.clone();
    deduped.dedup();
    assert_eq!(painted, deduped, "each tile painted once");
    assert!(painted.contains(&c(3, 3)));
    assert!(painted.contains(&c(6, 3)));
}

#[test]
fn unoccupied_origin_finds_nothing() {
    let grid = Grid::parse(MERGED_ROOMS).unwrap();
    let origin = c(0, 0);

    assert!(CycleDetection::new(origin, grid.oracle()).cycles().is_empty());
    assert!(LineDetection::new(origin, grid.oracle()).lines().is_empty());
}

#[test]
fn outline_lines_are_all_edges() {
    let grid = Grid::parse(MERGED_ROOMS).unwrap();
    let detection = LineDetection::new(c(4, 0), grid.oracle());

    assert_eq!(detection.lines().len(), 6);
    assert_eq!(detection.orphans().count(), 0);
}

#[test]
fn antenna_is_an_orphan() {
    let grid = Grid::parse(
        "
        ###..
        #.###
        ###..
        ",
    )
    .unwrap();
    let detection = LineDetection::new(c(0, 0), grid.oracle());

    let orphans: Vec<&Line> = detection.orphans().collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].end(), c(1, 4));
}

#[test]
fn rendered_svg_parses() {
    let grid = Grid::parse(MERGED_ROOMS).unwrap();
    let cycles = CycleDetection::new(c(4, 0), grid.oracle()).into_cycles();
    let lines = LineDetection::new(c(4, 0), grid.oracle()).into_lines();

    let svg = render_svg(&cycles, &lines, &SvgStyle::default()).unwrap();
    assert_eq!(svg.matches("<polygon").count(), cycles.len());
    assert_eq!(svg.matches("<line").count(), lines.len());

    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).expect("valid SVG");
    assert!(!tree.root().children().is_empty());
}

#[test]
fn cycles_round_trip_through_json() {
    let grid = Grid::parse(
        "
        #####
        #.#.#
        #####
        ",
    )
    .unwrap();
    let cycles = CycleDetection::new(c(0, 0), grid.oracle()).into_cycles();
    assert_eq!(cycles.len(), 3);

    let json = serde_json::to_string(&cycles).unwrap();
    let loaded: Vec<Cycle> = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, cycles);
    assert_eq!(loaded[0].vertices(), cycles[0].vertices());
}

#[test]
fn open_cycle_json_is_rejected() {
    let json = r#"[{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1}]"#;
    assert!(serde_json::from_str::<Cycle>(json).is_err());
}

// ============================================================================
// RANDOMIZED INVARIANTS
// ============================================================================

/// A small random grid with the origin forced on.
fn random_grid(rng: &mut StdRng, size: usize) -> Grid {
    let mut rows: Vec<Vec<bool>> = (0..size)
        .map(|_| (0..size).map(|_| rng.random_bool(0.65)).collect())
        .collect();
    rows[0][0] = true;
    Grid::from_rows(rows)
}

/// Lines through `point`, counted against the infinite line.
fn touching(lines: &[Line], point: Coordinate) -> usize {
    lines.iter().filter(|line| line.contains_point(point)).count()
}

#[test]
fn random_grids_keep_cycle_invariants() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..40 {
        let grid = random_grid(&mut rng, 4);
        let detection = CycleDetection::new(c(0, 0), grid.oracle());
        let cycles = detection.cycles();

        for (i, cycle) in cycles.iter().enumerate() {
            let points = cycle.points();
            assert_eq!(points.first(), points.last(), "{cycle} is closed");
            assert!(cycle.distinct_len() >= 4, "{cycle} is not degenerate");
            assert!(points.iter().all(|&p| grid.contains(p)));
            assert!(points.windows(2).all(|w| w[0].distance_squared(w[1]) == 1));

            for other in &cycles[i + 1..] {
                assert_ne!(cycle, other);
            }
        }
    }
}

#[test]
fn random_grids_keep_line_invariants() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..40 {
        let grid = random_grid(&mut rng, 5);
        let detection = LineDetection::new(c(0, 0), grid.oracle());
        let lines = detection.lines();

        for line in lines {
            assert_ne!(line.start(), line.end());
            assert!(line.points().all(|p| grid.contains(p)), "{line} is occupied");

            let dead_end = touching(lines, line.start()) < 2 || touching(lines, line.end()) < 2;
            assert_eq!(line.is_orphan(), dead_end, "orphan flag of {line}");
        }
    }
}
