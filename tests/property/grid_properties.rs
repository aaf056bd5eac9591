use expedition_check::analysis::{
    check_reachability, classify, find_start, flood_fill, ParkStatus, Verdict,
};
use expedition_check::grid::{CellLabel, Grid, Location};
use expedition_check::NoStartPointError;
use proptest::prelude::*;

fn layout() -> impl Strategy<Value = Vec<String>> {
    (1usize..9).prop_flat_map(|size| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['P', 'H', 'S', 'R', 'B', 'W']), size)
                .prop_map(|row| row.into_iter().collect::<String>()),
            size,
        )
    })
}

proptest! {
    #[test]
    fn flood_fill_is_sound(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        for (start, _) in grid.iter() {
            for p in flood_fill(&grid, start) {
                prop_assert!(grid.in_bounds(&p));
                prop_assert!(grid.label_at(&p).is_passable());
            }
        }
    }

    #[test]
    fn flood_fill_is_closed(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        for (start, label) in grid.iter() {
            let visited = flood_fill(&grid, start);
            prop_assert_eq!(visited.contains(&start), label.is_passable());
            // nothing passable next to the region is left out
            for p in &visited {
                for (dx, dy) in [(0, -1), (-1, 0), (0, 1), (1, 0)] {
                    let n = Location::new(p.x + dx, p.y + dy);
                    let inside = n.x >= 0 && n.y >= 0
                        && (n.x as usize) < rows.len() && (n.y as usize) < rows.len();
                    let passable = inside
                        && matches!(rows[n.y as usize].as_bytes()[n.x as usize], b'R' | b'P' | b'H' | b'S');
                    prop_assert_eq!(visited.contains(&n), passable, "{} next to {}", n, p);
                }
            }
        }
    }

    #[test]
    fn flood_fill_is_symmetric(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        let cells: Vec<Location> = grid.iter().map(|(p, _)| p).collect();
        for a in &cells {
            let from_a = flood_fill(&grid, *a);
            for b in &from_a {
                prop_assert!(flood_fill(&grid, *b).contains(a));
            }
        }
    }

    #[test]
    fn classify_thresholds(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        let parks = classify(&grid);
        prop_assert_eq!(parks.len(), grid.count(CellLabel::Park));
        for park in parks {
            let count = park.neighbors.iter().filter(|l| l.is_passable()).count();
            prop_assert_eq!(count, park.passable_count);
            let expected = match count {
                0 => ParkStatus::Isolated,
                1 => ParkStatus::DeadEnd,
                _ => ParkStatus::Accessible,
            };
            prop_assert_eq!(park.status, expected);
        }
    }

    #[test]
    fn analysis_is_idempotent(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        prop_assert_eq!(classify(&grid), classify(&grid));
        prop_assert_eq!(check_reachability(&grid), check_reachability(&grid));
    }

    #[test]
    fn reachability_matches_flood_fill(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        match check_reachability(&grid) {
            Err(NoStartPointError) => {
                prop_assert_eq!(grid.count(CellLabel::Home), 0);
            }
            Ok(report) => {
                prop_assert_eq!(Some(report.start), find_start(&grid));
                let visited = flood_fill(&grid, report.start);
                for point in &report.points {
                    prop_assert_eq!(point.reachable, visited.contains(&point.poi.location));
                }
                prop_assert_eq!(report.total_park_count(), grid.count(CellLabel::Park));
                prop_assert_eq!(
                    report.verdict == Verdict::AllReachable,
                    report.unreachable_parks().is_empty()
                );
            }
        }
    }

    #[test]
    fn isolated_parks_are_never_reached(rows in layout()) {
        let grid = Grid::parse(&rows).unwrap();
        if let Ok(report) = check_reachability(&grid) {
            for park in classify(&grid) {
                if park.status == ParkStatus::Isolated {
                    prop_assert_eq!(report.is_reachable(&park.location), Some(false));
                }
            }
        }
    }
}
