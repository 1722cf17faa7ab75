//! End-to-end placement scenarios.

use hangar_core::{Aircraft, Hangar, Rotation};
use hangar_packer::optimize_placement;

fn jet(id: &str, width: f64, length: f64, height: f64) -> Aircraft {
    Aircraft::new(id, id.to_uppercase(), width, length, height)
}

mod documented_scenarios {
    use super::*;

    #[test]
    fn test_single_jet_in_default_hangar() {
        let hangar = Hangar::new("Main Hangar", 100.0, 150.0, 20.0);
        let result = optimize_placement(&hangar, &[jet("a", 10.0, 15.0, 4.0)], 2.0);

        let placed = &result.placed_aircraft[0];
        assert_eq!(placed.x, 2.0);
        assert_eq!(placed.y, 2.0);
        assert_eq!(placed.rotation, Rotation::Deg0);
        assert_eq!(result.utilization_percentage, 1);
        assert!(result.unplaced_aircraft.is_empty());
    }

    #[test]
    fn test_l_shaped_remainder_rejects_second_block() {
        let hangar = Hangar::new("Small", 10.0, 10.0, 20.0);
        let fleet = vec![jet("a", 8.0, 8.0, 5.0), jet("b", 8.0, 8.0, 5.0)];

        let result = optimize_placement(&hangar, &fleet, 0.0);

        assert_eq!(result.placed_aircraft.len(), 1);
        assert_eq!(result.placed_aircraft[0].id(), "a");
        assert_eq!(result.placed_aircraft[0].x, 0.0);
        assert_eq!(result.placed_aircraft[0].y, 0.0);
        assert_eq!(result.unplaced_aircraft.len(), 1);
        assert_eq!(result.unplaced_aircraft[0].id(), "b");
        assert_eq!(result.utilization_percentage, 64);
    }

    #[test]
    fn test_too_tall_is_rejected_regardless_of_floor() {
        let tall = jet("tall", 1.0, 1.0, 25.0);
        for (width, length, margin) in [(1000.0, 1000.0, 0.0), (5.0, 5.0, 2.0), (100.0, 150.0, 10.0)] {
            let hangar = Hangar::new("H", width, length, 20.0);
            let result = optimize_placement(&hangar, &[tall.clone()], margin);
            assert!(result.placed_aircraft.is_empty());
            assert_eq!(result.unplaced_aircraft, vec![tall.clone()]);
        }
    }

    #[test]
    fn test_empty_fleet() {
        let result = optimize_placement(&Hangar::default(), &[], 2.0);
        assert!(result.placed_aircraft.is_empty());
        assert!(result.unplaced_aircraft.is_empty());
        assert_eq!(result.utilization_percentage, 0);
    }

    #[test]
    fn test_fits_only_when_rotated() {
        let hangar = Hangar::new("Narrow", 10.0, 45.0, 20.0);
        let result = optimize_placement(&hangar, &[jet("long", 40.0, 5.0, 3.0)], 0.0);

        assert_eq!(result.placed_aircraft.len(), 1);
        let placed = &result.placed_aircraft[0];
        assert_eq!(placed.rotation, Rotation::Deg90);
        assert_eq!((placed.x, placed.y), (0.0, 0.0));
        let footprint = placed.footprint();
        assert_eq!(footprint.width(), 5.0);
        assert_eq!(footprint.length(), 40.0);
    }

    #[test]
    fn test_margin_forces_rotation() {
        // 10 m wide with a 2 m margin needs 14 columns; turned, it needs 10.
        let hangar = Hangar::new("Bay", 12.0, 40.0, 20.0);
        let fleet = vec![jet("a", 10.0, 6.0, 3.0), jet("b", 10.0, 6.0, 3.0)];

        let unmargined = optimize_placement(&hangar, &fleet[..1], 0.0);
        assert_eq!(unmargined.placed_aircraft[0].rotation, Rotation::Deg0);

        let result = optimize_placement(&hangar, &fleet, 2.0);
        assert_eq!(result.placed_aircraft.len(), 2);

        let first = &result.placed_aircraft[0];
        assert_eq!(first.rotation, Rotation::Deg90);
        assert_eq!((first.x, first.y), (2.0, 2.0));
        assert!(hangar.floor().contains(&first.expanded_footprint(2.0)));

        // The second block starts below the first 14-row block.
        let second = &result.placed_aircraft[1];
        assert_eq!(second.rotation, Rotation::Deg90);
        assert_eq!((second.x, second.y), (2.0, 16.0));
        assert!(!first
            .expanded_footprint(2.0)
            .overlaps(&second.expanded_footprint(2.0)));
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_largest_aircraft_placed_first() {
        let hangar = Hangar::new("H", 100.0, 100.0, 20.0);
        let fleet = vec![
            jet("small", 5.0, 5.0, 3.0),
            jet("large", 30.0, 40.0, 10.0),
            jet("medium", 10.0, 15.0, 4.0),
        ];

        let result = optimize_placement(&hangar, &fleet, 0.0);

        let ids: Vec<&str> = result.placed_aircraft.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["large", "medium", "small"]);
        assert_eq!((result.placed_aircraft[0].x, result.placed_aircraft[0].y), (0.0, 0.0));
        assert_eq!((result.placed_aircraft[1].x, result.placed_aircraft[1].y), (30.0, 0.0));
        assert_eq!((result.placed_aircraft[2].x, result.placed_aircraft[2].y), (40.0, 0.0));
    }

    #[test]
    fn test_unplaced_in_rejection_order() {
        // "wide" is too big for the floor, "tall" fails the height gate.
        let hangar = Hangar::new("H", 20.0, 20.0, 10.0);
        let fleet = vec![
            jet("tall", 5.0, 5.0, 12.0),
            jet("wide", 30.0, 30.0, 5.0),
            jet("fits", 10.0, 10.0, 5.0),
            jet("tall-big", 15.0, 15.0, 11.0),
        ];

        let result = optimize_placement(&hangar, &fleet, 0.0);

        let unplaced: Vec<&str> = result
            .unplaced_aircraft
            .iter()
            .map(|a| a.id())
            .collect();
        assert_eq!(unplaced, vec!["wide", "tall-big", "tall"]);
        assert_eq!(result.placed_aircraft.len(), 1);
    }

    #[test]
    fn test_equal_areas_keep_input_order() {
        let hangar = Hangar::new("H", 50.0, 50.0, 10.0);
        let fleet = vec![jet("first", 10.0, 20.0, 3.0), jet("second", 20.0, 10.0, 3.0)];

        let result = optimize_placement(&hangar, &fleet, 0.0);
        assert_eq!(result.placed_aircraft[0].id(), "first");
        assert_eq!(result.placed_aircraft[1].id(), "second");
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_degenerate_hangar_places_nothing() {
        let hangar = Hangar::new("Void", 0.4, 0.9, 20.0);
        let fleet = vec![jet("a", 1.0, 1.0, 1.0)];

        let result = optimize_placement(&hangar, &fleet, 0.0);
        assert!(result.placed_aircraft.is_empty());
        assert_eq!(result.unplaced_aircraft.len(), 1);
        assert_eq!(result.utilization_percentage, 0);
    }

    #[test]
    fn test_exact_fit_fills_floor() {
        let hangar = Hangar::new("H", 10.0, 10.0, 5.0);
        let result = optimize_placement(&hangar, &[jet("a", 10.0, 10.0, 5.0)], 0.0);
        assert_eq!(result.utilization_percentage, 100);
    }

    #[test]
    fn test_margin_blocks_wall_hugging() {
        let hangar = Hangar::new("H", 10.0, 10.0, 5.0);
        let result = optimize_placement(&hangar, &[jet("a", 10.0, 10.0, 5.0)], 1.0);
        assert!(result.placed_aircraft.is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let hangar = Hangar::new("H", 30.0, 30.0, 10.0);
        let fleet = vec![jet("a", 10.0, 10.0, 3.0), jet("b", 40.0, 40.0, 3.0)];
        let before = fleet.clone();

        let result = optimize_placement(&hangar, &fleet, 1.0);

        assert_eq!(fleet, before);
        assert_eq!(result.placed_aircraft[0].aircraft(), &before[0]);
        assert_eq!(result.unplaced_aircraft[0], before[1]);
    }
}
