//! Integration tests for hangar-core.

use hangar_core::placement::{PlacedAircraft, PlacementStats, Rotation};
use hangar_core::result::{OptimizationResult, OptimizationSummary};
use hangar_core::{Aircraft, Config, Error, Hangar, Rect2D, AIRCRAFT_TYPES};

mod rect_tests {
    use super::*;

    #[test]
    fn test_adjacent_margin_footprints() {
        // Two 8 m aircraft with a 1 m margin, blocks touching at x = 10.
        let a = PlacedAircraft::new(Aircraft::new("a", "A", 8.0, 8.0, 3.0), 1.0, 1.0, Rotation::Deg0);
        let b = PlacedAircraft::new(Aircraft::new("b", "B", 8.0, 8.0, 3.0), 11.0, 1.0, Rotation::Deg0);

        assert!(!a.expanded_footprint(1.0).overlaps(&b.expanded_footprint(1.0)));
        assert!(a.expanded_footprint(1.5).overlaps(&b.expanded_footprint(1.5)));
    }

    #[test]
    fn test_floor_contains_expanded_footprint() {
        let hangar = Hangar::new("H", 20.0, 20.0, 5.0);
        let placed = PlacedAircraft::new(Aircraft::new("a", "A", 16.0, 4.0, 3.0), 2.0, 2.0, Rotation::Deg90);

        assert!(hangar.floor().contains(&placed.expanded_footprint(2.0)));
        assert!(!hangar.floor().contains(&placed.expanded_footprint(3.0)));
    }

    #[test]
    fn test_generic_scalar() {
        let r: Rect2D<f32> = Rect2D::from_origin(0.0, 0.0, 4.0, 2.0);
        assert!((r.width() * r.length() - 8.0).abs() < 1e-6);
    }
}

mod entity_tests {
    use super::*;

    #[test]
    fn test_every_preset_builds_a_valid_aircraft() {
        for (i, preset) in AIRCRAFT_TYPES.iter().enumerate() {
            let craft = Aircraft::from_type(format!("id-{i}"), "Test", preset.name).unwrap();
            assert!(craft.validate().is_ok(), "{}", preset.name);
            assert_eq!(craft.aircraft_type(), preset.name);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = Aircraft::new("a1", "A", -1.0, 1.0, 1.0).validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid aircraft: width of 'a1'"));

        let err = Config::new().with_safety_margin(-2.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_stats_and_summary_agree() {
        let result = OptimizationResult {
            placed_aircraft: vec![
                PlacedAircraft::new(Aircraft::new("a", "A", 10.0, 10.0, 3.0), 0.0, 0.0, Rotation::Deg0),
                PlacedAircraft::new(Aircraft::new("b", "B", 30.0, 5.0, 3.0), 10.0, 0.0, Rotation::Deg90),
            ],
            unplaced_aircraft: vec![],
            utilization_percentage: 25,
        };

        let stats: PlacementStats = result.placement_stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.rotated_count, 1);
        assert_eq!(stats.footprint_area, 250.0);

        let summary = OptimizationSummary::new(&Hangar::new("H", 40.0, 25.0, 10.0), &result);
        assert_eq!(summary.placed, stats.count);
        assert_eq!(summary.rotated, stats.rotated_count);
        assert_eq!(summary.floor_area, 1000.0);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_aircraft_json_field_names() {
        let craft = Aircraft::from_type("a1", "N1", "Light Propeller").unwrap();
        let value = serde_json::to_value(&craft).unwrap();
        assert_eq!(value["type"], "Light Propeller");
        assert_eq!(value["wingSpan"], 10.0);
        assert_eq!(value["color"], "#3B82F6");
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let craft: Aircraft = serde_json::from_str(
            r#"{"id": "a", "name": "A", "width": 1, "length": 2, "height": 3}"#,
        )
        .unwrap();
        assert_eq!(craft.aircraft_type(), "");
        assert_eq!(craft.wing_span(), 0.0);
        assert_eq!(craft.color(), "#3B82F6");
    }
}
