//! # Contour Model Tests
//!
//! Hierarchy validation and child lookup.

use super::*;

fn pts(raw: &[[i32; 2]]) -> Vec<IVec2> {
    raw.iter().copied().map(IVec2::from).collect()
}

fn triangle() -> Vec<IVec2> {
    pts(&[[3, 3], [6, 3], [4, 6]])
}

#[test]
fn test_new_exposes_contours_in_order() {
    let set = ContourSet::new(10, 12, vec![(triangle(), None), (triangle(), Some(0))]).unwrap();

    assert_eq!(set.width(), 10);
    assert_eq!(set.height(), 12);
    assert_eq!(set.len(), 2);
    assert_eq!(set.contour(1).unwrap().index(), 1);
    assert_eq!(set.contour(1).unwrap().parent(), Some(0));
    assert!(set.contour(0).unwrap().is_top_level());
    assert_eq!(set.contour(0).unwrap().points(), triangle().as_slice());
    assert!(set.contour(2).is_none());
}

#[test]
fn test_holes_of_preserves_original_order() {
    let set = ContourSet::new(
        20,
        20,
        vec![
            (triangle(), None),
            (triangle(), Some(2)),
            (triangle(), None),
            (triangle(), Some(0)),
            (triangle(), Some(2)),
        ],
    )
    .unwrap();

    assert_eq!(set.holes_of(0), &[3]);
    assert_eq!(set.holes_of(2), &[1, 4]);
    assert!(set.holes_of(1).is_empty());
    assert!(set.holes_of(99).is_empty());

    let top: Vec<usize> = set.top_level().map(Contour::index).collect();
    assert_eq!(top, vec![0, 2]);
}

#[test]
fn test_empty_set_is_valid() {
    let set = ContourSet::new(4, 4, Vec::new()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.top_level().count(), 0);
}

#[test]
fn test_rejects_degenerate_frame() {
    assert_eq!(
        ContourSet::new(1, 10, Vec::new()).unwrap_err(),
        SilhouetteError::InvalidDimensions { width: 1, height: 10 }
    );
    assert!(ContourSet::new(10, 0, Vec::new()).is_err());
}

#[test]
fn test_rejects_parent_out_of_range() {
    let err = ContourSet::new(10, 10, vec![(triangle(), Some(5))]).unwrap_err();
    assert_eq!(
        err,
        SilhouetteError::MalformedHierarchy(HierarchyFault::ParentOutOfRange {
            contour: 0,
            parent: 5,
            len: 1,
        })
    );
}

#[test]
fn test_rejects_self_parent() {
    let err = ContourSet::new(10, 10, vec![(triangle(), Some(0))]).unwrap_err();
    assert_eq!(
        err,
        SilhouetteError::MalformedHierarchy(HierarchyFault::ParentCycle { contour: 0 })
    );
}

#[test]
fn test_rejects_two_contour_cycle() {
    let err = ContourSet::new(10, 10, vec![(triangle(), Some(1)), (triangle(), Some(0))])
        .unwrap_err();
    assert!(matches!(
        err,
        SilhouetteError::MalformedHierarchy(HierarchyFault::ParentCycle { .. })
    ));
}

#[test]
fn test_rejects_cycle_reached_from_a_tail() {
    // 0 -> 1 -> 2 -> 1
    let err = ContourSet::new(
        10,
        10,
        vec![(triangle(), Some(1)), (triangle(), Some(2)), (triangle(), Some(1))],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SilhouetteError::MalformedHierarchy(HierarchyFault::ParentCycle { .. })
    ));
}

#[test]
fn test_rejects_third_nesting_level() {
    // 0 is top-level, 1 is a hole of 0, 2 claims to sit inside the hole
    let err = ContourSet::new(
        10,
        10,
        vec![(triangle(), None), (triangle(), Some(0)), (triangle(), Some(1))],
    )
    .unwrap_err();
    assert_eq!(
        err,
        SilhouetteError::MalformedHierarchy(HierarchyFault::NestingTooDeep {
            contour: 2,
            depth: 3,
        })
    );
}

#[test]
fn test_children_listed_before_parent_are_accepted() {
    let set = ContourSet::new(10, 10, vec![(triangle(), Some(1)), (triangle(), None)]).unwrap();
    assert_eq!(set.holes_of(1), &[0]);
}

// =============================================================================
// RECORD CONVERSION
// =============================================================================

#[test]
fn test_record_sentinel_maps_to_top_level() {
    let record = ContourSetRecord {
        width: 10,
        height: 10,
        contours: vec![
            ContourRecord {
                points: vec![[3, 3], [6, 3], [4, 6]],
                parent: NO_PARENT,
            },
            ContourRecord {
                points: vec![[4, 4], [5, 4], [5, 5]],
                parent: 0,
            },
        ],
    };

    let set = ContourSet::try_from(record.clone()).unwrap();
    assert!(set.contour(0).unwrap().is_top_level());
    assert_eq!(set.holes_of(0), &[1]);
    assert_eq!(set.to_record(), record);
}

#[test]
fn test_record_rejects_negative_parent_other_than_sentinel() {
    let record = ContourSetRecord {
        width: 10,
        height: 10,
        contours: vec![ContourRecord {
            points: vec![[3, 3], [6, 3], [4, 6]],
            parent: -7,
        }],
    };

    assert_eq!(
        ContourSet::try_from(record).unwrap_err(),
        SilhouetteError::MalformedHierarchy(HierarchyFault::ParentOutOfRange {
            contour: 0,
            parent: -7,
            len: 1,
        })
    );
}

#[test]
fn test_record_parses_tracer_json() {
    let json = r#"{
        "width": 8,
        "height": 6,
        "contours": [
            { "points": [[2, 2], [2, 4], [5, 4], [5, 2]], "parent": -1 },
            { "points": [[3, 3], [4, 3], [4, 3]] }
        ]
    }"#;

    let record: ContourSetRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.contours[1].parent, NO_PARENT);

    let set = ContourSet::try_from(record).unwrap();
    assert_eq!(set.top_level().count(), 2);
    assert_eq!(set.contour(0).unwrap().points()[3], IVec2::new(5, 2));
}
