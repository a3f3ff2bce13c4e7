//! Item placement
//!
//! Scatters items uniformly inside the usable rectangle of the drawer. Items
//! may overlap; there is no collision pass, so placement stays O(n).

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Bounds, PlacedItem};
use crate::catalog::Item;
use crate::consts::FULL_TURN_DEGREES;
use crate::error::PlaceError;

/// Rectangle of legal item centres, centre-origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlacementArea {
    /// Shrink `bounds` by padding plus half the footprint on every side
    pub fn new(bounds: Bounds, footprint: f32, padding: f32) -> Result<Self, PlaceError> {
        bounds.validate()?;

        let inset = Vec2::splat(padding + footprint * 0.5);
        let half = bounds.half_extents();
        let min = -half + inset;
        let max = half - inset;

        if min.x > max.x || min.y > max.y {
            return Err(PlaceError::DegenerateBounds {
                width: bounds.width,
                height: bounds.height,
                footprint,
                padding,
            });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

/// Assign every item an independent random position and rotation
///
/// Output order matches input order.
pub fn place<R>(
    items: &[Item],
    bounds: Bounds,
    footprint: f32,
    padding: f32,
    rng: &mut R,
) -> Result<Vec<PlacedItem>, PlaceError>
where
    R: RandomSource + ?Sized,
{
    let area = PlacementArea::new(bounds, footprint, padding)?;

    let placed = items
        .iter()
        .map(|item| {
            let x = rng.float_in(area.min.x, area.max.x);
            let y = rng.float_in(area.min.y, area.max.y);
            // Inclusive draw can land exactly on 360
            let rotation_degrees = rng.float_in(0.0, FULL_TURN_DEGREES) % FULL_TURN_DEGREES;
            PlacedItem {
                item: item.clone(),
                position: Vec2::new(x, y),
                rotation_degrees,
            }
        })
        .collect();

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::ItemCatalog;
    use crate::sim::rng::RngState;

    #[test]
    fn test_area_from_original_drawer_dimensions() {
        // 200x200 drawer, 80 footprint, 50 padding leaves a 20x20 centre box
        let area = PlacementArea::new(Bounds::new(200.0, 200.0).unwrap(), 80.0, 50.0).unwrap();
        assert_eq!(area.min, Vec2::new(-10.0, -10.0));
        assert_eq!(area.max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_exact_fit_is_a_point() {
        let area = PlacementArea::new(Bounds::new(180.0, 180.0).unwrap(), 80.0, 50.0).unwrap();
        assert_eq!(area.min, Vec2::ZERO);
        assert_eq!(area.max, Vec2::ZERO);

        let catalog = ItemCatalog::drawer();
        let mut rng = RngState::new(3).to_rng();
        let placed = place(
            catalog.items(),
            Bounds::new(180.0, 180.0).unwrap(),
            80.0,
            50.0,
            &mut rng,
        )
        .unwrap();
        assert!(placed.iter().all(|p| p.position == Vec2::ZERO));
    }

    #[test]
    fn test_degenerate_bounds() {
        // Wide enough, too short
        let err = PlacementArea::new(Bounds::new(400.0, 179.0).unwrap(), 80.0, 50.0).unwrap_err();
        assert!(matches!(err, PlaceError::DegenerateBounds { .. }));

        let catalog = ItemCatalog::drawer();
        let mut rng = RngState::new(3).to_rng();
        let bounds = Bounds {
            width: 100.0,
            height: 100.0,
        };
        assert!(place(catalog.items(), bounds, 80.0, 50.0, &mut rng).is_err());
    }

    #[test]
    fn test_invalid_bounds_rejected_before_area() {
        let bounds = Bounds {
            width: -300.0,
            height: 300.0,
        };
        assert!(matches!(
            PlacementArea::new(bounds, 80.0, 50.0),
            Err(PlaceError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_order_preserved_and_reproducible() {
        let catalog = ItemCatalog::drawer();
        let bounds = Bounds::new(800.0, 600.0).unwrap();
        let a = place(catalog.items(), bounds, 80.0, 50.0, &mut RngState::new(11).to_rng()).unwrap();
        let b = place(catalog.items(), bounds, 80.0, 50.0, &mut RngState::new(11).to_rng()).unwrap();

        assert_eq!(a, b);
        let ids: Vec<_> = a.iter().map(|p| p.id()).collect();
        let expected: Vec<_> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);
    }

    proptest! {
        #[test]
        fn placements_stay_inside_area(
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            footprint in 1.0f32..200.0,
            padding in 0.0f32..100.0,
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::new(width, height).unwrap();
            let Ok(area) = PlacementArea::new(bounds, footprint, padding) else {
                return Ok(());
            };
            let catalog = ItemCatalog::drawer();
            let mut rng = RngState::new(seed).to_rng();
            let placed = place(catalog.items(), bounds, footprint, padding, &mut rng).unwrap();

            prop_assert_eq!(placed.len(), catalog.len());
            for p in &placed {
                prop_assert!(area.contains(p.position), "{:?} outside {:?}", p.position, area);
                prop_assert!(p.rotation_degrees >= 0.0 && p.rotation_degrees < 360.0);
            }
        }
    }
}
