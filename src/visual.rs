//! Flat visual style for placed furniture: colored boxes with an emoji.

use crate::catalog::Category;
use crate::geometry::ScreenMapping;
use crate::state::PlacedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Fill color as `0xRRGGBB`.
    pub fill: u32,
    pub border: u32,
    pub icon: &'static str,
}

pub fn category_style(category: Category) -> CategoryStyle {
    match category {
        Category::Chair => CategoryStyle { fill: 0xFFE4B5, border: 0xDAA520, icon: "🪑" },
        Category::Table => CategoryStyle { fill: 0xDEB887, border: 0xCD853F, icon: "🪑" },
        Category::Sofa => CategoryStyle { fill: 0xF5DEB3, border: 0xDEB887, icon: "🛋️" },
        Category::Desk => CategoryStyle { fill: 0xD2B48C, border: 0xA0522D, icon: "🪑" },
        Category::Bed => CategoryStyle { fill: 0xFAEBD7, border: 0xD2B48C, icon: "🛏️" },
        Category::Cabinet => CategoryStyle { fill: 0xE6E6FA, border: 0x9370DB, icon: "🗄️" },
        Category::Decoration => CategoryStyle { fill: 0xFFF8DC, border: 0xF0E68C, icon: "🪴" },
    }
}

/// Side of the square drawn for an item, in pixels.
pub fn footprint_px(item: &PlacedItem, mapping: &ScreenMapping) -> f32 {
    let d = item.definition.dimensions;
    mapping.meters_to_pixels(d.width.max(d.depth)) * item.uniform_scale()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::geometry::Vec3;
    use crate::state::PlacedId;

    #[test]
    fn footprint_uses_larger_floor_side_and_scale() {
        let catalog = Catalog::bundled().unwrap();
        // Queen Bed: 1.53 x 2.03 floor footprint
        let bed = catalog.find_by_id("bed_queen_001").unwrap().clone();
        let mut item = PlacedItem::new(PlacedId::new("1"), bed, Vec3::ZERO, 0);
        let mapping = ScreenMapping::default();
        assert!((footprint_px(&item, &mapping) - 203.0).abs() < 1e-3);

        item.scale = Vec3::splat(0.5);
        assert!((footprint_px(&item, &mapping) - 101.5).abs() < 1e-3);
    }

    #[test]
    fn every_category_has_an_icon() {
        for category in Category::ALL {
            assert!(!category_style(category).icon.is_empty());
        }
        assert_eq!(category_style(Category::Bed).icon, "🛏️");
    }
}
