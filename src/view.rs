//! Shared application context and the state-to-window sync.
//!
//! Every callback mutates `SessionState` and then calls [`refresh`], which
//! re-reads the whole state and pushes it into the window.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use furniture_ar::catalog::{Catalog, Category, CategoryFilter};
use furniture_ar::geometry::ScreenSize;
use furniture_ar::state::SessionState;
use furniture_ar::visual::{category_style, footprint_px};
use slint::VecModel;

use crate::utils::{format_details, format_price, icon_for, to_color};
use crate::{AppWindow, CatalogEntry, PlacedView};

pub struct AppContext {
    pub session: RefCell<SessionState>,
    pub catalog: Catalog,
    /// Index 0 is "All", then the catalog's categories in order.
    pub categories: Vec<Category>,
    pub filter: Cell<CategoryFilter>,
    pub placed_model: Rc<VecModel<PlacedView>>,
    pub catalog_model: Rc<VecModel<CatalogEntry>>,
    pub detection_timer: slint::Timer,
    /// Revision and scene size the placed items were last drawn for.
    last_drawn: Cell<Option<(u64, ScreenSize)>>,
}

impl AppContext {
    pub fn new(session: SessionState, catalog: Catalog) -> Self {
        let categories = catalog.categories();
        Self {
            session: RefCell::new(session),
            catalog,
            categories,
            filter: Cell::new(CategoryFilter::All),
            placed_model: Rc::new(VecModel::default()),
            catalog_model: Rc::new(VecModel::default()),
            detection_timer: slint::Timer::default(),
            last_drawn: Cell::new(None),
        }
    }

    pub fn category_labels(&self) -> Vec<slint::SharedString> {
        std::iter::once("All".into())
            .chain(self.categories.iter().map(|c| c.label().into()))
            .collect()
    }

    pub fn filter_index(&self) -> i32 {
        match self.filter.get() {
            CategoryFilter::All => 0,
            CategoryFilter::Only(c) => self
                .categories
                .iter()
                .position(|&k| k == c)
                .map(|i| i as i32 + 1)
                .unwrap_or(0),
        }
    }

    pub fn set_filter_index(&self, index: i32) {
        let filter = match usize::try_from(index) {
            Ok(i) if i >= 1 && i <= self.categories.len() => CategoryFilter::Only(self.categories[i - 1]),
            _ => CategoryFilter::All,
        };
        self.filter.set(filter);
    }
}

pub fn scene_size(ui: &AppWindow) -> ScreenSize {
    ScreenSize::new(ui.get_scene_width(), ui.get_scene_height())
}

pub fn show_notice(ui: &AppWindow, title: &str, text: &str) {
    ui.set_notice_title(title.into());
    ui.set_notice_text(text.into());
    ui.set_show_notice(true);
}

/// Push the current state into the window.
pub fn refresh(ui: &AppWindow, ctx: &AppContext) {
    let session = ctx.session.borrow();
    let screen = scene_size(ui);

    ui.set_has_permission(session.permission_granted());
    ui.set_session_active(session.is_active());
    ui.set_surface_detected(session.has_surface());
    ui.set_instruction(session.instruction().into());
    ui.set_selected_furniture_name(
        session
            .selected_catalog_item()
            .map(|d| d.name.as_str())
            .unwrap_or_default()
            .into(),
    );

    let selected_catalog_id = session.selected_catalog_item_id();
    let entries: Vec<CatalogEntry> = ctx
        .catalog
        .filter(ctx.filter.get())
        .into_iter()
        .map(|d| CatalogEntry {
            id: d.id.as_str().into(),
            name: d.name.as_str().into(),
            icon: icon_for(d).into(),
            details: format_details(d).into(),
            price: format_price(d.price).into(),
            selected: selected_catalog_id == Some(d.id.as_str()),
        })
        .collect();
    ctx.catalog_model.set_vec(entries);
    ui.set_active_category(ctx.filter_index());

    match session.selected_placed_item() {
        Some(item) => {
            ui.set_has_selection(true);
            ui.set_selected_name(item.name().into());
            ui.set_selected_scale(item.uniform_scale());
            ui.set_selected_rotation(item.yaw());
            ui.set_scale_label(format!("Scale: {:.1}x", item.uniform_scale()).into());
            ui.set_rotation_label(format!("Rotation: {}°", item.yaw().round()).into());
        }
        None => {
            ui.set_has_selection(false);
            ui.set_confirm_delete(false);
        }
    }

    if !mark_drawn(&ctx.last_drawn, session.revision(), screen) {
        return;
    }

    let store = session.store();
    let selected = session.selected_placed_id();
    let views: Vec<PlacedView> = session
        .placed_items()
        .iter()
        .map(|item| {
            let center = store.project(item, screen);
            let style = category_style(item.category());
            PlacedView {
                placed_id: item.placed_id.as_str().into(),
                name: item.name().into(),
                icon: style.icon.into(),
                fill: to_color(style.fill),
                border: to_color(style.border),
                x: center.x,
                y: center.y,
                size: footprint_px(item, store.mapping()),
                label: format!("{:.1}x · {}°", item.uniform_scale(), item.yaw().round()).into(),
                selected: selected == Some(&item.placed_id),
            }
        })
        .collect();
    ctx.placed_model.set_vec(views);
}

/// Record `(revision, screen)` as drawn. Returns false when it already was,
/// so a resize alone still forces the placed items to be re-projected.
fn mark_drawn(last: &Cell<Option<(u64, ScreenSize)>>, revision: u64, screen: ScreenSize) -> bool {
    let drawn = Some((revision, screen));
    if last.get() == drawn {
        return false;
    }
    last.set(drawn);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraws_on_new_revision_or_resize_only() {
        let last = Cell::new(None);
        let portrait = ScreenSize::new(400.0, 800.0);
        let landscape = ScreenSize::new(800.0, 400.0);

        assert!(mark_drawn(&last, 1, portrait));
        assert!(!mark_drawn(&last, 1, portrait));
        assert!(mark_drawn(&last, 1, landscape));
        assert!(!mark_drawn(&last, 1, landscape));
        assert!(mark_drawn(&last, 2, landscape));
    }
}
