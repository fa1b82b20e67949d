//! Catalog browser callbacks.
//!
//! Handles: select_category, select_furniture

use std::rc::Rc;

use slint::ComponentHandle;

use crate::view::{refresh, AppContext};
use crate::AppWindow;

pub fn setup_catalog_callbacks(ui: &AppWindow, ctx: Rc<AppContext>) {
    setup_select_category(ui, ctx.clone());
    setup_select_furniture(ui, ctx);
}

fn setup_select_category(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_select_category(move |index| {
        let Some(ui) = ui_weak.upgrade() else { return };
        ctx.set_filter_index(index);
        refresh(&ui, &ctx);
    });
}

fn setup_select_furniture(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_select_furniture(move |id| {
        let Some(ui) = ui_weak.upgrade() else { return };
        match ctx.catalog.find_by_id(id.as_str()) {
            Some(definition) => ctx.session.borrow_mut().select_catalog_item(definition.clone()),
            None => tracing::warn!(id = %id, "unknown catalog id"),
        }
        refresh(&ui, &ctx);
    });
}
