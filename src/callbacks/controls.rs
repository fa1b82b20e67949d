//! Control panel callbacks for the selected placed item.
//!
//! Handles: scale_changed, rotation_changed, reset_transform, delete_selected
//!
//! A stale id (the item vanished between the event and its handling) is
//! logged and otherwise ignored.

use std::rc::Rc;

use slint::ComponentHandle;

use crate::view::{refresh, AppContext};
use crate::AppWindow;

/// Sets up all control-panel callbacks on the UI.
pub fn setup_control_callbacks(ui: &AppWindow, ctx: Rc<AppContext>) {
    setup_scale_changed(ui, ctx.clone());
    setup_rotation_changed(ui, ctx.clone());
    setup_reset_transform(ui, ctx.clone());
    setup_delete_selected(ui, ctx);
}

fn setup_scale_changed(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_scale_changed(move |value| {
        let Some(ui) = ui_weak.upgrade() else { return };
        {
            let mut session = ctx.session.borrow_mut();
            let Some(id) = session.selected_placed_id().cloned() else { return };
            if let Err(e) = session.set_scale(&id, value) {
                tracing::debug!(error = %e, "scale change ignored");
            }
        }
        refresh(&ui, &ctx);
    });
}

fn setup_rotation_changed(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_rotation_changed(move |value| {
        let Some(ui) = ui_weak.upgrade() else { return };
        {
            let mut session = ctx.session.borrow_mut();
            let Some(id) = session.selected_placed_id().cloned() else { return };
            if let Err(e) = session.set_rotation(&id, value) {
                tracing::debug!(error = %e, "rotation change ignored");
            }
        }
        refresh(&ui, &ctx);
    });
}

fn setup_reset_transform(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_reset_transform(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        {
            let mut session = ctx.session.borrow_mut();
            let Some(id) = session.selected_placed_id().cloned() else { return };
            if let Err(e) = session.reset_transform(&id) {
                tracing::debug!(error = %e, "reset ignored");
            }
        }
        refresh(&ui, &ctx);
    });
}

fn setup_delete_selected(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_delete_selected(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        {
            let mut session = ctx.session.borrow_mut();
            let Some(id) = session.selected_placed_id().cloned() else { return };
            session.remove(&id);
        }
        refresh(&ui, &ctx);
    });
}
