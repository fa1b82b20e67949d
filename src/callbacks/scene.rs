//! Scene callbacks: place the chosen furniture or pick a placed item, and
//! re-project placed items when the scene is resized.

use std::rc::Rc;

use furniture_ar::geometry::{ScreenPoint, ScreenSize};
use furniture_ar::state::TapOutcome;
use slint::ComponentHandle;

use crate::view::{refresh, show_notice, AppContext};
use crate::AppWindow;

pub fn setup_scene_callbacks(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    let resize_ctx = ctx.clone();
    ui.on_scene_resized(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        refresh(&ui, &resize_ctx);
    });

    let ui_weak = ui.as_weak();
    ui.on_scene_tapped(move |x, y, width, height| {
        let Some(ui) = ui_weak.upgrade() else { return };
        let outcome = ctx
            .session
            .borrow_mut()
            .handle_tap(ScreenPoint::new(x, y), ScreenSize::new(width, height));

        match outcome {
            TapOutcome::Rejected(e) => show_notice(&ui, "Cannot Place", &e.to_string()),
            TapOutcome::Selected(id) => {
                tracing::debug!(placed_id = %id, "placed item selected");
                ui.set_show_controls(true);
            }
            TapOutcome::Placed(_) | TapOutcome::Deselected => {}
        }
        refresh(&ui, &ctx);
    });
}
