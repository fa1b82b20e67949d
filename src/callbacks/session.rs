//! Session callbacks.
//!
//! Handles: grant_permission, start_session, exit_session

use std::rc::Rc;
use std::time::Instant;

use furniture_ar::surface::DetectionTicket;
use slint::ComponentHandle;

use crate::view::{refresh, show_notice, AppContext};
use crate::AppWindow;

/// Sets up all session-related callbacks on the UI.
pub fn setup_session_callbacks(ui: &AppWindow, ctx: Rc<AppContext>) {
    setup_grant_permission(ui, ctx.clone());
    setup_start_session(ui, ctx.clone());
    setup_exit_session(ui, ctx);
}

fn setup_grant_permission(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_grant_permission(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        ctx.session.borrow_mut().set_permission(true);
        tracing::info!("camera permission granted");
        refresh(&ui, &ctx);
    });
}

fn setup_start_session(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_start_session(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        let started = ctx.session.borrow_mut().start(Instant::now());
        match started {
            Ok(ticket) => {
                schedule_surface_detection(&ui, &ctx, ticket);
                ui.set_show_controls(true);
                ui.set_selector_open(false);
            }
            Err(e) => show_notice(&ui, "Permission Required", &e.to_string()),
        }
        refresh(&ui, &ctx);
    });
}

fn setup_exit_session(ui: &AppWindow, ctx: Rc<AppContext>) {
    let ui_weak = ui.as_weak();
    ui.on_exit_session(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        // Stop the timer first so a detection can never land on a stopped session
        ctx.detection_timer.stop();
        ctx.session.borrow_mut().stop();
        ui.set_selector_open(false);
        ui.set_confirm_delete(false);
        refresh(&ui, &ctx);
    });
}

/// Arm the single-shot timer that delivers `ticket` after the detection delay.
fn schedule_surface_detection(ui: &AppWindow, ctx: &Rc<AppContext>, ticket: DetectionTicket) {
    let delay = ctx.session.borrow().surface().delay();
    let ui_weak = ui.as_weak();
    let ctx_weak = Rc::downgrade(ctx);
    ctx.detection_timer.start(slint::TimerMode::SingleShot, delay, move || {
        let (Some(ui), Some(ctx)) = (ui_weak.upgrade(), ctx_weak.upgrade()) else {
            return;
        };
        let detected = ctx.session.borrow_mut().surface_detected(ticket);
        if detected {
            show_notice(
                &ui,
                "Surface Detected",
                "You can now place furniture on the detected surface",
            );
        }
        refresh(&ui, &ctx);
    });
}
