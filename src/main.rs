slint::include_modules!();

mod callbacks;
mod utils;
mod view;

use std::path::PathBuf;
use std::rc::Rc;

use furniture_ar::catalog::load_catalog;
use furniture_ar::config::load_config;
use furniture_ar::error::CatalogError;
use furniture_ar::state::{SessionState, ROTATION_PRESETS, SCALE_PRESETS};
use tracing_subscriber::EnvFilter;

use callbacks::catalog::setup_catalog_callbacks;
use callbacks::controls::setup_control_callbacks;
use callbacks::scene::setup_scene_callbacks;
use callbacks::session::setup_session_callbacks;
use utils::{rotation_presets, scale_presets};
use view::{refresh, AppContext};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Platform(#[from] slint::PlatformError),
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional config path as first arg, otherwise the per-user config file.
    let config_arg = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_arg.as_deref());
    let catalog = load_catalog(config.catalog.file.as_deref())?;
    tracing::info!(items = catalog.len(), "catalog ready");

    let session = SessionState::from_config(&config);
    let bounds = session.store().scale_bounds();
    let ctx = Rc::new(AppContext::new(session, catalog));

    let ui = AppWindow::new()?;
    ui.set_placed_items(ctx.placed_model.clone().into());
    ui.set_catalog_entries(ctx.catalog_model.clone().into());
    ui.set_categories(Rc::new(slint::VecModel::from(ctx.category_labels())).into());
    ui.set_min_scale(bounds.min());
    ui.set_max_scale(bounds.max());
    ui.set_scale_presets(Rc::new(slint::VecModel::from(scale_presets(&SCALE_PRESETS))).into());
    ui.set_rotation_presets(Rc::new(slint::VecModel::from(rotation_presets(&ROTATION_PRESETS))).into());

    setup_session_callbacks(&ui, ctx.clone());
    setup_catalog_callbacks(&ui, ctx.clone());
    setup_scene_callbacks(&ui, ctx.clone());
    setup_control_callbacks(&ui, ctx.clone());

    refresh(&ui, &ctx);

    ui.run()?;
    Ok(())
}
