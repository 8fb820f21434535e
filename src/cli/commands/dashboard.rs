use crate::config::Config;
use crate::core::app::StudioApp;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cfg: &Config, app: &StudioApp) -> AppResult<()> {
    print!("{}", render::dashboard(app, cfg));
    Ok(())
}
