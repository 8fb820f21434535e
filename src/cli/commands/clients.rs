use crate::config::Config;
use crate::core::app::StudioApp;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cfg: &Config, app: &StudioApp) -> AppResult<()> {
    header("Clients");
    print!("{}", render::clients(app.clients(), cfg));
    Ok(())
}
