use crate::core::app::StudioApp;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(app: &StudioApp) -> AppResult<()> {
    header("Portfolio");
    print!("{}", render::portfolio(app.portfolio()));
    Ok(())
}
