use crate::errors::AppResult;
use crate::ui::render;

pub fn handle_guide() -> AppResult<()> {
    print!("{}", render::guide());
    Ok(())
}

pub fn handle_services() -> AppResult<()> {
    print!("{}", render::services());
    Ok(())
}
