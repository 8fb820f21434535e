use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::StudioApp;
use crate::errors::AppResult;
use crate::ui::render;

/// Fill the estimator form from the command line and print the price.
pub fn handle(cmd: &Commands, cfg: &Config, app: &mut StudioApp) -> AppResult<()> {
    if let Commands::Estimate {
        size,
        complexity,
        hours,
        rate,
    } = cmd
    {
        app.edit_estimate("size", size)?;
        app.edit_estimate("complexity", complexity)?;
        app.edit_estimate("hours", &hours.to_string())?;
        if let Some(r) = rate {
            app.edit_estimate("rate", &r.to_string())?;
        }

        print!(
            "{}",
            render::estimate(app.estimate_draft(), app.calculated_price(), cfg)
        );
    }
    Ok(())
}
