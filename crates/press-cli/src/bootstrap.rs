use anyhow::Context;
use press_config::PressConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PressConfig> {
    let mut config = PressConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut PressConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(data_dir) = &flags.data_dir {
        config.store.data_dir.clone_from(data_dir);
        config.store.validate()?;
    }
    Ok(())
}
