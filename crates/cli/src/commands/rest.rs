use anyhow::Result;

use crate::config::CliConfig;
use crate::session;

pub fn execute(config: &CliConfig) -> Result<()> {
    let mut runtime = session::open(config)?;
    let healed = runtime.rest()?;
    println!("{healed} creatures rested to full health");
    Ok(())
}
