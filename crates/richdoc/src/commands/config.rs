//! config command - show the effective configuration

use crate::context::{ConfigSource, Context};
use anyhow::Result;

pub fn run(ctx: &Context) -> Result<()> {
    let source = match &ctx.config_source {
        ConfigSource::File(path) => format!("# {}", path.display()),
        ConfigSource::Defaults => "# defaults".to_string(),
    };
    let toml = ctx.converter.config().to_toml_string()?;

    ctx.emit(&format!("{source}\n{}", toml.trim_end()))
}
