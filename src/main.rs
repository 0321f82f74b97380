use anyhow::{Context, Result};

use rowmap::config::RunConfig;
use rowmap::{input, layout};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rowmap=info".parse()?),
        )
        .init();

    let config = RunConfig::from_env()?;
    tracing::info!(
        "rowmap starting: input={}, rows={}",
        config.input.display(),
        config.rows
    );

    let items = input::load_items(&config.input)?;
    let map = layout::pack(&items, config.rows).with_context(|| {
        format!(
            "nothing to pack ({} valid items, {} rows)",
            items.len(),
            config.rows
        )
    })?;

    let json = if config.pretty {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };
    println!("{}", json);

    Ok(())
}
