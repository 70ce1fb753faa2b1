//! link / resolve 命令

use colored::Colorize;
use tracing::debug;

use super::super::CliError;
use crate::config::get_config;
use crate::links::{LinkKind, Resolution, ShareLinkBuilder};

pub fn link(
    share_id: &str,
    title: Option<&str>,
    origin: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let config = get_config();
    let routes = config.links.route_table().map_err(|e| CliError::ConfigError(e.to_string()))?;
    let origin = origin.unwrap_or(config.links.origin.as_str());
    let builder = ShareLinkBuilder::new(origin, routes);

    let link = builder.try_build(share_id, title.unwrap_or_default())?;
    debug!("Built {:?} link: {}", link.kind, link.url);

    if json {
        println!("{}", serde_json::to_string_pretty(&link)?);
        return Ok(());
    }

    println!("{}", link.url);
    if link.kind == LinkKind::Literal {
        eprintln!(
            "{} {}",
            "Note:".yellow().bold(),
            "share id could not be compressed, using the literal id".yellow()
        );
    }
    Ok(())
}

pub fn resolve(route: &str, segment: &str, json: bool) -> Result<(), CliError> {
    let config = get_config();
    let routes = config.links.route_table().map_err(|e| CliError::ConfigError(e.to_string()))?;

    let Some((entity, resolution)) = routes.resolve_path(route, segment) else {
        return Err(CliError::CommandError(format!(
            "cannot resolve /{}/{}",
            route, segment
        )));
    };

    if json {
        let out = serde_json::json!({
            "entity": entity,
            "resolution": resolution,
            "target": config.links.render_target(entity, resolution.share_id()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", resolution.share_id());
    if let Resolution::Literal(_) = resolution {
        eprintln!("{}", "(literal share id, not a short code)".dimmed());
    }
    Ok(())
}
