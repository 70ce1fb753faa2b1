//! encode / decode / slug 命令

use colored::Colorize;
use serde_json::json;
use tracing::debug;

use super::super::CliError;
use crate::codec;

pub fn encode_share_id(share_id: &str, json: bool) -> Result<(), CliError> {
    let code = codec::try_encode(share_id)?;
    debug!("Encoded {} -> {}", share_id, code);

    if json {
        let out = json!({ "share_id": share_id, "code": code });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", code);
    }
    Ok(())
}

pub fn decode_code(code: &str, json: bool) -> Result<(), CliError> {
    let id = codec::default_codec().decode_id(code)?;

    if json {
        let out = json!({
            "code": code,
            "share_id": id.to_string(),
            "entity": id.entity(),
            "created_at": id.timestamp().to_datetime().map(|dt| dt.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", id);
    }
    Ok(())
}

pub fn slug(title: &str) -> Result<(), CliError> {
    let slug = codec::slugify(title);
    if slug.is_empty() {
        eprintln!("{}", "Title has no slug-able characters".yellow());
    } else {
        println!("{}", slug);
    }
    Ok(())
}
