//! `fmeta get <uri>` – resolve one reference through the bridge.

use anyhow::Result;
use fmeta_core::bridge::{file_meta, ModuleRegistry};

pub async fn run_get(registry: &ModuleRegistry, uri: &str, pretty: bool) -> Result<()> {
    let value = registry
        .dispatch(file_meta::CAPABILITY, file_meta::OP_GET_META, uri.to_string())
        .await
        .map_err(|err| anyhow::anyhow!("{}: {}", err.code(), err))?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}
