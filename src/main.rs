use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use matchday_demo::api_client::ApiClient;
use matchday_demo::config::ClientConfig;

const USAGE: &str = "usage: matchday_demo [--demo] [--backend=URL] <get|post> <path> [json-body]";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = ClientConfig::from_env();
    let mut positional = Vec::new();
    for arg in &args {
        if arg == "--demo" {
            config.demo_mode = true;
        } else if let Some(url) = arg.strip_prefix("--backend=") {
            let trimmed = url.trim();
            config.backend_url = (!trimmed.is_empty()).then(|| trimmed.to_string());
        } else if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            return Ok(());
        } else {
            positional.push(arg.as_str());
        }
    }

    let [verb, path, rest @ ..] = positional.as_slice() else {
        return Err(anyhow!(USAGE));
    };
    let body = match rest.first() {
        Some(raw) => Some(serde_json::from_str::<Value>(raw).context("invalid json body")?),
        None => None,
    };

    let client = ApiClient::new(config);
    let result = match verb.to_ascii_lowercase().as_str() {
        "get" => client.get(path),
        "post" => client.post(path, body.as_ref()),
        other => Err(anyhow!("unknown verb {other}; {USAGE}")),
    };

    for line in client.drain_logs() {
        eprintln!("{line}");
    }
    let value = result?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
