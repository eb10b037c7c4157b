use anyhow::{anyhow, bail, Context, Result};
use camera_facing::{
    facing_mode_pattern, ChooserVariant, DeviceSelector, FacingMode, SelectorConfig,
    StaticMediaDevices,
};
use std::env;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

const USAGE: &str = "Usage: camera-facing <command> [args]

Commands:
  resolve <devices.json|-> [--facing <mode>] [--camera-id <s>] [--variant <v>] [--config <path>] [--json]
  pattern <facing-mode>
  config [--path <path>] [--init]
  version";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "resolve" => cmd_resolve(&args).await,
        "pattern" => cmd_pattern(&args),
        "config" => cmd_config(&args),
        "version" | "--version" | "-V" => {
            println!("{} {}", camera_facing::NAME, camera_facing::VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}\n\n{}", command, USAGE);
            std::process::exit(1);
        }
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

/// Load the effective configuration and start logging with its level.
///
/// Load failures are returned, never replaced by defaults, so a broken
/// `camera-facing.toml` stops the command before logging is needed.
fn load_config(path: Option<PathBuf>) -> Result<SelectorConfig> {
    let path = path.unwrap_or_else(SelectorConfig::default_path);
    let config = SelectorConfig::load_effective(Some(&path))
        .with_context(|| format!("loading config {:?}", path))?;

    camera_facing::init_logging_with_filter(&config.logging.level);
    log::debug!("Using configuration {:?} (exists: {})", path, path.exists());
    Ok(config)
}

async fn cmd_resolve(args: &[String]) -> Result<()> {
    // resolve <devices.json|-> [--facing <mode>] [--camera-id <s>] [--variant <v>] [--config <path>] [--json]
    let mut source = None;
    // No --facing means an absent mode: front-facing intent without the `user` tie-break
    let mut facing = FacingMode::from("");
    let mut camera_id = None;
    let mut variant = None;
    let mut config_path = None;
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--facing" => facing = FacingMode::from(flag_value(args, &mut i, "--facing")?),
            "--camera-id" => camera_id = Some(flag_value(args, &mut i, "--camera-id")?.to_string()),
            "--variant" => {
                variant = Some(flag_value(args, &mut i, "--variant")?.parse::<ChooserVariant>()?)
            }
            "--config" => config_path = Some(PathBuf::from(flag_value(args, &mut i, "--config")?)),
            "--json" => json = true,
            other => {
                if source.is_none() {
                    source = Some(other.to_string());
                } else {
                    bail!("unexpected argument: {}", other);
                }
            }
        }
        i += 1;
    }

    let mut config = load_config(config_path)?;

    if let Some(camera_id) = camera_id {
        config.selection.camera_id = camera_id;
    }
    if let Some(variant) = variant {
        config.selection.variant = variant;
    }

    let source = source.ok_or_else(|| anyhow!("device list path (or '-') required"))?;
    let devices = if source == "-" {
        let mut contents = String::new();
        tokio::io::stdin()
            .read_to_string(&mut contents)
            .await
            .context("reading device list from stdin")?;
        StaticMediaDevices::from_json_str(&contents)?
    } else {
        StaticMediaDevices::from_json_file(&source)?
    };

    let selector = DeviceSelector::from_config(devices, &config);
    let device_id = selector.resolve(&facing).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "deviceId": device_id,
                "facingMode": facing,
                "cameraId": selector.camera_id(),
                "variant": config.selection.variant,
            })
        );
    } else {
        println!("{}", device_id);
    }
    Ok(())
}

fn cmd_pattern(args: &[String]) -> Result<()> {
    let mode = args
        .get(2)
        .ok_or_else(|| anyhow!("Usage: camera-facing pattern <facing-mode>"))?;
    println!("{}", facing_mode_pattern(&FacingMode::from(mode.as_str())).as_str());
    Ok(())
}

fn cmd_config(args: &[String]) -> Result<()> {
    let mut path = None;
    let mut init = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--path" => path = Some(PathBuf::from(flag_value(args, &mut i, "--path")?)),
            "--init" => init = true,
            other => bail!("unexpected argument: {}", other),
        }
        i += 1;
    }

    if init {
        let path = path.unwrap_or_else(SelectorConfig::default_path);
        if path.exists() {
            bail!("{:?} already exists", path);
        }
        SelectorConfig::default().save_to_file(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
