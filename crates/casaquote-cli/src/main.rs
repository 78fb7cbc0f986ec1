// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod report;

use anyhow::{Context, Result, anyhow, bail};
use casaquote_app::validation::{check_area_bounds, parse_custom_area};
use casaquote_app::{Catalog, EstimateRequest, MessageKind, PageContext, deep_link, message_text};
use casaquote_pricing::{compute_estimate, quick_estimate, share_message};
use clap::{Args, CommandFactory, Parser, Subcommand};
use config::Config;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "casaquote", version, about = "Interior design cost estimator")]
struct Cli {
    /// Use a specific config file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print the resolved config path and exit
    #[arg(long)]
    print_config_path: bool,

    /// Print a v1 config template and exit
    #[arg(long)]
    print_example_config: bool,

    /// Validate the config file and exit
    #[arg(long)]
    check: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Price a property with a room selection
    Estimate(EstimateArgs),

    /// Headline price for a category with its default rooms
    Quick {
        /// Property size key (1bhk, 2bhk, 3bhk)
        property: String,

        #[arg(long, default_value = "premium")]
        package: String,

        #[arg(long)]
        json: bool,
    },

    /// Show property sizes, packages and room prices
    Catalog {
        #[arg(long)]
        json: bool,
    },

    /// Print a WhatsApp chat link for a canned message
    Whatsapp {
        /// consultation, quote, 1bhk, 2bhk, 3bhk, designer or showroom
        kind: String,

        /// Page the visitor is on, e.g. /estimator
        #[arg(long, default_value = "/")]
        page: String,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
struct EstimateArgs {
    /// Property size key; defaults to [estimator].default_property
    #[arg(long)]
    property: Option<String>,

    /// Package key; defaults to [estimator].default_package
    #[arg(long)]
    package: Option<String>,

    /// Floor area in sq. ft; defaults to the category's area
    #[arg(long)]
    area: Option<String>,

    /// Replace the default rooms (repeatable)
    #[arg(long = "room", value_name = "NAME")]
    rooms: Vec<String>,

    /// Add a room to the selection (repeatable)
    #[arg(long = "add-room", value_name = "NAME")]
    add_rooms: Vec<String>,

    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    if cli.print_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if cli.print_example_config {
        print!("{}", Config::example_config(&config_path));
        return Ok(());
    }

    let config = Config::load(&config_path).with_context(|| {
        format!(
            "load config {}; run `casaquote --print-example-config` to generate a v1 template",
            config_path.display()
        )
    })?;
    if cli.check {
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let catalog = config.catalog();
    print!("{}", execute(&config, &catalog, command)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn execute(config: &Config, catalog: &Catalog, command: Command) -> Result<String> {
    match command {
        Command::Estimate(args) => {
            let request = estimate_request(config, catalog, &args)?;
            debug!(?request, "pricing estimate");
            let result = compute_estimate(catalog, &request)
                .context("price estimate; run `casaquote catalog` to list valid keys")?;
            if args.json {
                return to_json(&result);
            }

            let mut output = report::render_estimate(&result);
            if let Some(phone) = config.whatsapp_phone() {
                let text = share_message(&result, config.business_name());
                output.push_str(&format!("\nShare on WhatsApp: {}\n", deep_link(phone, &text)));
            }
            Ok(output)
        }
        Command::Quick {
            property,
            package,
            json,
        } => {
            let quick = quick_estimate(catalog, &property, &package)
                .context("quick estimate; run `casaquote catalog` to list valid keys")?;
            if json {
                return to_json(&quick);
            }
            Ok(report::render_quick(&quick))
        }
        Command::Catalog { json } => {
            if json {
                return to_json(catalog);
            }
            Ok(report::render_catalog(catalog))
        }
        Command::Whatsapp { kind, page } => {
            let kind = MessageKind::parse(&kind).ok_or_else(|| {
                anyhow!(
                    "unknown message kind {kind:?}; expected one of: {}",
                    MessageKind::ALL.map(MessageKind::as_str).join(", ")
                )
            })?;
            let Some(phone) = config.whatsapp_phone() else {
                bail!(
                    "no WhatsApp number configured -- set [contact].whatsapp_phone in the config file and retry"
                );
            };
            let text = message_text(kind, PageContext::from_path(&page), config.business_name());
            Ok(format!("{text}\n{}\n", deep_link(phone, &text)))
        }
    }
}

/// Rooms start from the category defaults. `--room` replaces them and
/// `--add-room` appends to whichever selection results.
fn estimate_request(
    config: &Config,
    catalog: &Catalog,
    args: &EstimateArgs,
) -> Result<EstimateRequest> {
    let property = args
        .property
        .as_deref()
        .unwrap_or_else(|| config.default_property());
    let package = args
        .package
        .as_deref()
        .unwrap_or_else(|| config.default_package());

    let mut request = EstimateRequest::with_default_rooms(catalog, property, package);
    if !args.rooms.is_empty() {
        request = request.rooms(args.rooms.iter().map(|room| room.trim()));
    }
    for room in &args.add_rooms {
        request.rooms.insert(room.trim());
    }

    if let Some(raw) = &args.area {
        let parsed = match parse_custom_area(raw) {
            Ok(parsed) => parsed,
            Err(error) => bail!("{error} {raw:?} -- pass --area as a whole number of sq. ft"),
        };
        if let Some(area) = parsed {
            if let Err(error) = check_area_bounds(area, config.area_bounds()) {
                bail!("{error} -- adjust --area or [estimator] min_area/max_area");
            }
            request.custom_area = Some(area);
        }
    }
    Ok(request)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("encode JSON output")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, EstimateArgs, estimate_request, execute};
    use crate::config::Config;
    use anyhow::Result;
    use casaquote_app::Catalog;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Cli> {
        Ok(Cli::try_parse_from(
            std::iter::once("casaquote").chain(args.iter().copied()),
        )?)
    }

    fn config_with_phone() -> Config {
        let mut config = Config::default();
        config.contact.whatsapp_phone = Some("+91 98765 43210".to_owned());
        config.contact.business_name = Some("Casa Studio".to_owned());
        config
    }

    #[test]
    fn no_arguments_parses_without_command() -> Result<()> {
        let cli = parse(&[])?;
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
        assert!(!cli.check);
        assert!(!cli.verbose);
        Ok(())
    }

    #[test]
    fn global_flags_parse() -> Result<()> {
        let cli = parse(&[
            "--config",
            "/custom/config.toml",
            "--print-config-path",
            "--print-example-config",
            "--check",
        ])?;
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(cli.print_config_path);
        assert!(cli.print_example_config);
        assert!(cli.check);
        Ok(())
    }

    #[test]
    fn config_flag_is_accepted_after_subcommand() -> Result<()> {
        let cli = parse(&["catalog", "--config", "/x.toml", "-v"])?;
        assert_eq!(cli.config, Some(PathBuf::from("/x.toml")));
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Command::Catalog { json: false }));
        Ok(())
    }

    #[test]
    fn estimate_collects_repeated_rooms() -> Result<()> {
        let cli = parse(&[
            "estimate",
            "--property",
            "1bhk",
            "--room",
            "Kitchen",
            "--room",
            "Balcony",
            "--add-room",
            "Sauna",
            "--area",
            "800",
            "--json",
        ])?;
        assert_eq!(
            cli.command,
            Some(Command::Estimate(EstimateArgs {
                property: Some("1bhk".to_owned()),
                package: None,
                area: Some("800".to_owned()),
                rooms: vec!["Kitchen".to_owned(), "Balcony".to_owned()],
                add_rooms: vec!["Sauna".to_owned()],
                json: true,
            }))
        );
        Ok(())
    }

    #[test]
    fn quick_defaults_to_premium_package() -> Result<()> {
        let cli = parse(&["quick", "2bhk"])?;
        assert_eq!(
            cli.command,
            Some(Command::Quick {
                property: "2bhk".to_owned(),
                package: "premium".to_owned(),
                json: false,
            })
        );
        Ok(())
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(parse(&["--wat"]).is_err());
        assert!(parse(&["whatsapp"]).is_err());
    }

    #[test]
    fn estimate_request_starts_from_config_defaults() -> Result<()> {
        let config = Config::default();
        let request = estimate_request(&config, Catalog::builtin(), &EstimateArgs::default())?;
        assert_eq!(request.property_size, "2bhk");
        assert_eq!(request.package, "premium");
        assert_eq!(request.rooms.len(), 6);
        assert_eq!(request.custom_area, None);
        Ok(())
    }

    #[test]
    fn room_flags_replace_then_append() -> Result<()> {
        let args = EstimateArgs {
            property: Some("1bhk".to_owned()),
            rooms: vec!["Kitchen".to_owned(), " Balcony ".to_owned()],
            add_rooms: vec!["Sauna".to_owned(), "Kitchen".to_owned()],
            ..EstimateArgs::default()
        };
        let request = estimate_request(&Config::default(), Catalog::builtin(), &args)?;
        assert_eq!(request.rooms.joined(", "), "Kitchen, Balcony, Sauna");
        Ok(())
    }

    #[test]
    fn add_room_alone_extends_defaults() -> Result<()> {
        let args = EstimateArgs {
            property: Some("1bhk".to_owned()),
            add_rooms: vec!["Wardrobe".to_owned()],
            ..EstimateArgs::default()
        };
        let request = estimate_request(&Config::default(), Catalog::builtin(), &args)?;
        assert_eq!(
            request.rooms.joined(", "),
            "Living Room, Bedroom, Kitchen, Bathroom, Wardrobe"
        );
        Ok(())
    }

    #[test]
    fn area_is_parsed_and_bounds_checked() -> Result<()> {
        let with_area = |area: &str| EstimateArgs {
            area: Some(area.to_owned()),
            ..EstimateArgs::default()
        };
        let config = Config::default();

        let request = estimate_request(&config, Catalog::builtin(), &with_area("1200"))?;
        assert_eq!(request.custom_area, Some(1200));

        let request = estimate_request(&config, Catalog::builtin(), &with_area("  "))?;
        assert_eq!(request.custom_area, None);

        let error = estimate_request(&config, Catalog::builtin(), &with_area("12a"))
            .expect_err("non-numeric area should fail");
        assert!(error.to_string().contains("whole number"));

        let error = estimate_request(&config, Catalog::builtin(), &with_area("250"))
            .expect_err("small area should fail");
        assert!(error.to_string().contains("300-5000"));
        Ok(())
    }

    #[test]
    fn estimate_json_output_uses_camel_case() -> Result<()> {
        let command = Command::Estimate(EstimateArgs {
            property: Some("1bhk".to_owned()),
            package: Some("essential".to_owned()),
            json: true,
            ..EstimateArgs::default()
        });
        let output = execute(&Config::default(), Catalog::builtin(), command)?;
        let json: serde_json::Value = serde_json::from_str(&output)?;
        assert_eq!(json["grandTotal"], 1_089_000);
        assert_eq!(json["perUnitAreaRate"], 1980);
        Ok(())
    }

    #[test]
    fn estimate_text_output_includes_share_link_when_phone_configured() -> Result<()> {
        let command = Command::Estimate(EstimateArgs {
            property: Some("1bhk".to_owned()),
            package: Some("essential".to_owned()),
            ..EstimateArgs::default()
        });
        let config = config_with_phone();
        let output = execute(&config, &config.catalog(), command.clone())?;
        assert!(output.contains("₹10,89,000"));
        assert!(output.contains("Share on WhatsApp: https://wa.me/919876543210?text=Hi%20Casa%20Studio"));

        let output = execute(&Config::default(), Catalog::builtin(), command)?;
        assert!(!output.contains("Share on WhatsApp"));
        Ok(())
    }

    #[test]
    fn unknown_property_points_to_catalog_command() {
        let command = Command::Estimate(EstimateArgs {
            property: Some("4bhk".to_owned()),
            ..EstimateArgs::default()
        });
        let error = execute(&Config::default(), Catalog::builtin(), command)
            .expect_err("unknown property should fail");
        let message = format!("{error:#}");
        assert!(message.contains("casaquote catalog"));
        assert!(message.contains("4bhk"));
    }

    #[test]
    fn whatsapp_link_uses_page_context() -> Result<()> {
        let command = Command::Whatsapp {
            kind: "quote".to_owned(),
            page: "/portfolio".to_owned(),
        };
        let output = execute(&config_with_phone(), Catalog::builtin(), command)?;
        assert!(output.starts_with("Hi! I liked your work."));
        assert!(output.contains("https://wa.me/919876543210?text="));
        Ok(())
    }

    #[test]
    fn whatsapp_requires_configured_phone_and_known_kind() {
        let missing_phone = Command::Whatsapp {
            kind: "showroom".to_owned(),
            page: "/".to_owned(),
        };
        let error = execute(&Config::default(), Catalog::builtin(), missing_phone)
            .expect_err("missing phone should fail");
        assert!(error.to_string().contains("[contact].whatsapp_phone"));

        let unknown_kind = Command::Whatsapp {
            kind: "brochure".to_owned(),
            page: "/".to_owned(),
        };
        let error = execute(&config_with_phone(), Catalog::builtin(), unknown_kind)
            .expect_err("unknown kind should fail");
        assert!(error.to_string().contains("consultation, quote, 1bhk"));
    }

    #[test]
    fn catalog_json_includes_extra_config_rooms() -> Result<()> {
        let mut config = Config::default();
        config.rooms.insert("Sauna".to_owned(), 70_000);
        let output = execute(&config, &config.catalog(), Command::Catalog { json: true })?;
        let json: serde_json::Value = serde_json::from_str(&output)?;
        let rooms = json["roomPrices"].as_array().map(Vec::len);
        assert_eq!(rooms, Some(16));
        Ok(())
    }
}
