use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::{cmp::Ordering, path::Path};
use tracing_subscriber::EnvFilter;
use vercmp::{newest_first, GenericVersion, RuntimeVersion, Version, VersionError};

use cli::{Check, Compare, Opts, Parse, Scheme, Sort, SubCommands};
use config::{Config, CONF_PATH};
use i18n::I18N_LOADER;

mod cli;
mod config;
mod i18n;
mod macros;

/// Parse a command line argument, naming it in the error
fn read_version<V, F>(parse: &F, input: &str) -> Result<V>
where
    F: Fn(&str) -> std::result::Result<V, VersionError>,
{
    parse(input).with_context(|| fl!("invalid_version", version = input))
}

/// Generic version parser honoring the command line and configured delimiters
fn generic_parser<'a>(
    scheme: &'a Scheme,
    config: &'a Config,
) -> impl Fn(&str) -> std::result::Result<GenericVersion, VersionError> + 'a {
    let delimiters = scheme.delimiters.as_deref().unwrap_or(&config.delimiters);

    move |s: &str| GenericVersion::parse(s, delimiters)
}

fn print_json<V: Serialize>(version: &V) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(version)?);

    Ok(())
}

fn parse(args: &Parse, config: &Config) -> Result<()> {
    if args.scheme.runtime {
        let version = read_version(&RuntimeVersion::parse, &args.target)?;
        if args.json {
            return print_json(&version);
        }

        println_with_fl!(
            "parsed_runtime",
            major = version.major(),
            middle = version.middle(),
            minor = version.minor(),
            update = version.update(),
            identifier = version
                .identifier()
                .map_or_else(|| fl!("no_identifier"), |s| format!("\"{}\"", s))
        );
    } else {
        let version = read_version(&generic_parser(&args.scheme, config), &args.target)?;
        if args.json {
            return print_json(&version);
        }

        println_with_fl!(
            "parsed_sections",
            sections = version
                .sections()
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

fn compare_with<V, F>(parse: F, left: &str, right: &str) -> Result<()>
where
    V: Version,
    F: Fn(&str) -> std::result::Result<V, VersionError>,
{
    let relation = match read_version(&parse, left)?.cmp(&read_version(&parse, right)?) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", left, relation, right);

    Ok(())
}

fn compare(args: &Compare, config: &Config) -> Result<()> {
    if args.scheme.runtime {
        compare_with(RuntimeVersion::parse, &args.left, &args.right)
    } else {
        compare_with(
            generic_parser(&args.scheme, config),
            &args.left,
            &args.right,
        )
    }
}

/// Parse what can be parsed, newest first
fn sorted<V, F>(parse: F, targets: &[String]) -> Vec<V>
where
    V: Version,
    F: Fn(&str) -> std::result::Result<V, VersionError>,
{
    let mut versions = Vec::new();

    for target in targets {
        match parse(target.as_str()) {
            Ok(v) => versions.push(v),
            Err(e) => {
                println_with_prefix_and_fl!(
                    "skip_unidentified_version",
                    version = target.as_str(),
                    error = e.to_string()
                );
            }
        }
    }

    newest_first(&mut versions);

    versions
}

fn print_list<V: Version>(versions: &[V]) -> Result<()> {
    if versions.is_empty() {
        bail!(fl!("empty_list"));
    }

    for (i, v) in versions.iter().enumerate() {
        println!("[{}] {}", i + 1, v);
    }

    Ok(())
}

fn sort(args: &Sort, config: &Config) -> Result<()> {
    if args.scheme.runtime {
        print_list(&sorted(RuntimeVersion::parse, &args.targets))
    } else {
        print_list(&sorted(
            generic_parser(&args.scheme, config),
            &args.targets,
        ))
    }
}

fn platform_version(config: &Config) -> Result<RuntimeVersion> {
    Ok(RuntimeVersion::from_source(&config.runtime_source())?)
}

fn check(args: &Check, config: &Config, conf_path: &Path) -> Result<()> {
    let required = match args.required.as_deref().or_else(|| config.minimum.as_deref()) {
        Some(r) => read_version(&RuntimeVersion::parse, r)?,
        None => bail!(fl!("err_no_minimum", conf_path = conf_path.to_string_lossy())),
    };
    let current = match &args.current {
        Some(c) => read_version(&RuntimeVersion::parse, c)?,
        None => platform_version(config)?,
    };

    if !current.is_at_least(&required) {
        bail!(fl!(
            "err_check_failed",
            current = current.to_string(),
            required = required.to_string()
        ));
    }

    println_with_prefix_and_fl!(
        "check_passed",
        current = current.to_string(),
        required = required.to_string()
    );

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let conf_path = opts.config.as_deref().unwrap_or_else(|| Path::new(CONF_PATH));
    let config = Config::read(conf_path)?;

    // Switch table
    match &opts.subcommands {
        SubCommands::Parse(args) => parse(args, &config)?,
        SubCommands::Compare(args) => compare(args, &config)?,
        SubCommands::Sort(args) => sort(args, &config)?,
        SubCommands::Check(args) => check(args, &config, conf_path)?,
        SubCommands::Current => println!("{}", platform_version(&config)?),
    }

    Ok(())
}
