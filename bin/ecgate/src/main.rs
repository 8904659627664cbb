mod auth;
mod config;

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use auth::Authenticator;
use clap::Parser;
use config::{Config, LogFormat};
use ecgate_keys::{
    fingerprint::ssh_public_key_line, matcher, CurveRegistry, DomainParameters, Fingerprint,
    KeyInfo, PointFormat,
};
use eyre::{Context, OptionExt, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
struct Args {
    /// The path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Show the curve, point format and fingerprint of a public key
    Info { key_file: PathBuf },
    /// Replace explicit curve parameters by the curve name, if the curve has one
    Canonicalize {
        /// Write raw DER instead of PEM
        #[arg(long)]
        der: bool,
        key_file: PathBuf,
    },
    /// Check whether two files contain the same public key
    Compare { a: PathBuf, b: PathBuf },
    /// Decide whether a user may log in with a public key, using the configured allowed key
    Check {
        #[arg(short, long)]
        user: String,
        candidate: PathBuf,
    },
    /// List the known named curves
    Curves,
}

fn main() -> eyre::Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load(&args)?;

    setup_tracing(&config);

    let registry = CurveRegistry::standard();

    match args.cmd {
        Subcommand::Info { key_file } => {
            let key = load_key(&key_file)?;
            info(&registry, &key)?;
            Ok(ExitCode::SUCCESS)
        }
        Subcommand::Canonicalize { der, key_file } => {
            let key = load_key(&key_file)?;
            let canonical = ecgate_keys::canonicalize(&registry, &key);
            if canonical.named_curve().is_none() {
                debug!("Key keeps its explicit parameters");
            }
            if der {
                std::io::stdout().lock().write_all(&canonical.serialize()?)?;
            } else {
                print!("{}", canonical.to_pem()?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Subcommand::Compare { a, b } => {
            let a = load_key(&a)?;
            let b = load_key(&b)?;
            if ecgate_keys::points_equal(&registry, &a, &b)? {
                println!("equal");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("different");
                Ok(ExitCode::FAILURE)
            }
        }
        Subcommand::Check { user, candidate } => {
            let allowed_key = config
                .auth
                .allowed_key
                .as_deref()
                .ok_or_eyre("no allowed key configured, set auth.allowed_key in the config file")?;
            let auth = Authenticator::load(
                Arc::new(registry),
                allowed_key,
                config.auth.canonical_fast_path,
            )?;

            let candidate = std::fs::read(&candidate)
                .wrap_err_with(|| format!("reading file {}", candidate.display()))?;
            if auth.is_authorized(&user, &candidate) {
                println!("authorized");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("denied");
                Ok(ExitCode::FAILURE)
            }
        }
        Subcommand::Curves => {
            for entry in registry.entries() {
                print!(
                    "{:<24} {:<22} {:>4} bits",
                    entry.id.name(),
                    entry.id.oid().to_string(),
                    entry.params.field_bits()
                );
                if !entry.aliases.is_empty() {
                    print!("  aka {}", entry.aliases.join(", "));
                }
                if let Some(ssh_name) = entry.ssh_name {
                    print!("  ssh: {ssh_name}");
                }
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_key(path: &Path) -> Result<KeyInfo> {
    let content =
        std::fs::read(path).wrap_err_with(|| format!("reading file {}", path.display()))?;
    KeyInfo::from_pem_or_der(&content)
        .wrap_err_with(|| format!("invalid public key in {}", path.display()))
}

fn info(registry: &CurveRegistry, key: &KeyInfo) -> Result<()> {
    match key.parameters() {
        DomainParameters::Named(oid) => match registry.entry_by_identifier(oid) {
            Some(entry) => println!("parameters:  named, {}", entry.id),
            None => println!("parameters:  named, unknown curve {oid}"),
        },
        DomainParameters::Explicit(specified) => {
            let params = specified.resolve()?;
            let matches = matcher::match_all(registry, &params);
            match matches.split_first() {
                Some((first, rest)) => {
                    println!("parameters:  explicit, same as {}", first.id);
                    for other in rest {
                        println!("             also known as {}", other.id);
                    }
                }
                None => println!("parameters:  explicit, no named curve"),
            }
        }
    }

    let format = PointFormat::of_encoding(key.public_key())
        .map_or("invalid", |format| format.name());
    println!("point:       {format}");

    let curve = key.curve(registry)?;
    println!("field:       {} bits", curve.field_bits());

    println!("fingerprint: {}", Fingerprint::of_key(registry, key)?);
    if let Some(line) = ssh_public_key_line(registry, key)? {
        println!("openssh:     {line}");
    }
    Ok(())
}

fn setup_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}
