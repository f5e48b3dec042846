use anyhow::Context;
use clap::{Arg, ArgAction, Command};

use air_metadata::{AgentMetadata, MetadataUpdate};
use air_registry::{Identity, MintPolicy, RegistryConfig, RegistryHandle, TokenId};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("air-registry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("AIR Agent Identity Registry")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Drive a full token lifecycle against a fresh registry")
                .arg(
                    Arg::new("verified-only")
                        .long("verified-only")
                        .action(ArgAction::SetTrue)
                        .help("Gate mints on the verified-user allow-list"),
                ),
        )
        .subcommand(
            Command::new("validate-log")
                .about("Run a lifecycle and verify the event log hash chain"),
        );

    match cli.get_matches().subcommand() {
        Some(("demo", args)) => {
            let verified_only = args.get_flag("verified-only");
            run_demo(verified_only)
        }
        Some(("validate-log", _)) => validate_log(),
        _ => Ok(()),
    }
}

fn run_demo(verified_only: bool) -> anyhow::Result<()> {
    let policy = if verified_only {
        MintPolicy::VerifiedOnly
    } else {
        MintPolicy::Open
    };
    let registry = RegistryHandle::with_config(RegistryConfig { mint_policy: policy });

    let deployer = Identity::new();
    let holder = Identity::new();
    let buyer = Identity::new();

    registry
        .initialize(deployer)
        .context("initializing registry")?;
    println!("registry initialized, owner: {}", registry.owner()?);

    if verified_only {
        registry.set_verified_user(deployer, holder)?;
        println!("verified mint target: {holder}");
    }

    let metadata = AgentMetadata::new(
        "AI Agent 1",
        "Description of AI Agent 1",
        "https://example.com/image.png",
        vec!["skill1".to_string(), "skill2".to_string()],
        "1.0.0",
    );
    let id = registry
        .mint_agent(deployer, holder, metadata)
        .context("minting agent token")?;
    println!("minted token {id} to {holder}");

    registry.update_metadata(
        holder,
        id,
        MetadataUpdate::new(
            "Updated description",
            "https://example.com/updated-image.png",
            vec!["new-skill1".to_string()],
            "1.1.0",
        ),
    )?;
    let view = registry.get_token(id)?;
    println!("updated token {id}: version {}", view.metadata.version);

    registry.transfer_position(holder, id, buyer)?;
    println!("transferred token {id} to {buyer}");

    registry.burn(buyer, id)?;
    println!(
        "burned token {id}; lookup now fails: {}",
        registry.get_token(id).unwrap_err()
    );

    let stats = registry.stats();
    println!(
        "stats: minted={} live={} burned={}",
        stats.minted, stats.live, stats.burned
    );

    println!();
    println!("event log ({} entries):", registry.events().len());
    for event in registry.events() {
        println!("  {:?}", event.kind);
    }

    registry
        .log_integrity()
        .context("verifying event log integrity")?;
    println!("event log hash chain: VALID");
    Ok(())
}

fn validate_log() -> anyhow::Result<()> {
    let registry = RegistryHandle::new();
    let deployer = Identity::new();
    registry.initialize(deployer)?;

    for i in 0..3 {
        let metadata = AgentMetadata::new(
            format!("AI Agent {i}"),
            "generated for log validation",
            "https://example.com/image.png",
            vec!["skill".to_string()],
            "1.0.0",
        );
        registry.mint_agent(deployer, deployer, metadata)?;
    }
    registry.burn(deployer, TokenId(1))?;

    let events = registry.events();
    println!("events recorded: {}", events.len());
    match registry.log_integrity() {
        Ok(()) => {
            println!("log integrity: VALID");
            Ok(())
        }
        Err(e) => {
            println!("log integrity: INVALID ({e})");
            std::process::exit(1);
        }
    }
}
