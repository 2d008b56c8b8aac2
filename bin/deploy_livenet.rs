//! Deploy the save wrapper to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!   SAVE_WRAPPER_VAULT=hash-...
//!
//! Optional:
//!   SAVE_WRAPPER_STAKER_OF_RECORD=caller|wrapper
//!   SAVE_WRAPPER_ACCOUNTING_TOKEN=hash-...   (required for `wrapper`)
//!   SAVE_WRAPPER_DEFAULT_REFERRER=account-hash-...
//!   SAVE_WRAPPER_GUARD_DEPOSITS=true
//!   SAVE_WRAPPER_MASSET, SAVE_WRAPPER_SAVE, SAVE_WRAPPER_BASSETS,
//!   SAVE_WRAPPER_FEEDER_POOLS, SAVE_WRAPPER_FEEDER_ASSETS
//!     (comma separated lists; grants the approval bundle after deploy)

mod config;

use odra::host::Deployer;
use odra::prelude::Addressable;

use save_wrapper_contracts::save_wrapper::{SaveWrapper, SaveWrapperInitArgs};

use config::DeployConfig;

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Save Wrapper Livenet Deployment ===");
    println!();

    let config = match DeployConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Invalid deployment configuration: {error}");
            std::process::exit(1);
        }
    };

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    env.set_gas(config.payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!("Staker of record: {:?}", config.staker_of_record);
    println!("Deposits guarded: {}", config.guard_deposits);
    println!();

    println!("Deploying SaveWrapper...");
    let mut wrapper = SaveWrapper::deploy(
        &env,
        SaveWrapperInitArgs {
            vault: config.vault,
            staker_of_record: config.staker_of_record,
            accounting_token: config.accounting_token,
            default_referrer: config.default_referrer,
            guard_deposits: config.guard_deposits,
        },
    );
    let wrapper_addr = wrapper.address().clone();
    println!("SaveWrapper deployed at: {:?}", wrapper_addr);
    println!();

    match config.bundle {
        Some(bundle) => {
            println!("Granting approval bundle...");
            wrapper.approve_bundle(
                bundle.masset,
                bundle.save,
                config.vault,
                bundle.bassets,
                bundle.feeder_pools,
                bundle.feeder_assets,
            );
            println!("Done.");
        }
        None => println!("No approval bundle configured, skipping."),
    }

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  SaveWrapper:       {:?}", wrapper_addr);
    println!("  Vault:             {:?}", config.vault);
    if let Some(token) = config.accounting_token {
        println!("  AccountingToken:   {:?}", token);
    }
    println!();
    println!("Remember to let the accounting token accept deposits from the wrapper.");
}
