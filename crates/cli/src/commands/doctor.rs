//! `soapbox doctor` — diagnose config and gateway health.
//!
//! Diagnostics only: always exits 0 so scripts can run it unconditionally.

use std::path::Path;

use soapbox_config::AppConfig;
use soapbox_core::gateway::ModelGateway;
use soapbox_gateway::OllamaGateway;

use super::CommandError;

pub async fn run(config_path: Option<&Path>) -> Result<(), CommandError> {
    println!("🩺 Soapbox Doctor — System Diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    // Config
    let config = match super::load_config(config_path) {
        Ok(config) => {
            println!("  ✅ Config valid");
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  ⚠️  1 issue found. See above for details.");
            return Ok(());
        }
    };

    // Gateway reachability — short timeout; this is a liveness probe,
    // not an inference call.
    match OllamaGateway::with_timeout(&config.base_url, 5) {
        Ok(gateway) => match gateway.list_models().await {
            Ok(models) => {
                println!("  ✅ Gateway reachable at {}", config.base_url);
                if models.iter().any(|m| m == &config.model) {
                    println!("  ✅ Model \"{}\" is available", config.model);
                } else {
                    println!(
                        "  ⚠️  Model \"{}\" not in gateway tag list — run `ollama pull {}`",
                        config.model, config.model
                    );
                    issues += 1;
                }
            }
            Err(e) => {
                println!("  ❌ Gateway unreachable at {}: {e}", config.base_url);
                issues += 1;
            }
        },
        Err(e) => {
            println!("  ❌ Could not build gateway client: {e}");
            issues += 1;
        }
    }

    // Fact-check key (warn only; extraction does not need it)
    if config.factcheck.api_key.is_some() {
        println!("  ✅ Fact-check API key configured");
    } else {
        println!("  ⚠️  No fact-check API key — `soapbox factcheck` will not work");
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
