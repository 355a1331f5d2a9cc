//! `soapbox factcheck` — search published fact checks for a claim.

use std::path::Path;

use soapbox_factcheck::FactCheckClient;

use super::CommandError;

pub async fn run(query: &str, limit: u32, config_path: Option<&Path>) -> Result<(), CommandError> {
    let config = super::load_config(config_path)?;

    let client = FactCheckClient::new(config.factcheck.api_key.clone())
        .map_err(|e| CommandError::other(e.to_string()))?
        .with_language_code(&config.factcheck.language_code)
        .with_page_size(limit);

    let results = client
        .search(query)
        .await
        .map_err(|e| CommandError::other(format!("fact-check search failed: {e}")))?;

    if results.is_empty() {
        println!("No fact checks found.");
        return Ok(());
    }

    for result in results.iter().take(limit as usize) {
        println!("\nClaim: {}", result.text);
        if let Some(claimant) = &result.claimant {
            println!("Claimant: {claimant}");
        }
        if let Some(publisher) = &result.publisher {
            println!("  Publisher: {publisher}");
        }
        if let Some(rating) = &result.rating {
            println!("  Rating: {rating}");
        }
        if let Some(url) = &result.url {
            println!("  URL: {url}");
        }
    }

    Ok(())
}
