//! Prints the Okta authorization URL for a login attempt and, when the redirect handler
//! already captured a code, exchanges it and lists the signed-in user's groups.
//!
//! ```sh
//! OKTA_ORG_URL=https://acme.okta.com OKTA_CLIENT_ID=... OKTA_CLIENT_SECRET=... \
//! 	cargo run --example authorization -- <state> [code]
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use okta_oidc::{client::OktaClient, config::OktaConfig};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let state = args.next().unwrap_or_else(|| "demo-state".into());
	let code = args.next();
	let config = OktaConfig::from_env();
	let missing = config.missing_fields();

	if !missing.is_empty() {
		eprintln!("Missing configuration: {}.", missing.join(", "));
	}

	let client = OktaClient::new(config);

	println!("Send your user to {}.", client.authorization_url(&state));

	let Some(code) = code else {
		println!("Pass the `code` query parameter from the callback to exchange it.");

		return Ok(());
	};
	let tokens = client.exchange_code(&code).await?;
	let access_token =
		tokens.access_token().ok_or_else(|| eyre!("Token response has no access_token."))?;

	println!("Token response fields: {tokens:?}.");

	let (valid, info) = client.validate_token(access_token).await;

	println!("Access token accepted: {valid}.");

	if let Some(info) = info {
		println!("Signed in as {}.", info.email().or(info.sub()).unwrap_or("<unknown>"));
		println!("Groups: {:?}.", info.groups()?);
	}

	Ok(())
}
