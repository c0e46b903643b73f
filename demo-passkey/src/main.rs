use std::env;
use std::sync::Arc;

use passkey_bridge::{Passkey, PasskeyError, Platform};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod simulator;

use simulator::{SimulatedAndroid, SimulatedIos};

const USAGE: &str = "usage: demo-passkey <register|authenticate> <request.json> [--security-key]";

fn platform_from_env() -> Platform {
    let fail_with = env::var("PASSKEY_DEMO_FAIL").ok();
    match env::var("PASSKEY_DEMO_PLATFORM")
        .unwrap_or_else(|_| "ios".to_string())
        .to_lowercase()
        .as_str()
    {
        "android" => Platform::Android(Arc::new(SimulatedAndroid { fail_with })),
        "ios" => Platform::Ios(Arc::new(SimulatedIos { fail_with })),
        invalid => {
            tracing::warn!("Invalid PASSKEY_DEMO_PLATFORM: {}. Using default 'ios'", invalid);
            Platform::Ios(Arc::new(SimulatedIos { fail_with }))
        }
    }
}

async fn run(
    passkey: &Passkey,
    ceremony: &str,
    request_json: &str,
    with_security_key: bool,
) -> Result<String, PasskeyError> {
    match ceremony {
        "register" => {
            passkey
                .register_json(request_json, Some(with_security_key))
                .await
        }
        "authenticate" => {
            passkey
                .authenticate_json(request_json, Some(with_security_key))
                .await
        }
        other => Err(PasskeyError::InvalidRequest(format!(
            "Unknown ceremony: {other}"
        ))),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "passkey_bridge=debug,demo_passkey=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (ceremony, path) = match args.as_slice() {
        [ceremony, path, ..] => (ceremony.as_str(), path.as_str()),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let with_security_key = args.iter().any(|a| a == "--security-key");

    let request_json = std::fs::read_to_string(path)?;
    let passkey = Passkey::new(platform_from_env());

    let supported = passkey.is_supported().await;
    tracing::info!(
        "Running {} on {} (supported: {})",
        ceremony,
        passkey.platform().name(),
        supported
    );

    match run(&passkey, ceremony, &request_json, with_security_key).await {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            println!("{}", e.to_json());
            std::process::exit(1);
        }
    }
}
