use pix_models::codec::{Codec, CodecError};
use pix_models::config::{Config, ConfigError};
use pix_models::model::{
    ChargeValue, Discount, ExtensibleModel, Fees, Fine, Interest, Reduction,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::str::FromStr;
use std::{env, fs, process};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Command line errors.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("failed to read payload {path}: {source}")]
    ReadPayload {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing --payload=PATH argument")]
    MissingPayload,
    #[error("unknown payload kind: {0}")]
    UnknownKind(String),
}

/// Model the payload is decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadKind {
    Fees,
    Fine,
    Interest,
    Reduction,
    Discount,
    ChargeValue,
}

impl FromStr for PayloadKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fees" => Ok(PayloadKind::Fees),
            "fine" => Ok(PayloadKind::Fine),
            "interest" => Ok(PayloadKind::Interest),
            "reduction" => Ok(PayloadKind::Reduction),
            "discount" => Ok(PayloadKind::Discount),
            "charge-value" => Ok(PayloadKind::ChargeValue),
            _ => Err(CliError::UnknownKind(s.to_string())),
        }
    }
}

fn parse_arg(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the
/// configured level so stdout carries only the encoded payload.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run() {
        error!(error = %e, "Payload inspection failed");
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let config_path = parse_arg("--config=").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    init_tracing(config.app.tracing_level());
    info!(config = %config_path, app = %config.app.name, env = %config.app.env, "Configuration loaded");

    let kind = match parse_arg("--kind=") {
        Some(kind) => kind.parse()?,
        None => PayloadKind::ChargeValue,
    };
    let payload_path = parse_arg("--payload=").ok_or(CliError::MissingPayload)?;
    let payload = fs::read_to_string(&payload_path).map_err(|source| CliError::ReadPayload {
        path: payload_path.clone(),
        source,
    })?;

    let codec = Codec::from_config(&config);
    let output = match kind {
        PayloadKind::Fees => inspect::<Fees>(&codec, &payload)?,
        PayloadKind::Fine => inspect::<Fine>(&codec, &payload)?,
        PayloadKind::Interest => inspect::<Interest>(&codec, &payload)?,
        PayloadKind::Reduction => inspect::<Reduction>(&codec, &payload)?,
        PayloadKind::Discount => inspect::<Discount>(&codec, &payload)?,
        PayloadKind::ChargeValue => inspect::<ChargeValue>(&codec, &payload)?,
    };

    println!("{}", output);
    Ok(())
}

/// Decodes the payload as `M`, logs what it carried and re-encodes it.
fn inspect<M>(codec: &Codec, payload: &str) -> Result<String, CliError>
where
    M: ExtensibleModel + DeserializeOwned + Serialize + Display,
{
    let model: M = codec.decode(payload)?;

    info!(
        model = M::TYPE_NAME,
        declared = model.declared_count(),
        unknown_fields = model.additional_fields().len(),
        "Payload decoded"
    );
    for key in model.additional_fields().keys() {
        debug!(model = M::TYPE_NAME, field = %key, "Unknown field preserved");
    }
    debug!(model = %model, "Decoded model");

    Ok(codec.encode_pretty(&model)?)
}
