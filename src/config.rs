//! Application configuration loaded from environment variables.

use serde::{de, Deserialize, Deserializer};

/// Port used when `PORT` is absent or not a usable number.
pub const DEFAULT_PORT: u16 = 3003;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Lenient `PORT` parsing: values that are not numbers at all, as well as empty
/// and zero values, fall back to the default. A number that is not a valid TCP
/// port (negative, fractional, above 65535) is rejected.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_port(&raw).map_err(de::Error::custom)
}

fn parse_port(raw: &str) -> Result<u16, String> {
    let raw = raw.trim();
    let value = match parse_number(raw) {
        Some(v) if !v.is_nan() && v != 0.0 => v,
        _ => return Ok(DEFAULT_PORT),
    };

    if value.fract() != 0.0 || !(1.0..=f64::from(u16::MAX)).contains(&value) {
        return Err(format!(
            "invalid port {raw}: must be an integer between 1 and 65535"
        ));
    }

    // Integral and in range, so the cast is exact.
    Ok(value as u16)
}

/// Numeric reading of an environment value: decimal with optional sign,
/// fraction and exponent (`1e3`), `Infinity`, or an unsigned `0x`/`0o`/`0b`
/// integer literal. Empty input reads as zero; anything else is not a number.
fn parse_number(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let Some(digits) = raw
            .get(..2)
            .filter(|p| p.eq_ignore_ascii_case(prefix))
            .map(|_| &raw[2..])
        else {
            continue;
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(
            u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::INFINITY),
        );
    }

    match raw {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            raw.parse().ok()
        }
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// URL of the liveness endpoint as seen from the local host.
    pub fn health_url(&self) -> String {
        format!("http://localhost:{}/health/live", self.port)
    }

    /// URL of the root endpoint as seen from the local host.
    pub fn root_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }
}
