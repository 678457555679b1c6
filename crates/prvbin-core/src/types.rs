//! Paste option types shared by the crypto pipeline, the client, and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::PrvbinError;

/// Lifetime of a paste on the server.
///
/// The serialized names are the exact strings the service accepts in
/// `meta.expire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Expire {
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "10min")]
    TenMinutes,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[default]
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "never")]
    Never,
}

impl Expire {
    pub const ALL: [Expire; 8] = [
        Expire::FiveMinutes,
        Expire::TenMinutes,
        Expire::OneHour,
        Expire::OneDay,
        Expire::OneWeek,
        Expire::OneMonth,
        Expire::OneYear,
        Expire::Never,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Expire::FiveMinutes => "5min",
            Expire::TenMinutes => "10min",
            Expire::OneHour => "1hour",
            Expire::OneDay => "1day",
            Expire::OneWeek => "1week",
            Expire::OneMonth => "1month",
            Expire::OneYear => "1year",
            Expire::Never => "never",
        }
    }

    /// How long the server keeps the paste. `None` for [`Expire::Never`].
    ///
    /// Months are 30 days and years 365 days, matching the server's own table.
    pub fn duration(self) -> Option<Duration> {
        const MINUTE: u64 = 60;
        const HOUR: u64 = 60 * MINUTE;
        const DAY: u64 = 24 * HOUR;

        let secs = match self {
            Expire::FiveMinutes => 5 * MINUTE,
            Expire::TenMinutes => 10 * MINUTE,
            Expire::OneHour => HOUR,
            Expire::OneDay => DAY,
            Expire::OneWeek => 7 * DAY,
            Expire::OneMonth => 30 * DAY,
            Expire::OneYear => 365 * DAY,
            Expire::Never => return None,
        };
        Some(Duration::from_secs(secs))
    }
}

impl fmt::Display for Expire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expire {
    type Err = PrvbinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expire::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| PrvbinError::InvalidExpire(s.to_string()))
    }
}

/// Returns true if `expire` is one of the lifetimes the service accepts.
pub fn valid_expire(expire: &str) -> bool {
    expire.parse::<Expire>().is_ok()
}

/// How the paste is rendered by the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    #[default]
    PlainText,
    Markdown,
    SyntaxHighlighting,
}

impl Formatter {
    pub fn as_str(self) -> &'static str {
        match self {
            Formatter::PlainText => "plaintext",
            Formatter::Markdown => "markdown",
            Formatter::SyntaxHighlighting => "syntaxhighlighting",
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formatter {
    type Err = PrvbinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plaintext" => Ok(Formatter::PlainText),
            "markdown" => Ok(Formatter::Markdown),
            "syntaxhighlighting" => Ok(Formatter::SyntaxHighlighting),
            other => Err(PrvbinError::InvalidFormatter(other.to_string())),
        }
    }
}
