use std::{env, path::PathBuf};

use crate::aggregate::AggregateKind;

pub const INPUT_ENV: &str = "BENCHTABLE_INPUT";
pub const LOG_ENV: &str = "BENCHTABLE_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported format {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub aggregates: Vec<AggregateKind>,
    pub format: OutputFormat,
}

impl ReportConfig {
    /// Parses `argv`, including the program name in position 0.
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        Self::from_args_with_input(args, env::var(INPUT_ENV).ok())
    }

    /// As [`ReportConfig::from_args`], with the input fallback given explicitly.
    pub fn from_args_with_input(
        args: &[&str],
        fallback_input: Option<String>,
    ) -> Result<Self, String> {
        let mut input = None;
        let mut aggregates = Vec::new();
        let mut format = OutputFormat::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--aggregate" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--aggregate requires a value".to_string())?;
                    let kind = value
                        .parse::<AggregateKind>()
                        .map_err(|e| e.to_string())?;
                    if !aggregates.contains(&kind) {
                        aggregates.push(kind);
                    }
                }
                "--format" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--format requires a value".to_string())?;
                    format = OutputFormat::parse(value)?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    if input.is_some() {
                        return Err(format!("unexpected argument {other}"));
                    }
                    input = Some(PathBuf::from(other));
                }
            }
        }
        let input = input
            .or_else(|| fallback_input.map(PathBuf::from))
            .ok_or_else(|| "missing INPUT path".to_string())?;
        if aggregates.is_empty() {
            aggregates = AggregateKind::ALL.to_vec();
        }
        Ok(Self {
            input,
            aggregates,
            format,
        })
    }

    pub fn help() -> &'static str {
        "Usage: benchtable [--aggregate mean|median]... [--format text|json] INPUT\n\n\
         Extracts relative slowdown from benchmark JSON results.\n\
         INPUT defaults to $BENCHTABLE_INPUT; log level is read from $BENCHTABLE_LOG.\n"
    }
}
