//! smsseg entrypoint: report how many SMS segments a message needs.
use anyhow::{Context, Result, bail};
use clap::Parser;
use core_config::{Config, OutputFormat, load_from};
use core_segments::{SegmentReport, analyze, decode_message};
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "smsseg", version, about = "SMS segment and bit calculator")]
struct Args {
    /// Message text. Read from stdin (as UTF-8) when omitted.
    pub message: Option<String>,
    /// Replace typographic look-alikes with ASCII before counting.
    #[arg(long)]
    pub smart: bool,
    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
    /// Optional configuration file path (overrides discovery of `smsseg.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    fn smart_encoding(&self, config: &Config) -> bool {
        self.smart || config.smart_encoding()
    }

    fn output_format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output_format()
        }
    }
}

/// Split a `--log-file` path into the appender directory and file name.
/// `None` when the path names no file (`/`, `..`).
fn split_log_path(path: &Path) -> Option<(PathBuf, &OsStr)> {
    let name = path.file_name()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Some((dir, name))
}

fn configure_logging(log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let Some(path) = log_file else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
        return Ok(None);
    };
    let Some((dir, name)) = split_log_path(path) else {
        bail!("--log-file {} does not name a file", path.display());
    };
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    // An already-installed global subscriber is fine; drop the guard in that case.
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
        .ok()
        .map(|_| guard))
}

fn read_message(arg: Option<String>) -> Result<String> {
    if let Some(message) = arg {
        return Ok(message);
    }
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("reading message from stdin")?;
    let message = decode_message(&bytes)?;
    Ok(message.to_owned())
}

fn render_text(report: &SegmentReport) -> String {
    let mut out = format!(
        "encoding: {}\nsegments: {}\nbits: {}\ngraphemes: {}\nutf16_units: {}\n",
        report.encoding.as_str(),
        report.segments,
        report.bits,
        report.graphemes,
        report.utf16_units,
    );
    if let Some(septets) = report.septets {
        out.push_str(&format!("septets: {septets}\n"));
    }
    if report.smart_encoding {
        out.push_str("smart_encoding: on\n");
    }
    out
}

fn render(report: &SegmentReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_ref())?;
    info!(target: "cli", "startup");

    let config = load_from(args.config.clone())?;
    let smart = args.smart_encoding(&config);
    let format = args.output_format(&config);
    let config_path = config.path.as_ref().map(|p| p.display().to_string());
    info!(
        target: "cli",
        config = config_path.as_deref(),
        smart,
        format = ?format,
        "bootstrap_complete"
    );

    let message = read_message(args.message)?;
    let report = analyze(&message, smart);
    let rendered = render(&report, format)?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("writing report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::ConfigFile;

    fn config(smart: bool, format: OutputFormat) -> Config {
        let mut file = ConfigFile::default();
        file.encoding.smart = smart;
        file.output.format = format;
        Config { path: None, file }
    }

    #[test]
    fn parses_message_and_flags() {
        let args = Args::try_parse_from(["smsseg", "--smart", "--json", "hello"]).unwrap();
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert!(args.smart);
        assert!(args.json);
        assert!(args.config.is_none());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from(["smsseg", "--smart", "--json", "x"]).unwrap();
        let cfg = config(false, OutputFormat::Text);
        assert!(args.smart_encoding(&cfg));
        assert_eq!(args.output_format(&cfg), OutputFormat::Json);
    }

    #[test]
    fn config_supplies_defaults() {
        let args = Args::try_parse_from(["smsseg", "x"]).unwrap();
        let cfg = config(true, OutputFormat::Json);
        assert!(args.smart_encoding(&cfg));
        assert_eq!(args.output_format(&cfg), OutputFormat::Json);
        let cfg = config(false, OutputFormat::Text);
        assert!(!args.smart_encoding(&cfg));
        assert_eq!(args.output_format(&cfg), OutputFormat::Text);
    }

    #[test]
    fn log_path_splits_into_dir_and_name() {
        let (dir, name) = split_log_path(Path::new("smsseg.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "smsseg.log");
        let (dir, name) = split_log_path(Path::new("logs/run.log")).unwrap();
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(name, "run.log");
    }

    #[test]
    fn log_path_without_file_name_is_rejected() {
        assert!(split_log_path(Path::new("/")).is_none());
        assert!(split_log_path(Path::new("..")).is_none());
        let Err(err) = configure_logging(Some(&PathBuf::from(".."))) else {
            panic!("a path without a file name must not configure logging");
        };
        assert_eq!(err.to_string(), "--log-file .. does not name a file");
    }

    #[test]
    fn explicit_message_skips_stdin() {
        assert_eq!(read_message(Some("hi".into())).unwrap(), "hi");
    }

    #[test]
    fn text_report_for_gsm_message() {
        let out = render(&analyze("hello", false), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "encoding: GSM-7\nsegments: 1\nbits: 35\ngraphemes: 5\nutf16_units: 5\nseptets: 5\n"
        );
    }

    #[test]
    fn text_report_for_ucs2_smart_message() {
        let out = render(&analyze("\u{1F600}\u{2019}", true), OutputFormat::Text).unwrap();
        assert!(out.starts_with("encoding: UCS-2\nsegments: 1\nbits: 48\n"));
        assert!(!out.contains("septets"));
        assert!(out.ends_with("smart_encoding: on\n"));
    }

    #[test]
    fn json_report_round_trips_counts() {
        let out = render(&analyze("{hi}", false), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["encoding"], "gsm7");
        assert_eq!(value["bits"], 28);
        assert_eq!(value["septets"], 6);
        assert_eq!(value["smart_encoding"], false);
    }
}
