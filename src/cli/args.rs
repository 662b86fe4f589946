use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;
use log::debug;

use crate::queue::{HeapLayout, PriorityOrder, QueueKind};

/// Feed integers through a FIFO, LIFO or priority queue and print the pop order
#[derive(Parser, Debug, Default)]
#[command(name = "qdisc")]
#[command(about = "Feed integers through a FIFO, LIFO or priority queue and print the pop order")]
#[command(version)]
pub struct Args {
    /// Values to insert; read whitespace-separated from stdin when omitted
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Queue discipline: fifo, lifo or priority
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<QueueKind>,

    /// Priority order: max or min (priority queues only)
    #[arg(long, value_name = "ORDER")]
    pub order: Option<PriorityOrder>,

    /// Heap index layout: shifted or conventional (priority queues only)
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<HeapLayout>,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Configuration section name
    #[arg(long, value_name = "SECTION")]
    pub config_name: Option<String>,
}

pub fn parse_args() -> Args {
    Args::parse()
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    debug!("Validating CLI argument combinations");

    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        return Err(anyhow::anyhow!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        ));
    }

    if let Some(format) = &args.log_format {
        format
            .parse::<crate::logging::LogFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(level) = &args.log_file_level {
        crate::logging::parse_log_level(level)?;
    }

    if args.log_file_level.is_some() && args.log_file.is_none() {
        return Err(anyhow::anyhow!("--log-file-level requires --log-file"));
    }

    if args.kind.is_some_and(|kind| kind != QueueKind::Priority)
        && (args.order.is_some() || args.layout.is_some())
    {
        return Err(anyhow::anyhow!("--order and --layout only apply to priority queues"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_values_and_kind() {
        let args = parse(&["qdisc", "--kind", "priority", "5", "-1", "8"]);
        assert_eq!(args.kind, Some(QueueKind::Priority));
        assert_eq!(args.values, vec![5, -1, 8]);
        assert!(args.order.is_none());
    }

    #[test]
    fn test_parse_priority_options() {
        let args = parse(&["qdisc", "-k", "heap", "--order", "min", "--layout", "conventional"]);
        assert_eq!(args.kind, Some(QueueKind::Priority));
        assert_eq!(args.order, Some(PriorityOrder::Min));
        assert_eq!(args.layout, Some(HeapLayout::Conventional));
        assert!(args.values.is_empty());
    }

    #[test]
    fn test_invalid_kind_rejected_by_parser() {
        assert!(Args::try_parse_from(["qdisc", "--kind", "deque"]).is_err());
        assert!(Args::try_parse_from(["qdisc", "twelve"]).is_err());
    }

    #[test]
    fn test_validate_conflicting_log_flags() {
        let args = parse(&["qdisc", "--verbose", "--quiet"]);
        assert!(validate_args(&args).is_err());

        let args = parse(&["qdisc", "--debug"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_log_options() {
        let args = parse(&["qdisc", "--log-format", "xml"]);
        assert!(validate_args(&args).is_err());

        let args = parse(&["qdisc", "--log-file-level", "debug"]);
        assert!(validate_args(&args).is_err());

        let args = parse(&["qdisc", "--log-file", "/tmp/q.log", "--log-file-level", "debug"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_priority_only_options() {
        let args = parse(&["qdisc", "--kind", "fifo", "--order", "min"]);
        assert!(validate_args(&args).is_err());

        // kind may come from the config file
        let args = parse(&["qdisc", "--layout", "shifted"]);
        assert!(validate_args(&args).is_ok());
    }
}
