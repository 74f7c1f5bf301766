use std::fmt;
use std::io;

use colored::*;
use kennel_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Target of terminal output routed through tracing. Events on it are
/// written to stdout as-is.
pub const PRINT_TARGET: &str = "kennel::print";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs two layers: raw terminal output on stdout, and diagnostics on
/// stderr filtered by `RUST_LOG`.
pub fn init_logging(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let print_layer = tracing_subscriber::fmt::layer()
        .event_format(PrintFormatter)
        .with_ansi(!cfg.no_color)
        .with_writer(io::stdout)
        .with_filter(filter_fn(|meta| meta.target() == PRINT_TARGET));

    let log_layer = tracing_subscriber::fmt::layer()
        .event_format(KennelFormatter)
        .with_ansi(!cfg.no_color)
        .with_writer(io::stderr)
        .with_filter(filter_fn(|meta| meta.target() != PRINT_TARGET))
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(print_layer)
        .with(log_layer)
        .init();
}

pub struct KennelFormatter;

impl<S, N> FormatEvent<S, N> for KennelFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Writes only the `raw_msg` field of an event, followed by a newline.
pub struct PrintFormatter;

impl<S, N> FormatEvent<S, N> for PrintFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut raw = RawMessage::default();
        event.record(&mut raw);
        writeln!(writer, "{}", raw.0)
    }
}

#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}
