use std::fmt;

use colored::*;
use rentr_common::macros::STATUS_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Installs the global subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let rust_log: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(rust_log.as_deref(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(RentrFormatter)
        .init();
    Ok(())
}

/// Turns `directives` (or the default level) into a filter.
///
/// Terminal output and status lines are the user interface, so their targets
/// stay at `info` whatever the directives say.
pub fn build_filter(directives: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let default_level: &str = if verbose { "debug" } else { "info" };
    let mut filter: EnvFilter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    for target in [PRINT_TARGET, STATUS_TARGET] {
        let directive: Directive = format!("{target}=info").parse()?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

pub struct RentrFormatter;

impl<S, N> FormatEvent<S, N> for RentrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if let Some(raw_msg) = fields.raw_msg {
            return writeln!(writer, "{raw_msg}");
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*event.metadata().level(), fields.status.as_deref()) {
                (_, Some("success")) => ("[+]", |s| s.green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[*]", |s| s.cyan().bold()),
                (Level::WARN, _) => ("[*]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        for (key, value) in &fields.extra {
            write!(writer, " {}={}", key.dimmed(), value)?;
        }
        writeln!(writer)
    }
}

/// Splits an event into the parts the formatter cares about.
#[derive(Default)]
struct EventFields {
    raw_msg: Option<String>,
    status: Option<String>,
    message: String,
    extra: Vec<(&'static str, String)>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            name => self.extra.push((name, value.to_string())),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            name => self.extra.push((name, format!("{value:?}"))),
        }
    }
}
