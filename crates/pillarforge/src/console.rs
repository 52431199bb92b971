//! Colorful console output for selector events.
//!
//! Provides a `tracing` layer that formats pillar selector events with
//! colors. Enabled with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`; defaults to `pillarforge_solver=debug`. Does nothing if
/// another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pillarforge_solver=debug"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PillarConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats selector events with colors.
pub struct PillarConsoleLayer;

impl<S: Subscriber> Layer<S> for PillarConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Only handle pillarforge_solver events
        if !target.starts_with("pillarforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    step: Option<String>,
    entity_type: Option<String>,
    variables: Option<String>,
    sub_pillar_policy: Option<String>,
    selection_order: Option<String>,
    descriptor_index: Option<u64>,
    partition_size: Option<u64>,
    candidate_pillars: Option<u64>,
    pillar: Option<u64>,
    size: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "step" => self.step = Some(s),
            "entity_type" => self.entity_type = Some(s.trim_matches('"').to_string()),
            "variables" => self.variables = Some(s),
            "sub_pillar_policy" => self.sub_pillar_policy = Some(s),
            "selection_order" => self.selection_order = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "descriptor_index" => self.descriptor_index = Some(value),
            "partition_size" => self.partition_size = Some(value),
            "candidate_pillars" => self.candidate_pillars = Some(value),
            "pillar" => self.pillar = Some(value),
            "size" => self.size = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "entity_type" => self.entity_type = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.message.as_deref().unwrap_or("") {
        "Built pillar selector" => format_selector_built(v),
        "Rebuilt pillar partition" => format_partition(v),
        "Sampled subpillar" => format_sample(v),
        _ => String::new(),
    }
}

fn format_selector_built(v: &EventVisitor) -> String {
    let entity_type = v.entity_type.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} variables {}, policy {}, order {}",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[{}]", entity_type).bright_cyan(),
        v.variables.as_deref().unwrap_or("[]").white(),
        v.sub_pillar_policy.as_deref().unwrap_or("?").bright_magenta(),
        v.selection_order.as_deref().unwrap_or("?").yellow()
    )
}

fn format_partition(v: &EventVisitor) -> String {
    let partition_size = v.partition_size.unwrap_or(0);
    let candidates = v.candidate_pillars.unwrap_or(0);

    format!(
        "{} {} {} {} pillars ({}), candidates ({})",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[descriptor {}]", v.descriptor_index.unwrap_or(0)).bright_cyan(),
        v.step.as_deref().unwrap_or("step#?").white().bold(),
        partition_size.to_formatted_string(&Locale::en).bright_yellow(),
        candidates.to_formatted_string(&Locale::en).bright_green()
    )
}

fn format_sample(v: &EventVisitor) -> String {
    format!(
        "    {} pillar {:>5} | size {}",
        "->".bright_blue(),
        v.pillar.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.size.unwrap_or(0).to_string().yellow()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
