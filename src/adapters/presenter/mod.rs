//! Presenter adapters - human-readable rendering of estimation results.

mod text_report;

pub use text_report::{lived_line, render_banner, render_breakdown, render_report, DISCLAIMER};
