//! rategate - Eligibility gating for rate-limited in-app prompts
//!
//! Command-line front end: accumulate points, check whether a review prompt
//! may be shown, ask it on the terminal, and record the answer.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the rategate CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
