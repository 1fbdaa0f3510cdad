//! spark-bot - webhook bootstrap for a Webex chat bot
//!
//! Layers follow the usual split: `domain` holds the message and command
//! types, `application` the bot context and controller, `infrastructure`
//! config, skill loading and the HTTP surface. Built-in skills live in
//! `skills`.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod skills;

use application::messaging::Controller;
use infrastructure::config::SkillsConfig;
use infrastructure::plugins::{LoadReport, SkillCatalog, SkillLoader};

/// Activate the configured skills on `controller`.
///
/// With a skills directory configured its entries pick the skills; if the
/// directory cannot be read every catalog skill is activated instead.
pub fn load_skills(
    catalog: &SkillCatalog,
    config: &SkillsConfig,
    controller: &mut Controller,
) -> LoadReport {
    let loader = SkillLoader::new(catalog).with_helpers(config.helpers.iter().cloned());

    let entries = match config.directory.as_deref().map(SkillLoader::scan) {
        Some(Ok(entries)) => entries,
        Some(Err(e)) => {
            tracing::warn!("{}, activating built-in skills", e);
            loader.builtin_entries()
        }
        None => loader.builtin_entries(),
    };

    let report = loader.load_all(&entries, controller);
    tracing::info!(
        "Skills: {} loaded, {} failed, {} attempted",
        report.loaded().len(),
        report.failed().len(),
        report.attempts()
    );
    report
}
