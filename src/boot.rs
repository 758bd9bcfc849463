use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::{SiteConfig, CONFIG_FILE};
use crate::models::{experience, post};

/// Asset subdirectories under `static_dir`, created if missing.
const ASSET_DIRS: &[&str] = &["stock", "logos"];

/// Counts from one pass of the boot checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing asset directories, warns about missing images and
/// aborts if the config is invalid or the directories cannot be made.
pub fn run(config: &SiteConfig) {
    info!("{} boot check starting...", config.site_name);

    let mut report = check(config);

    if !Path::new(CONFIG_FILE).exists() {
        warn!("  {} not found, using built-in defaults", CONFIG_FILE);
        report.warnings += 1;
    }

    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default server config");
        report.warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    } else if report.warnings > 0 {
        warn!("Boot check passed with {} warning(s).", report.warnings);
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// The checks behind `run`, without the process exit.
pub fn check(config: &SiteConfig) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Config ───────────────────────────────────────
    if let Err(e) = config.validate() {
        error!("  Invalid site config: {}", e);
        report.errors += 1;
    }

    // ── 2. Directories ─────────────────────────────────
    let root = Path::new(&config.static_dir);
    for dir in std::iter::once(root.to_path_buf()).chain(ASSET_DIRS.iter().map(|d| root.join(d))) {
        if !dir.exists() {
            match fs::create_dir_all(&dir) {
                Ok(_) => info!("  Created directory: {}", dir.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir.display(), e);
                    report.errors += 1;
                }
            }
        }
    }

    // ── 3. Referenced images ───────────────────────────
    for image in referenced_images() {
        let path = root.join(image.trim_start_matches('/'));
        if !path.exists() {
            warn!("  Missing image: {} (pages will show a broken image)", path.display());
            report.warnings += 1;
        }
    }

    report
}

/// Every image path the pages link to, relative to the site root.
pub fn referenced_images() -> Vec<&'static str> {
    let mut images = vec!["/profile.jpg", "/logos/send.jpg"];
    images.extend(post::all().iter().map(|p| p.image));
    images.extend(experience::experience().iter().map(|e| e.logo));
    images.extend(experience::education().iter().map(|e| e.logo));
    images.sort_unstable();
    images.dedup();
    images
}
