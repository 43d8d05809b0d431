pub mod config;
pub mod round_file;

use anyhow::{Context, Result};
use serde::Serialize;

use fairway_core::course::{self, Course};

/// Render `value` as JSON, indented when `pretty` is set.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("failed to serialize output")
}

/// A built-in course as listed by `fairway presets`.
#[derive(Debug, Clone, Serialize)]
pub struct PresetListing {
    pub key: &'static str,
    pub name: String,
    pub total_par: u32,
    pub course: Course,
}

pub fn preset_listings() -> Vec<PresetListing> {
    course::presets()
        .into_iter()
        .map(|(key, course)| PresetListing {
            key,
            name: course.name.clone(),
            total_par: course.total_par(),
            course,
        })
        .collect()
}
