// ABOUTME: Presentation readme-cli commands that need no database
// ABOUTME: render, ago, truncate, plural, and seed-date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

use anyhow::{anyhow, Context};
use chrono::Local;
use readme_site::config::SiteConfig;
use readme_site::constants::{formats, locale};
use readme_site::errors::AppError;
use readme_site::formatters::{
    parse_timestamp, random_past_timestamp, select_plural_form, truncate as truncate_text,
    RelativeTimeFormatter,
};
use readme_site::templates::{TemplateContext, TemplateRenderer};

/// `render <name> [--context JSON]`
pub fn render(config: &SiteConfig, name: &str, context: &str) -> anyhow::Result<()> {
    let json = serde_json::from_str(context).context("--context is not valid JSON")?;
    let context = TemplateContext::from_json_object(json)
        .ok_or_else(|| AppError::invalid_input("--context must be a JSON object"))?;

    let renderer = TemplateRenderer::from_config(&config.templates);
    let html = renderer
        .try_render(name, &context)
        .map_err(AppError::from)?;
    print!("{html}");
    Ok(())
}

/// `ago <timestamp> [--now timestamp]`
pub fn ago(timestamp: &str, now: Option<&str>) -> anyhow::Result<()> {
    let parse = |value: &str| {
        parse_timestamp(value).ok_or_else(|| {
            anyhow!(AppError::invalid_input(format!(
                "'{value}' is not a YYYY-MM-DD HH:MM:SS timestamp"
            )))
        })
    };

    let past = parse(timestamp)?;
    let now = match now {
        Some(now) => parse(now)?,
        None => Local::now().naive_local(),
    };
    println!("{}", RelativeTimeFormatter::default().format(past, now, locale::AGO));
    Ok(())
}

/// `truncate <text> [--limit N]`
pub fn truncate(text: &str, limit: usize) {
    println!("{}", truncate_text(text, limit));
}

/// `plural <number> <one> <few> <many>`
pub fn plural(number: i64, one: &str, few: &str, many: &str) {
    println!("{number} {}", select_plural_form(number, one, few, many));
}

/// `seed-date <index>`
pub fn seed_date(index: i64) {
    let at = random_past_timestamp(&mut rand::thread_rng(), index, Local::now().naive_local());
    println!("{}", at.format(formats::STORED_TIMESTAMP));
}
