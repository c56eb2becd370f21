//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Translation of project records into fixture tool arguments

use crate::models::ProjectRecord;

pub const CREATE: &str = "create";
pub const NON_INTERACTIVE: &str = "-n";
pub const DIRECTORY: &str = "-d";
pub const TITLE: &str = "-t";
pub const CATEGORIES: &str = "-c";
pub const LANGUAGES: &str = "-l";
pub const PREFERRED_IDE: &str = "-p";
pub const BUILD_SYSTEMS: &str = "-b";
pub const DESCRIPTION: &str = "-D";
pub const REPOSITORY_URL: &str = "-r";

/// Build the ordered argument list for one record
///
/// Flags whose field is empty or absent are left out entirely.
pub fn build_arguments(record: &ProjectRecord) -> Vec<String> {
    let mut args = vec![
        CREATE.to_string(),
        NON_INTERACTIVE.to_string(),
        DIRECTORY.to_string(),
        record.directory.to_string_lossy().into_owned(),
        TITLE.to_string(),
        record.title.clone(),
    ];

    push_many(&mut args, CATEGORIES, record.categories.iter().cloned());
    push_many(
        &mut args,
        LANGUAGES,
        record.languages.iter().map(ToString::to_string),
    );
    push_one(
        &mut args,
        PREFERRED_IDE,
        record.preferred_ide.as_ref().map(ToString::to_string),
    );
    push_many(
        &mut args,
        BUILD_SYSTEMS,
        record.build_systems.iter().map(ToString::to_string),
    );
    push_one(&mut args, DESCRIPTION, record.description.clone());
    push_one(&mut args, REPOSITORY_URL, record.repository_url.clone());

    args
}

fn push_one(args: &mut Vec<String>, flag: &str, value: Option<String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        args.push(flag.to_string());
        args.push(value);
    }
}

fn push_many(args: &mut Vec<String>, flag: &str, values: impl Iterator<Item = String>) {
    let values: Vec<String> = values.filter(|value| !value.is_empty()).collect();
    if !values.is_empty() {
        args.push(flag.to_string());
        args.extend(values);
    }
}
