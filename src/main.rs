//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is a small CLI tool to build the Kort game executable on any of the supported platforms.

use clap::Parser;
use tracing::{error, info};

use std::process::exit;

use crate::app::Cli;
use crate::builder::{BuildPlan, ToolFailed};
use crate::manifest::Manifest;
use crate::platforms::*;
use crate::utils::*;

mod app;
mod builder;
mod manifest;
mod platforms;
mod utils;

/// Guess you know what this function does....
fn main() {

    // Parse the entire cli command. Logging verbosity depends on it, so it goes first.
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // Figure out what platform we're building for. An explicit one wins over host detection.
    let platform = match &cli.target_platform {
        Some(platform) => platform.to_owned(),
        None => match detect_host_platform() {
            Ok(platform) => platform.to_owned(),
            Err(error) => return error_path(&error.to_string()),
        },
    };

    info!("Building for platform: {}.", platform);

    let manifest_path = match resolve_manifest_path(&cli.config) {
        Ok(path) => path,
        Err(error) => return error_path(&error.to_string()),
    };

    let manifest = match manifest_path {
        Some(ref path) => {
            if cli.verbose {
                info!("Manifest file path: {}.", path.display());
            }

            match Manifest::load(path) {
                Ok(manifest) => manifest,
                Err(error) => return error_path(&error.to_string()),
            }
        }
        None => {
            info!("No manifest file found. Using the default build settings.");
            Manifest::default()
        }
    };

    let profile = if cli.release { Profile::Release } else { Profile::Dev };
    info!("Build profile: {}.", profile);

    // With all the inputs gathered, resolve the full list of tool invocations for this build.
    let plan = match BuildPlan::resolve(&cli, &manifest, &platform, profile) {
        Ok(plan) => plan,
        Err(error) => return error_path(&error.to_string()),
    };

    if cli.verbose {
        info!("Resolved a {} build for {} with {} step(s).", plan.profile(), plan.platform(), plan.steps().len());

        for step in plan.steps() {
            info!("Resolved step: {}.", step.command_line());
        }
    }

    if let Err(error) = plan.execute(cli.dry_run) {

        // If an external tool failed, its own exit status is what the invoker gets.
        if let Some(failure) = error.downcast_ref::<ToolFailed>() {
            error!("{}", failure);
            exit(failure.code());
        }

        return error_path(&error.to_string());
    }

    info!("Build finished successfully.");

    exit(0)
}

fn error_path(error: &str) {
    error!("{}", error.to_string());

    exit(1);
}
