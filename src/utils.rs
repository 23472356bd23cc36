//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::path::PathBuf;

use crate::manifest::MANIFEST_FILE_NAME;

//-------------------------------------------------------------------------------//
//                             Util functions.
//-------------------------------------------------------------------------------//

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kortbuild=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kortbuild=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// This function returns the current config path, or an error if said path is not available.
///
/// Note: On `Debug´ mode this is the folder you execute the tool from, which should be the root of the repo.
pub fn config_path() -> Result<PathBuf> {
    if cfg!(debug_assertions) { std::env::current_dir().map_err(From::from) } else {
        match ProjectDirs::from("com", "KortGame", "kortbuild") {
            Some(proj_dirs) => Ok(proj_dirs.config_dir().to_path_buf()),
            None => Err(anyhow!("Failed to get the config path."))
        }
    }
}

/// This function returns the path of the manifest to use, if any.
///
/// An explicit path must exist. Without one, we check the current folder first, then the config folder,
/// and a manifest missing from both just means the default build settings apply.
pub fn resolve_manifest_path(explicit_path: &Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(anyhow!("Manifest not found at {}.", path.display()));
        }

        return Ok(Some(path));
    }

    let local_path = PathBuf::from(MANIFEST_FILE_NAME);
    if local_path.is_file() {
        return Ok(Some(local_path));
    }

    if let Ok(config_path) = config_path() {
        let config_manifest_path = config_path.join(MANIFEST_FILE_NAME);
        if config_manifest_path.is_file() {
            return Ok(Some(config_manifest_path));
        }
    }

    Ok(None)
}

//---------------------------------------------------------------------------//
//                          Tests
//---------------------------------------------------------------------------//
