//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the definition of the kort.toml manifest, and its defaults.
//!
//! Every field is optional. A missing manifest (or an empty one) behaves exactly
//! like the old build scripts did, with everything hardcoded to the repo layout.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use crate::platforms::platform_keys_sorted;

/// Name of the manifest file searched in the current folder when no explicit path is provided.
pub const MANIFEST_FILE_NAME: &str = "kort.toml";

const DEFAULT_NAME: &str = "kort";
const DEFAULT_COMPILER: &str = "gcc";
const DEFAULT_SOURCE: &str = "./src/main.c";
const DEFAULT_INCLUDE_DIR: &str = "./src/include";
const DEFAULT_LIB_DIR: &str = "./src/lib";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_RESOURCE_SCRIPT: &str = "./icon.rc";
const DEFAULT_RESOURCE_OBJECT: &str = "./icon.res";

//---------------------------------------------------------------------------//
//                          Struct/Enum Definitions
//---------------------------------------------------------------------------//

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {

    #[serde(default)]
    project: ProjectSection,

    #[serde(default)]
    paths: PathsSection,

    #[serde(default)]
    libraries: LibrariesSection,

    #[serde(default)]
    resource: ResourceSection,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectSection {
    name: Option<String>,
    sources: Option<Vec<String>>,
    compiler: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsSection {
    include_dirs: Option<Vec<String>>,
    lib_dirs: Option<Vec<String>>,
    output_dir: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LibrariesSection {

    /// Extra library names to link, keyed by platform. Names, not flags, so "m", not "-lm".
    extra: Option<HashMap<String, Vec<String>>>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceSection {
    script: Option<String>,
    object: Option<String>,
}

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

impl Manifest {

    /// This function loads a manifest from the provided path, failing on malformed
    /// toml, unknown sections, or platform keys outside the supported set.
    pub fn load(path: &Path) -> Result<Self> {
        let data = read_to_string(path).with_context(|| format!("Failed to read the manifest at {}.", path.display()))?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(data).context("Failed to parse the manifest.")?;

        if let Some(ref extra) = manifest.libraries.extra {
            for key in extra.keys() {
                if !platform_keys_sorted().iter().any(|platform| *platform == key.as_str()) {
                    return Err(anyhow!("Unknown platform in [libraries.extra]: {}.", key));
                }
            }
        }

        Ok(manifest)
    }

    pub fn name(&self) -> &str {
        self.project.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn compiler(&self) -> &str {
        self.project.compiler.as_deref().unwrap_or(DEFAULT_COMPILER)
    }

    pub fn sources(&self) -> Vec<String> {
        match self.project.sources {
            Some(ref sources) => sources.to_vec(),
            None => vec![DEFAULT_SOURCE.to_owned()],
        }
    }

    pub fn include_dirs(&self) -> Vec<String> {
        match self.paths.include_dirs {
            Some(ref dirs) => dirs.to_vec(),
            None => vec![DEFAULT_INCLUDE_DIR.to_owned()],
        }
    }

    pub fn lib_dirs(&self) -> Vec<String> {
        match self.paths.lib_dirs {
            Some(ref dirs) => dirs.to_vec(),
            None => vec![DEFAULT_LIB_DIR.to_owned()],
        }
    }

    pub fn output_dir(&self) -> &str {
        self.paths.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub fn extra_libs(&self, platform: &str) -> Vec<String> {
        self.libraries.extra
            .as_ref()
            .and_then(|extra| extra.get(platform))
            .map(|libs| libs.to_vec())
            .unwrap_or_default()
    }

    pub fn resource_script(&self) -> &str {
        self.resource.script.as_deref().unwrap_or(DEFAULT_RESOURCE_SCRIPT)
    }

    pub fn resource_object(&self) -> &str {
        self.resource.object.as_deref().unwrap_or(DEFAULT_RESOURCE_OBJECT)
    }
}

//---------------------------------------------------------------------------//
//                          Tests
//---------------------------------------------------------------------------//
