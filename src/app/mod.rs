//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the input and command definitions for the tool.

use anyhow::{anyhow, Result};
use clap::{builder::PossibleValuesParser, Parser};

use crate::platforms::platform_keys_sorted;

//---------------------------------------------------------------------------//
//                          Struct/Enum Definitions
//---------------------------------------------------------------------------//

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {

    /// Make output more detailed.
    #[arg(short, long)]
    pub verbose: bool,

    /// Build with the release profile (optimized, stripped). The default is the dev profile.
    #[arg(short, long)]
    pub release: bool,

    /// Platform to build for. If not provided, the host platform is used.
    ///
    /// Note that cross-builds still need a toolchain targeting said platform in your PATH.
    #[arg(short, long, value_name = "PLATFORM", value_parser = PossibleValuesParser::new(platform_keys_sorted()))]
    pub target_platform: Option<String>,

    /// Path of the manifest file to use. If not provided, kort.toml is searched in the current folder,
    /// and if it's not there either, the default build settings are used.
    #[arg(short, long, value_name = "MANIFEST_PATH")]
    pub config: Option<String>,

    /// Base name for the generated executable. On Windows the .exe extension is added automatically.
    #[arg(short, long, value_name = "OUTPUT_NAME")]
    pub output: Option<String>,

    /// Print the resolved tool invocations without running anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// C compiler to invoke. Overrides both the manifest and the default (gcc).
    #[arg(long, value_name = "COMPILER")]
    pub compiler: Option<String>,

    /// Extra preprocessor defines to pass to the compiler, as NAME or NAME=VALUE.
    #[arg(short, long, value_parser = define_parser, value_name = "NAME[=VALUE]")]
    pub define: Option<Vec<(String, Option<String>)>>,
}

//---------------------------------------------------------------------------//
//                          Custom parsers
//---------------------------------------------------------------------------//

fn define_parser(src: &str) -> Result<(String, Option<String>)> {
    let (name, value) = match src.split_once('=') {
        Some((name, value)) => (name, Some(value.to_owned())),
        None => (src, None),
    };

    if name.is_empty() {
        return Err(anyhow!("Empty define name."));
    }

    // Same rules the preprocessor itself enforces for macro names.
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|x| x.is_ascii_alphabetic() || x == '_');
    if !valid_start || !name.chars().all(|x| x.is_ascii_alphanumeric() || x == '_') {
        return Err(anyhow!("Invalid define name: {}.", name));
    }

    Ok((name.to_owned(), value))
}

//---------------------------------------------------------------------------//
//                          Tests
//---------------------------------------------------------------------------//
