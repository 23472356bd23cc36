//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the per-platform flag tables, and the dispatch logic to pick the right one.

use anyhow::{anyhow, Result};

use std::fmt;

pub const KEY_WINDOWS: &str = "windows";
pub const KEY_LINUX: &str = "linux";
pub const KEY_MACOS: &str = "macos";

/// Closed set of platforms this tool knows how to build for, sorted by key.
const PLATFORM_KEYS: [&str; 3] = [KEY_LINUX, KEY_MACOS, KEY_WINDOWS];

/// Warning flags are the same everywhere, on both profiles.
pub const WARNING_FLAGS: [&str; 1] = ["-Wall"];

/// Raylib itself is linked the same way on every platform. What changes is what raylib needs under it.
pub const COMMON_LIBS: [&str; 1] = ["-lraylib"];

mod linux;
mod macos;
mod windows;

//---------------------------------------------------------------------------//
//                          Struct/Enum Definitions
//---------------------------------------------------------------------------//

/// Build profiles supported by the tool, matching the old build-dev/build-release scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Release,
}

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

impl Profile {

    /// Compiler flags tied to the profile alone, before any platform-specific ones.
    pub fn compiler_flags(&self) -> Vec<&'static str> {
        match self {
            Self::Dev => vec!["-g", "-O0"],
            Self::Release => vec!["-O3", "-s"],
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Release => write!(f, "release"),
        }
    }
}

pub fn platform_keys_sorted() -> Vec<&'static str> {
    PLATFORM_KEYS.to_vec()
}

/// This function returns the platform key matching the host, or an error if the host is not a supported build target.
pub fn detect_host_platform() -> Result<&'static str> {
    match std::env::consts::OS {
        "windows" => Ok(KEY_WINDOWS),
        "linux" => Ok(KEY_LINUX),
        "macos" => Ok(KEY_MACOS),
        os => Err(anyhow!("Unsupported host platform: {}.", os)),
    }
}

/// Name of the executable the build produces for the provided platform.
pub fn executable_name(platform: &str, base_name: &str) -> Result<String> {
    match platform {
        KEY_WINDOWS => Ok(format!("{}.exe", base_name)),
        KEY_LINUX |
        KEY_MACOS => Ok(base_name.to_owned()),
        _ => Err(anyhow!("Unsupported platform: {}.", platform)),
    }
}

/// Linker arguments (libraries/frameworks and linker-level flags) for the provided platform and profile.
///
/// These go after the common libs, so they can depend on symbols from them.
pub fn link_args(platform: &str, profile: Profile) -> Result<Vec<String>> {
    match platform {
        KEY_WINDOWS => Ok(windows::link_args(profile)),
        KEY_LINUX => Ok(linux::link_args(profile)),
        KEY_MACOS => Ok(macos::link_args(profile)),
        _ => Err(anyhow!("Unsupported platform: {}.", platform)),
    }
}

/// Whether the platform needs a resource-compilation step before the compiler runs.
///
/// Only Windows does, to get the icon and the exe metadata embedded.
pub fn uses_resource_step(platform: &str) -> bool {
    matches!(platform, KEY_WINDOWS)
}

/// Arguments for the resource compiler, for platforms that use one.
pub fn resource_args(platform: &str, script_path: &str, object_path: &str) -> Result<Vec<String>> {
    match platform {
        KEY_WINDOWS => Ok(windows::resource_args(script_path, object_path)),
        _ => Err(anyhow!("Platform {} has no resource-compilation step.", platform)),
    }
}

/// Name of the resource compiler binary, for platforms that use one.
pub fn resource_compiler(platform: &str) -> Result<&'static str> {
    match platform {
        KEY_WINDOWS => Ok(windows::RESOURCE_COMPILER),
        _ => Err(anyhow!("Platform {} has no resource-compilation step.", platform)),
    }
}

//---------------------------------------------------------------------------//
//                          Tests
//---------------------------------------------------------------------------//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_keys_are_sorted_and_closed() {
        assert_eq!(platform_keys_sorted(), vec!["linux", "macos", "windows"]);
    }

    #[test]
    fn profile_flags_match_the_old_scripts() {
        assert_eq!(Profile::Dev.compiler_flags(), vec!["-g", "-O0"]);
        assert_eq!(Profile::Release.compiler_flags(), vec!["-O3", "-s"]);
    }

    #[test]
    fn windows_link_args_per_profile() {
        assert_eq!(link_args(KEY_WINDOWS, Profile::Dev).unwrap(), vec!["-lgdi32", "-lwinmm"]);
        assert_eq!(link_args(KEY_WINDOWS, Profile::Release).unwrap(), vec!["-lgdi32", "-lwinmm", "-mwindows"]);
    }

    #[test]
    fn linux_link_args_ignore_profile() {
        let expected = vec!["-lGL", "-lm", "-ldl", "-lpthread"];
        assert_eq!(link_args(KEY_LINUX, Profile::Dev).unwrap(), expected);
        assert_eq!(link_args(KEY_LINUX, Profile::Release).unwrap(), expected);
    }

    #[test]
    fn macos_link_args_use_framework_pairs() {
        let expected = vec![
            "-framework", "OpenGL",
            "-framework", "Cocoa",
            "-framework", "IOKit",
            "-framework", "CoreAudio",
        ];
        assert_eq!(link_args(KEY_MACOS, Profile::Dev).unwrap(), expected);
        assert_eq!(link_args(KEY_MACOS, Profile::Release).unwrap(), expected);
    }

    #[test]
    fn link_args_reject_unknown_platforms() {
        assert!(link_args("freebsd", Profile::Dev).is_err());
    }

    #[test]
    fn only_windows_uses_a_resource_step() {
        assert!(uses_resource_step(KEY_WINDOWS));
        assert!(!uses_resource_step(KEY_LINUX));
        assert!(!uses_resource_step(KEY_MACOS));

        assert!(resource_args(KEY_LINUX, "./icon.rc", "./icon.res").is_err());
        assert!(resource_compiler(KEY_MACOS).is_err());
    }

    #[test]
    fn windows_resource_args_match_windres_syntax() {
        assert_eq!(
            resource_args(KEY_WINDOWS, "./icon.rc", "./icon.res").unwrap(),
            vec!["./icon.rc", "./icon.res", "--output-format=coff"]
        );
    }

    #[test]
    fn executable_names_per_platform() {
        assert_eq!(executable_name(KEY_WINDOWS, "kort").unwrap(), "kort.exe");
        assert_eq!(executable_name(KEY_LINUX, "kort").unwrap(), "kort");
        assert_eq!(executable_name(KEY_MACOS, "kort").unwrap(), "kort");
        assert!(executable_name("freebsd", "kort").is_err());
    }
}
