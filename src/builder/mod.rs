//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the build plan, meaning the resolved list of tool invocations, and the logic to run them.

use anyhow::{Context, Result};
use getset::Getters;
use itertools::Itertools;
use thiserror::Error;
use tracing::info;

use std::iter::once;
use std::path::PathBuf;
use std::process::Command;

use crate::app::Cli;
use crate::manifest::Manifest;
use crate::platforms::*;

//---------------------------------------------------------------------------//
//                          Struct/Enum Definitions
//---------------------------------------------------------------------------//

/// One external tool run, fully resolved. The args are kept ordered, as both windres and gcc care about order.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
}

/// Resolved build: the platform and profile it was resolved for, and the steps to run, in order.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct BuildPlan {
    platform: String,
    profile: Profile,
    steps: Vec<ToolInvocation>,
}

/// Error for when an external tool ran, but exited with a non-zero status.
///
/// The status is kept around so the invoker gets the tool's own exit code, not a generic one.
#[derive(Debug, Error)]
#[error("Tool {tool} failed with exit status {code}.")]
pub struct ToolFailed {
    tool: String,
    code: i32,
}

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

impl ToolInvocation {

    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_owned(),
            args,
        }
    }

    /// Full command line, for logging. Spaces inside args are the caller's problem, we only run arg vectors.
    pub fn command_line(&self) -> String {
        once(&self.program).chain(self.args.iter()).join(" ")
    }

    fn run(&self) -> Result<()> {
        let status = Command::new(self.program())
            .args(self.args())
            .status()
            .with_context(|| format!("Failed to run {} - is it installed and in your PATH?", self.program))?;

        if !status.success() {
            return Err(ToolFailed {
                tool: self.program.to_owned(),
                code: status.code().unwrap_or(1),
            }.into());
        }

        Ok(())
    }
}

impl ToolFailed {

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl BuildPlan {

    /// This function resolves the full list of tool invocations for a build, from the cli options,
    /// the manifest and the static per-platform flag tables. It does no I/O and runs nothing.
    pub fn resolve(cli: &Cli, manifest: &Manifest, platform: &str, profile: Profile) -> Result<Self> {
        let compiler = cli.compiler.as_deref().unwrap_or(manifest.compiler());
        let base_name = cli.output.as_deref().unwrap_or(manifest.name());

        let output_path = PathBuf::from(manifest.output_dir())
            .join(executable_name(platform, base_name)?)
            .to_string_lossy()
            .replace('\\', "/");

        let mut steps = vec![];

        // The resource step goes first on the platforms that have one, and its object gets linked in.
        let mut resource_objects = vec![];
        if uses_resource_step(platform) {
            let script = manifest.resource_script();
            let object = manifest.resource_object();

            steps.push(ToolInvocation::new(
                resource_compiler(platform)?,
                resource_args(platform, script, object)?,
            ));

            resource_objects.push(object.to_owned());
        }

        let mut args = manifest.sources();
        args.append(&mut resource_objects);
        args.extend(profile.compiler_flags().iter().map(|x| x.to_string()));
        args.extend(WARNING_FLAGS.iter().map(|x| x.to_string()));

        if let Some(ref defines) = cli.define {
            for (name, value) in defines {
                match value {
                    Some(value) => args.push(format!("-D{}={}", name, value)),
                    None => args.push(format!("-D{}", name)),
                }
            }
        }

        args.extend(manifest.include_dirs().iter().map(|x| format!("-I{}", x)));
        args.extend(manifest.lib_dirs().iter().map(|x| format!("-L{}", x)));
        args.extend(COMMON_LIBS.iter().map(|x| x.to_string()));
        args.extend(link_args(platform, profile)?);
        args.extend(manifest.extra_libs(platform).iter().map(|x| format!("-l{}", x)));

        args.push("-o".to_owned());
        args.push(output_path);

        steps.push(ToolInvocation::new(compiler, args));

        Ok(Self {
            platform: platform.to_owned(),
            profile,
            steps,
        })
    }

    /// This function runs every step of the plan, in order, each one to completion before the next starts.
    ///
    /// The first failing step aborts the whole build.
    pub fn execute(&self, dry_run: bool) -> Result<()> {
        for step in &self.steps {
            if dry_run {
                info!("Would run: {}.", step.command_line());
                continue;
            }

            info!("Running: {}.", step.command_line());
            step.run()?;
        }

        Ok(())
    }
}

//---------------------------------------------------------------------------//
//                          Tests
//---------------------------------------------------------------------------//

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_defaults() -> Cli {
        Cli {
            verbose: false,
            release: false,
            target_platform: None,
            config: None,
            output: None,
            dry_run: false,
            compiler: None,
            define: None,
        }
    }

    #[test]
    fn dev_plan_for_windows_matches_the_old_script() {
        let cli = cli_with_defaults();
        let manifest = Manifest::default();
        let plan = BuildPlan::resolve(&cli, &manifest, KEY_WINDOWS, Profile::Dev).unwrap();

        assert_eq!(plan.steps().len(), 2);
        assert_eq!(plan.steps()[0], ToolInvocation::new("windres", vec![
            "./icon.rc".to_owned(),
            "./icon.res".to_owned(),
            "--output-format=coff".to_owned(),
        ]));
        assert_eq!(plan.steps()[1], ToolInvocation::new("gcc", vec![
            "./src/main.c".to_owned(),
            "./icon.res".to_owned(),
            "-g".to_owned(),
            "-O0".to_owned(),
            "-Wall".to_owned(),
            "-I./src/include".to_owned(),
            "-L./src/lib".to_owned(),
            "-lraylib".to_owned(),
            "-lgdi32".to_owned(),
            "-lwinmm".to_owned(),
            "-o".to_owned(),
            "./kort.exe".to_owned(),
        ]));
    }

    #[test]
    fn release_plan_for_windows_keeps_the_resource_step() {
        let mut cli = cli_with_defaults();
        cli.release = true;

        let manifest = Manifest::default();
        let plan = BuildPlan::resolve(&cli, &manifest, KEY_WINDOWS, Profile::Release).unwrap();

        assert_eq!(plan.steps().len(), 2);
        assert_eq!(plan.steps()[0].program(), "windres");

        let args = plan.steps()[1].args();
        assert!(args.contains(&"./icon.res".to_owned()));
        assert!(args.contains(&"-O3".to_owned()));
        assert!(args.contains(&"-s".to_owned()));
        assert!(args.contains(&"-mwindows".to_owned()));
        assert!(!args.contains(&"-g".to_owned()));
    }

    #[test]
    fn release_plan_for_linux_matches_the_old_script() {
        let mut cli = cli_with_defaults();
        cli.release = true;

        let manifest = Manifest::default();
        let plan = BuildPlan::resolve(&cli, &manifest, KEY_LINUX, Profile::Release).unwrap();

        assert_eq!(plan.steps().len(), 1);
        assert_eq!(plan.steps()[0], ToolInvocation::new("gcc", vec![
            "./src/main.c".to_owned(),
            "-O3".to_owned(),
            "-s".to_owned(),
            "-Wall".to_owned(),
            "-I./src/include".to_owned(),
            "-L./src/lib".to_owned(),
            "-lraylib".to_owned(),
            "-lGL".to_owned(),
            "-lm".to_owned(),
            "-ldl".to_owned(),
            "-lpthread".to_owned(),
            "-o".to_owned(),
            "./kort".to_owned(),
        ]));
    }

    #[test]
    fn macos_plan_links_the_frameworks() {
        let cli = cli_with_defaults();
        let manifest = Manifest::default();
        let plan = BuildPlan::resolve(&cli, &manifest, KEY_MACOS, Profile::Dev).unwrap();

        assert_eq!(plan.steps().len(), 1);

        let args = plan.steps()[0].args().join(" ");
        assert!(args.contains("-framework OpenGL"));
        assert!(args.contains("-framework Cocoa"));
        assert!(args.contains("-framework IOKit"));
        assert!(args.contains("-framework CoreAudio"));
        assert!(args.ends_with("-o ./kort"));
    }

    #[test]
    fn cli_overrides_beat_the_manifest() {
        let mut cli = cli_with_defaults();
        cli.compiler = Some("clang".to_owned());
        cli.output = Some("kort-nightly".to_owned());
        cli.define = Some(vec![
            ("KORT_DEBUG".to_owned(), None),
            ("MAX_FILES".to_owned(), Some("512".to_owned())),
        ]);

        let manifest = Manifest::default();
        let plan = BuildPlan::resolve(&cli, &manifest, KEY_LINUX, Profile::Dev).unwrap();

        let step = &plan.steps()[0];
        assert_eq!(step.program(), "clang");
        assert!(step.args().contains(&"-DKORT_DEBUG".to_owned()));
        assert!(step.args().contains(&"-DMAX_FILES=512".to_owned()));
        assert!(step.args().contains(&"./kort-nightly".to_owned()));
    }

    #[test]
    fn extra_libs_only_apply_to_their_platform() {
        let cli = cli_with_defaults();
        let manifest = Manifest::from_toml_str("[libraries.extra]\nlinux = [\"X11\"]\n").unwrap();

        let linux_plan = BuildPlan::resolve(&cli, &manifest, KEY_LINUX, Profile::Dev).unwrap();
        assert!(linux_plan.steps()[0].args().contains(&"-lX11".to_owned()));

        let macos_plan = BuildPlan::resolve(&cli, &manifest, KEY_MACOS, Profile::Dev).unwrap();
        assert!(!macos_plan.steps()[0].args().contains(&"-lX11".to_owned()));
    }

    #[test]
    fn resolve_rejects_unknown_platforms() {
        let cli = cli_with_defaults();
        let manifest = Manifest::default();
        assert!(BuildPlan::resolve(&cli, &manifest, "freebsd", Profile::Dev).is_err());
    }

    #[test]
    fn dry_run_never_runs_the_tools() {
        let plan = BuildPlan {
            platform: KEY_LINUX.to_owned(),
            profile: Profile::Dev,
            steps: vec![ToolInvocation::new("definitely-not-a-real-tool", vec![])],
        };

        assert!(plan.execute(true).is_ok());
    }

    #[test]
    fn missing_tools_are_reported_as_such() {
        let plan = BuildPlan {
            platform: KEY_LINUX.to_owned(),
            profile: Profile::Dev,
            steps: vec![ToolInvocation::new("definitely-not-a-real-tool", vec![])],
        };

        let error = plan.execute(false).unwrap_err();
        assert!(error.downcast_ref::<ToolFailed>().is_none());
    }

    #[test]
    #[cfg(unix)]
    fn failing_tools_abort_with_their_own_exit_code() {
        let plan = BuildPlan {
            platform: KEY_LINUX.to_owned(),
            profile: Profile::Dev,
            steps: vec![
                ToolInvocation::new("false", vec![]),
                ToolInvocation::new("true", vec![]),
            ],
        };

        let error = plan.execute(false).unwrap_err();
        let failure = error.downcast_ref::<ToolFailed>().unwrap();
        assert_eq!(failure.code(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn successful_steps_run_in_order() {
        let plan = BuildPlan {
            platform: KEY_LINUX.to_owned(),
            profile: Profile::Dev,
            steps: vec![
                ToolInvocation::new("true", vec![]),
                ToolInvocation::new("true", vec![]),
            ],
        };

        assert!(plan.execute(false).is_ok());
    }

    #[test]
    fn command_lines_are_printable() {
        let invocation = ToolInvocation::new("windres", vec!["./icon.rc".to_owned(), "./icon.res".to_owned()]);
        assert_eq!(invocation.command_line(), "windres ./icon.rc ./icon.res");
    }
}
