//---------------------------------------------------------------------------//
// Copyright (c) 2025-2026 Kort contributors. All rights reserved.
//
// This file is part of the Kort Build Driver (KortBuild) project,
// which can be found here: https://github.com/kort-game/kortbuild.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/kort-game/kortbuild/blob/master/LICENSE.
//---------------------------------------------------------------------------//

use super::Profile;

pub const RESOURCE_COMPILER: &str = "windres";

const PLATFORM_LIBS: [&str; 2] = ["-lgdi32", "-lwinmm"];

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

pub fn link_args(profile: Profile) -> Vec<String> {
    let mut args = PLATFORM_LIBS.iter().map(|x| x.to_string()).collect::<Vec<_>>();

    // Release builds get the windows subsystem, so launching the game doesn't pop a console window.
    if profile == Profile::Release {
        args.push("-mwindows".to_owned());
    }

    args
}

/// windres gets the icon and version metadata from the rc script into a coff object the linker understands.
pub fn resource_args(script_path: &str, object_path: &str) -> Vec<String> {
    vec![
        script_path.to_owned(),
        object_path.to_owned(),
        "--output-format=coff".to_owned(),
    ]
}
