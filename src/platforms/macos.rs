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

const PLATFORM_FRAMEWORKS: [&str; 4] = ["OpenGL", "Cocoa", "IOKit", "CoreAudio"];

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

pub fn link_args(_profile: Profile) -> Vec<String> {
    PLATFORM_FRAMEWORKS.iter()
        .flat_map(|x| ["-framework".to_owned(), x.to_string()])
        .collect()
}
