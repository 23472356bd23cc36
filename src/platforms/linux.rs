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

// What raylib needs under it on linux. Order matters for static linking.
const PLATFORM_LIBS: [&str; 4] = ["-lGL", "-lm", "-ldl", "-lpthread"];

//-------------------------------------------------------------------------------//
//                             Implementations
//-------------------------------------------------------------------------------//

pub fn link_args(_profile: Profile) -> Vec<String> {
    PLATFORM_LIBS.iter().map(|x| x.to_string()).collect()
}
