// Copyright (c) The channel-network Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod fixtures;
mod toposort_tests;
mod waterbody_tests;
