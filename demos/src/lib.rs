// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable examples for the Zoetrope crates. See the `examples/` directory.
