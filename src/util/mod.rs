// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization lives here because both sides of a comparison go
//! through it: queries at search time, field values at snapshot build time.

pub mod normalize;
