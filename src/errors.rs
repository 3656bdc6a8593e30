// ABOUTME: Re-exports the unified error types from readme-core
// ABOUTME: Keeps crate::errors paths stable for the application modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

pub use readme_core::errors::*;
