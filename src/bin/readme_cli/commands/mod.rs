// ABOUTME: Command handlers for readme-cli
// ABOUTME: Database-backed commands and pure presentation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors

pub mod database;
pub mod present;
