// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod cell;

pub use cell::MetadataCell;
pub use glacier_type::Error;

pub type Result<T> = std::result::Result<T, Error>;
