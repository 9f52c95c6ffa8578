// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod identity;
pub mod image;
pub mod kubernetes;
pub mod presenter;
pub mod repositories;
pub mod types;

#[cfg(test)]
mod test_utils;
