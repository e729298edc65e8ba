// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod currency;
pub mod db;
pub mod insights;
pub mod mapper;
pub mod models;
pub mod query;
pub mod splitwise;
pub mod store;
pub mod sync;
pub mod tools;
pub mod utils;
