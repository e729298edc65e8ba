// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod query;
pub mod reports;
pub mod sync;
