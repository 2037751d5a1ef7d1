// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Small value types shared by the compiler and the executor.

pub mod bounds;
pub mod byte_set;
