//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Data generators for creating randomized project records

pub mod project;
pub mod utils;

pub use project::RecordGenerator;
pub use utils::{sample_unique, MAX_DRAW_ATTEMPTS};
