/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

//! First boot stage sequencing: runs the platform's phases in their fixed
//! order and reports which image comes next.

mod sequencer;

pub use sequencer::{run, run_bl_stage, try_run_bl_stage, StageOutcome};
