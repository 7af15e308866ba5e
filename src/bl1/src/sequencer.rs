use bl1_soc::arm::{Bl1Error, Bl1Platform, EntryPointInfo, NextImageDecision};
use bootstate::{BootState, StateTracker};
use log::{error, info};
use meminfo::TrustedMemoryLayout;

/// Result of a completed stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StageOutcome {
    pub decision: NextImageDecision,
    /// Trusted SRAM left to the next stage
    pub layout: TrustedMemoryLayout,
    pub entry_point: EntryPointInfo,
}

fn run_states<P: Bl1Platform>(
    plat: &mut P,
    tracker: &mut StateTracker,
) -> Result<StageOutcome, Bl1Error> {
    let layout = tracker.run(BootState::EarlySetup, || plat.early_platform_setup())?;
    tracker.run(BootState::ArchSetup, || plat.arch_setup(&layout))?;
    tracker.run(BootState::PlatformSetup, || plat.platform_setup())?;

    let decision = plat.next_image_id();
    info!("BL1: next image is {decision}");
    let entry_point = plat.entry_point_info(decision);

    tracker.run(BootState::ExitPrep, || {
        plat.prepare_exit(&entry_point);
        Ok::<_, Bl1Error>(())
    })?;
    tracker.enter(BootState::Done)?;

    Ok(StageOutcome {
        decision,
        layout,
        entry_point,
    })
}

/// Run every state of the stage. The first failing phase ends the stage;
/// nothing after it runs and nothing it did is undone.
pub fn try_run_bl_stage<P: Bl1Platform>(plat: &mut P) -> Result<StageOutcome, Bl1Error> {
    let mut tracker = StateTracker::new();
    run_states(plat, &mut tracker).map_err(|e| {
        match tracker.current() {
            Some(state) => error!("BL1: {state} failed: {e}"),
            None => error!("BL1: {e}"),
        }
        e
    })
}

/// Like [`try_run_bl_stage`], but a failure does not return: the platform's
/// `fatal_error` takes over.
pub fn run<P: Bl1Platform>(plat: &mut P) -> StageOutcome {
    match try_run_bl_stage(plat) {
        Ok(outcome) => outcome,
        Err(e) => plat.fatal_error(&e),
    }
}

pub fn run_bl_stage<P: Bl1Platform>(plat: &mut P) -> NextImageDecision {
    run(plat).decision
}
