use bl1_cpu::arm64::{barrier::dsb_sy, sev};

/// Processor instructions the boot stage orders its side effects with.
pub trait CpuOps {
    /// Complete all outstanding memory accesses system wide (`dsb sy`).
    fn full_barrier(&mut self);
    /// Wake processors waiting for an event (`sev`).
    fn send_event(&mut self);
}

/// The executing AArch64 core.
#[derive(Default)]
pub struct Arm64Cpu;

impl CpuOps for Arm64Cpu {
    fn full_barrier(&mut self) {
        dsb_sy();
    }

    fn send_event(&mut self) {
        sev();
    }
}
