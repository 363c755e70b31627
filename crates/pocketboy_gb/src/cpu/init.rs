use super::{Clock, Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in its post-reset state.
    ///
    /// The host constructs the CPU alongside a bus implementation and then
    /// drives it with repeated `step` calls for the lifetime of the
    /// emulated machine.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            machine_cycles: Clock::default(),
            last_instr_cycle: Clock::default(),
        };
        cpu.reset();
        cpu
    }

    /// Reset the CPU: every register, PC, SP, and both cycle counters go
    /// back to zero. Idempotent.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.machine_cycles.reset();
        self.last_instr_cycle.reset();
    }
}
