use crate::cpu::Cpu;

impl Cpu {
    /// HALT is accepted but does not stop the core yet; halt-until-interrupt
    /// arrives together with the interrupt controller.
    pub(super) fn exec_halt(&mut self) {}

    /// DI: interrupt masking is deferred with the rest of interrupt support.
    pub(super) fn exec_di(&mut self) {}

    /// EI: see `exec_di`.
    pub(super) fn exec_ei(&mut self) {}
}
