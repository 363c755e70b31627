mod alu;
mod bus;
mod clock;
mod exec;
mod helpers;
mod init;
mod opcodes;
mod regs;
#[cfg(test)]
mod tests;

use std::fmt;

pub use bus::Bus;
pub use clock::Clock;
pub use regs::{Flag, Pair, Reg8, Registers};

use opcodes::{Entry, OPCODES};

/// Game Boy CPU core (Sharp LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space. It
/// owns the architectural state only; all memory traffic goes through a
/// [`Bus`] borrowed for the duration of each [`step`](Cpu::step).
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Cycles accumulated across all executed instructions, wrapping.
    pub machine_cycles: Clock,
    /// Cost of the instruction currently being billed. Reads (0, 0) between
    /// steps; `step` absorbs it into `machine_cycles` and clears it.
    pub last_instr_cycle: Clock,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Advance PC by `by`, wrapping at the end of the address space.
    #[inline]
    pub fn increment_pc(&mut self, by: u16) {
        self.regs.pc = self.regs.pc.wrapping_add(by);
    }

    /// Fetch, decode, and execute a single instruction.
    ///
    /// Returns the T-cycle cost of the instruction. The cost is also folded
    /// into `machine_cycles`, after which `last_instr_cycle` is cleared.
    ///
    /// Panics on opcodes with no implemented semantics: both undocumented
    /// bytes and documented-but-deferred instructions are fatal, so a test
    /// program can never be misread as passing.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let opcode_addr = self.regs.pc;
        let opcode = bus.read8(opcode_addr);
        self.increment_pc(1);

        match &OPCODES[opcode as usize] {
            Entry::Op(desc) => {
                log::trace!("{}", desc.mnemonic);
                self.exec_op(bus, desc.op);
                self.last_instr_cycle.set(desc.m, desc.t);
            }
            Entry::Todo(mnemonic) => {
                panic!(
                    "unimplemented opcode 0x{opcode:02X} ({mnemonic}) at PC=0x{opcode_addr:04X}"
                );
            }
            Entry::Hole => {
                panic!("invalid/unknown opcode 0x{opcode:02X} at PC=0x{opcode_addr:04X}");
            }
        }

        let cost = self.last_instr_cycle.t;
        self.machine_cycles.m = self.machine_cycles.m.wrapping_add(self.last_instr_cycle.m);
        self.machine_cycles.t = self.machine_cycles.t.wrapping_add(self.last_instr_cycle.t);
        self.last_instr_cycle.reset();
        cost
    }

    fn flag_summary(&self) -> String {
        if self.regs.f == 0 {
            return "none set".to_string();
        }

        let mut summary = String::new();
        for (flag, name) in [(Flag::Z, "Z"), (Flag::N, "N"), (Flag::H, "H"), (Flag::C, "C")] {
            if self.get_flag(flag) {
                if !summary.is_empty() {
                    summary.push(' ');
                }
                summary.push_str(name);
            }
        }
        summary
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        writeln!(f, "LR35902 CPU")?;
        writeln!(f, "  PC             = {:04X}", r.pc)?;
        writeln!(f, "  SP             = {:04X}", r.sp)?;
        writeln!(f, "  last cycle     = {}", self.last_instr_cycle)?;
        writeln!(f, "  machine cycles = {}", self.machine_cycles)?;
        writeln!(f, "  flags          = {}", self.flag_summary())?;
        write!(
            f,
            "  A:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} F:{:02X} H:{:02X} L:{:02X}",
            r.a, r.b, r.c, r.d, r.e, r.f, r.h, r.l
        )
    }
}
