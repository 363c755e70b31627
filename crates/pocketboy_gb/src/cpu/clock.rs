use std::fmt;

/// A machine-cycle / T-state counter pair.
///
/// One machine cycle is four T-states on this CPU family. Counters are
/// 16-bit and wrap; folding one clock into another is done by the caller
/// (see `Cpu::step`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    pub m: u16,
    pub t: u16,
}

impl Clock {
    #[inline]
    pub fn set(&mut self, m: u16, t: u16) {
        self.m = m;
        self.t = t;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.m = 0;
        self.t = 0;
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[M: {:X}, T: {:X}]", self.m, self.t)
    }
}
