#![allow(dead_code)]

use quarter_core::core::{Action, ControlPort, MemoryAccessor, RamSnapshot};

/// Something the adapter sent to the emulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Act(Action, Action),
    Select(u32),
    SoftReset,
}

/// Scripted emulator: RAM plus a select cycle.
///
/// Each select press applies the next entry of `cycle` (wrapping) as a
/// list of RAM pokes, which is how a cartridge's game-number counter
/// behaves from the outside.
pub struct FakeEnvironment {
    pub ram: RamSnapshot,
    pub events: Vec<Event>,
    cycle: Vec<Vec<(u16, u8)>>,
    position: usize,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self {
            ram: RamSnapshot::new(),
            events: Vec::new(),
            cycle: Vec::new(),
            position: 0,
        }
    }

    /// Mode byte at `addr` cycles through `values`, starting at `values[start]`.
    pub fn with_counter(addr: u16, values: &[u8], start: usize) -> Self {
        let cycle = values.iter().map(|&v| vec![(addr, v)]).collect();
        Self::with_cycle(cycle, start)
    }

    pub fn with_cycle(cycle: Vec<Vec<(u16, u8)>>, start: usize) -> Self {
        let mut env = Self::new();
        env.cycle = cycle;
        env.position = start;
        env.apply();
        env
    }

    fn apply(&mut self) {
        if let Some(pokes) = self.cycle.get(self.position) {
            for &(addr, value) in pokes {
                self.ram.write(addr, value);
            }
        }
    }

    pub fn selects(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Select(_)))
            .count()
    }

    pub fn soft_resets(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::SoftReset))
            .count()
    }
}

impl MemoryAccessor for FakeEnvironment {
    fn read_byte(&self, addr: u16) -> u8 {
        self.ram.read_byte(addr)
    }
}

impl ControlPort for FakeEnvironment {
    fn act(&mut self, primary: Action, secondary: Action) {
        self.events.push(Event::Act(primary, secondary));
    }

    fn press_select(&mut self, frames: u32) {
        self.events.push(Event::Select(frames));
        if !self.cycle.is_empty() {
            self.position = (self.position + 1) % self.cycle.len();
            self.apply();
        }
    }

    fn soft_reset(&mut self) {
        self.events.push(Event::SoftReset);
    }
}

/// RAM with the given bytes poked in.
pub fn ram_with(pokes: &[(u16, u8)]) -> RamSnapshot {
    let mut ram = RamSnapshot::new();
    for &(addr, value) in pokes {
        ram.write(addr, value);
    }
    ram
}
