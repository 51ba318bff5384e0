//! Terminal states. Once the entry routine has done its work it parks here
//! and never comes back.

/// How the processor spends the rest of its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// `hlt` in a loop; a spurious wake (NMI, SMI) just halts again.
    Halt,
    /// Busy loop with no further observable action.
    Idle,
}

pub fn park(mode: TerminalMode) -> ! {
    log::trace!("parking in {:?}", mode);
    match mode {
        TerminalMode::Halt => halt_forever(),
        TerminalMode::Idle => idle_forever(),
    }
}

// --- Halt the CPU ---
#[cfg(target_arch = "x86_64")]
pub fn halt_forever() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}

#[cfg(not(target_arch = "x86_64"))]
pub fn halt_forever() -> ! {
    idle_forever()
}

pub fn idle_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
