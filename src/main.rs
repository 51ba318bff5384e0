#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use core::panic::PanicInfo;

#[cfg(target_os = "none")]
use xkernel::{entry, logger, terminal, VgaTextBuffer, BOOT_CONFIG};

// --- Kernel entry point ---
// The boot loader jumps to the ELF entry symbol with a stack already set up.
// Nothing is passed in and nothing comes back.
#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    // No channel exists to report a failed install on.
    let _ = logger::init();
    log::info!("{} {} entered", xkernel::NAME, xkernel::VERSION);

    // SAFETY: the boot loader leaves the machine in 80x25 text mode with
    // 0xb8000 identity-mapped, and nothing else runs.
    let mut screen = unsafe { VgaTextBuffer::conventional() };
    entry::run(&mut screen, &BOOT_CONFIG)
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("KERNEL PANIC: {}", info);
    terminal::halt_forever()
}

// Hosted builds only exist so `cargo test` can run the library tests; the
// kernel itself must be built with `cargo kbuild` / `cargo kimage`.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!(
        "{} only runs on bare metal; build it with `cargo kimage`",
        xkernel::NAME
    );
    std::process::exit(1);
}
