//! Lumen Kernel Entry Point
//!
//! This is the main entry point for the Lumen kernel.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use lumen_kernel::arch::x86_64::{self, Cpu, VgaBuffer, X86Ports};
    use lumen_kernel::config::ShellConfig;
    use lumen_kernel::console::Screen;
    use lumen_kernel::fs::ROOT_LISTING;
    use lumen_kernel::keyboard::{Keyboard, PolledController};
    use lumen_kernel::serial_println;
    use lumen_kernel::terminal::Shell;

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        lumen_kernel::init();
        log::info!("serial log ready");

        // SAFETY: This is the only VGA handle; the bootloader maps 0xB8000.
        let screen = Screen::new(unsafe { VgaBuffer::new() });
        let keyboard = Keyboard::new(PolledController::new(X86Ports));

        let mut shell = Shell::new(screen, keyboard, Cpu, &ROOT_LISTING, ShellConfig::default());
        shell.start();
        log::info!("shell started, {} listing entries", ROOT_LISTING.len());

        shell.run()
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);
        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("lumen-kernel runs on bare metal; build it for an x86_64 target with target_os = \"none\"");
}
