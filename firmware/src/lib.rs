//! Emulated Nintendo Switch controller for RP2040.
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040), enumerates as a HORI
//! Pokken controller and plays input sequences into the console.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | USB      | -    | Connected to the Switch dock |
//! | LED      | 25   | On-board LED (status indicator) |
//!
//! # Architecture
//!
//! Two Embassy tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Macro Task**: Owns the [`Sequencer`] and plays sequences, sending a
//!   report on every state change
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`switch_core`] for convenience.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use switch_core::{
    AnalogStick, Button, Buttons, ControllerSink, ControllerState, Dpad, OutputError, OutputSink,
    Sequencer, StickTilt, SwitchController, SwitchReport, Timing, DEFAULT_PRESS_MS, PRODUCT_ID,
    VENDOR_ID,
};

pub mod usb_output;

pub use usb_output::{configure_usb_hid, SwitchHidWriter, SwitchRequestHandler, UsbHidOutput};
