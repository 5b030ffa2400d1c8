#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::Delay;
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;
use switch_controller_rp2040::{
    configure_usb_hid, Button, Dpad, Sequencer, StickTilt, SwitchController, SwitchRequestHandler,
    UsbHidOutput, PRODUCT_ID, VENDOR_ID,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();
static REQUEST_HANDLER: StaticCell<SwitchRequestHandler> = StaticCell::new();

type MacroSequencer = Sequencer<SwitchController<UsbHidOutput<'static>>, Delay, Output<'static>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Switch controller starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    // The console only accepts known wired controllers, so present as a HORI Pokken pad
    let mut usb_config = UsbConfig::new(VENDOR_ID, PRODUCT_ID);
    usb_config.manufacturer = Some("HORI CO.,LTD.");
    usb_config.product = Some("POKKEN CONTROLLER");
    usb_config.serial_number = None;
    usb_config.max_power = 500;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let request_handler = REQUEST_HANDLER.init(SwitchRequestHandler);
    let hid_writer = configure_usb_hid(&mut builder, hid_state, request_handler);

    // Build the USB device
    let usb_device = builder.build();

    let usb_output = UsbHidOutput::new(hid_writer);

    // On-board LED on Pico, used as status indicator
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(macro_task(usb_output, led).unwrap());

    info!("Switch controller initialized, waiting for console...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Macro task - waits for the console, then plays input sequences.
#[embassy_executor::task]
async fn macro_task(mut output: UsbHidOutput<'static>, led: Output<'static>) {
    output.wait_ready().await;
    info!("USB HID ready, starting sequences...");

    let mut controller = SwitchController::new(output);
    if let Err(e) = controller.release_all().await {
        error!("Output error: {:?}", e);
    }

    let mut seq = Sequencer::new(controller, Delay, led);
    seq.flash(3).await;

    // The controller pairing screen registers a pad once a button is pressed
    seq.press_button(Button::A, 500, 3).await;

    loop {
        demo_round(&mut seq).await;
    }
}

/// Walk around mashing A, then open and close the menu.
async fn demo_round(seq: &mut MacroSequencer) {
    seq.tilt_left_stick_mashing(0, 100, Button::A, 2000).await;
    seq.tilt_left_stick_mashing(0, -100, Button::A, 2000).await;
    seq.tilt_sticks(StickTilt::new(100, 0, -100, 0), 500).await;

    seq.press_button(Button::X, 1000, 1).await;
    seq.press_dpad(Dpad::Right, 300, 100, 2).await;
    seq.press_dpad_once(Dpad::Left, 300).await;
    seq.press_button(Button::B, 500, 2).await;

    seq.flash_once().await;
}
