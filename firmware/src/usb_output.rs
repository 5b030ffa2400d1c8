//! USB HID output: sends controller state to the console as Pokken reports.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidBootProtocol, HidSubclass, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use switch_core::{ControllerState, OutputError, OutputSink, SwitchReport, REPORT_DESCRIPTOR};

/// Convert endpoint errors to [`OutputError`].
///
/// A helper function instead of a `From` impl, since both types live in
/// other crates.
#[inline]
fn endpoint_error_to_output_error(e: EndpointError) -> OutputError {
    match e {
        EndpointError::Disabled => OutputError::NotReady,
        _ => OutputError::Io,
    }
}

/// HID writer for the 8-byte controller report.
pub type SwitchHidWriter<'d> = HidWriter<'d, Driver<'d, USB>, { SwitchReport::SIZE }>;

/// USB HID controller output.
///
/// Wraps an embassy-usb HID writer to send controller reports.
pub struct UsbHidOutput<'d> {
    writer: SwitchHidWriter<'d>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    #[must_use]
    pub fn new(writer: SwitchHidWriter<'d>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl OutputSink for UsbHidOutput<'_> {
    async fn send(&mut self, state: &ControllerState) -> Result<(), OutputError> {
        let report = SwitchReport::from(state);
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(endpoint_error_to_output_error)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler (handles SET_REPORT, etc.).
///
/// The console writes vendor output reports that we accept and ignore.
pub struct SwitchRequestHandler;

impl RequestHandler for SwitchRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
    request_handler: &'d mut SwitchRequestHandler,
) -> SwitchHidWriter<'d> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: 5,
        max_packet_size: SwitchReport::SIZE as u16,
        hid_subclass: HidSubclass::No,
        hid_boot_protocol: HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
