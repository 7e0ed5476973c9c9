/// Identification of the pad on the USB bus, read by the runtime's HID stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsbConfig<'a> {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: &'a str,
    pub product: &'a str,
    pub serial_number: &'a str,
}

impl Default for UsbConfig<'_> {
    fn default() -> Self {
        Self::const_default()
    }
}

impl UsbConfig<'_> {
    pub const fn const_default() -> Self {
        Self {
            vid: 0xFEED,
            pid: 0x0000,
            manufacturer: "danibcorr",
            product: "Macro pad",
            serial_number: "0",
        }
    }
}
