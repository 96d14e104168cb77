/// Command codes sent in a COMMAND transaction
pub struct Cmd;
impl Cmd {
    // System
    pub const SYS_DIS: u8 = 0x00;
    pub const SYS_EN: u8 = 0x01;

    // LCD bias generator
    pub const LCD_OFF: u8 = 0x02;
    pub const LCD_ON: u8 = 0x03;

    // Clock source
    pub const RC_32K: u8 = 0x18;
    pub const EXT_32K: u8 = 0x1C;

    // Peripherals
    pub const TONE_OFF: u8 = 0x08;
    pub const IRQ_DIS: u8 = 0x90;

    // Time base, 1 Hz (watchdog 4 s)
    pub const F1: u8 = 0xA0;
}

/// Power-on sequence, the controller stays in its low power state unless sent in this order
pub(crate) const INIT_SEQUENCE: [Command; 6] = [
    Command::SystemEnable,
    Command::LcdOn,
    Command::InternalRc32k,
    Command::ToneOff,
    Command::IrqDisable,
    Command::TimeBase1Hz,
];

/// Typed form of the known command codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the system oscillator off
    SystemDisable,
    /// Turn the system oscillator on
    SystemEnable,
    /// Turn the LCD bias generator off
    LcdOff,
    /// Turn the LCD bias generator on
    LcdOn,
    /// Clock from the internal 32 kHz RC oscillator
    InternalRc32k,
    /// Clock from an external 32 kHz source
    External32k,
    /// Disable buzzer output
    ToneOff,
    /// Disable the IRQ pin
    IrqDisable,
    /// 1 Hz time base
    TimeBase1Hz,
}

impl Command {
    /// 8 bit code sent after the COMMAND tag
    pub const fn code(self) -> u8 {
        match self {
            Command::SystemDisable => Cmd::SYS_DIS,
            Command::SystemEnable => Cmd::SYS_EN,
            Command::LcdOff => Cmd::LCD_OFF,
            Command::LcdOn => Cmd::LCD_ON,
            Command::InternalRc32k => Cmd::RC_32K,
            Command::External32k => Cmd::EXT_32K,
            Command::ToneOff => Cmd::TONE_OFF,
            Command::IrqDisable => Cmd::IRQ_DIS,
            Command::TimeBase1Hz => Cmd::F1,
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.code()
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::SystemDisable => write!(f, "SYS DIS"),
            Command::SystemEnable => write!(f, "SYS EN"),
            Command::LcdOff => write!(f, "LCD OFF"),
            Command::LcdOn => write!(f, "LCD ON"),
            Command::InternalRc32k => write!(f, "RC 32K"),
            Command::External32k => write!(f, "EXT 32K"),
            Command::ToneOff => write!(f, "TONE OFF"),
            Command::IrqDisable => write!(f, "IRQ DIS"),
            Command::TimeBase1Hz => write!(f, "F1"),
        }
    }
}
