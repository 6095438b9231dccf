// NES standard controller and the port interface the CPU bus forwards to.

use bitflags::bitflags;

bitflags! {
    /// Buttons in shift-register order: A is reported first.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const A = 0b00000001;
        const B = 0b00000010;
        const SELECT = 0b00000100;
        const START = 0b00001000;
        const UP = 0b00010000;
        const DOWN = 0b00100000;
        const LEFT = 0b01000000;
        const RIGHT = 0b10000000;
    }
}

/// Device plugged into `$4016` or `$4017`.
pub trait ControllerPort {
    fn read(&mut self) -> u8;
    fn write(&mut self, data: u8);
}

/// Nothing plugged in. Reads as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unplugged;

impl ControllerPort for Unplugged {
    fn read(&mut self) -> u8 {
        0
    }

    fn write(&mut self, _data: u8) {}
}

#[derive(Debug, Clone, Default)]
pub struct StandardController {
    buttons: Buttons,
    // next bit to shift out
    index: u8,
    strobe: bool,
}

impl StandardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: Buttons, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    pub fn set_buttons(&mut self, buttons: Buttons) {
        self.buttons = buttons;
    }

    pub fn buttons(&self) -> Buttons {
        self.buttons
    }
}

impl ControllerPort for StandardController {
    /// One button per read, 1 = pressed. Reads past the eighth return 0.
    fn read(&mut self) -> u8 {
        let value = if self.index < 8 {
            (self.buttons.bits() >> self.index) & 1
        } else {
            0
        };
        // Held strobe keeps reporting A
        if self.strobe {
            self.index = 0;
        } else {
            self.index = self.index.saturating_add(1);
        }
        value
    }

    fn write(&mut self, data: u8) {
        self.strobe = data & 0x01 != 0;
        if self.strobe {
            self.index = 0;
        }
    }
}
