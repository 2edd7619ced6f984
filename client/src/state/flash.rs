//! Transient status messages shown in a message region.
//!
//! DESIGN
//! ======
//! Every `show` bumps the region's sequence number and hands back a ticket.
//! The timer that fires `FLASH_DURATION` later clears the region only if the
//! ticket is still current, so a newer message always gets its full window.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::time::Duration;

/// How long a message stays visible.
pub const FLASH_DURATION: Duration = Duration::from_secs(4);

/// Visual tone of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashKind {
    #[default]
    Info,
    Success,
    Error,
}

impl FlashKind {
    /// CSS classes for the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "message",
            Self::Success => "message message--success",
            Self::Error => "message message--error",
        }
    }
}

/// Which message region a flash belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashRegion {
    Form,
    List,
}

/// A displayed message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
}

/// Handle used to clear exactly the message it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashTicket {
    pub region: FlashRegion,
    seq: u64,
}

/// One message region and its sequence counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashSlot {
    region: FlashRegion,
    current: Option<Flash>,
    seq: u64,
}

impl FlashSlot {
    #[must_use]
    pub fn new(region: FlashRegion) -> Self {
        Self { region, current: None, seq: 0 }
    }

    /// Replace the current message and return its clear ticket.
    pub fn show(&mut self, text: impl Into<String>, kind: FlashKind) -> FlashTicket {
        self.seq += 1;
        self.current = Some(Flash { text: text.into(), kind });
        FlashTicket { region: self.region, seq: self.seq }
    }

    /// Clear the message if `ticket` still refers to it. Returns whether
    /// anything was cleared.
    pub fn clear(&mut self, ticket: FlashTicket) -> bool {
        if ticket.region != self.region || ticket.seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Hide the current message without issuing a ticket. Pending timers for
    /// it become no-ops.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Flash> {
        self.current.as_ref()
    }

    pub fn region(&self) -> FlashRegion {
        self.region
    }
}
