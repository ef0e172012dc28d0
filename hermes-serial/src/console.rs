//! Status light rendered as log records
//!
//! Stands in for the board LED on a host. Only level changes are logged,
//! since the control loop drives an idle light dark on every iteration.

use hermes_core::traits::IndicatorDevice;
use log::debug;

#[derive(Debug, Default)]
pub struct ConsoleIndicator {
    lit: bool,
    toggles: u64,
}

impl ConsoleIndicator {
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Level changes seen so far
    pub fn toggles(&self) -> u64 {
        self.toggles
    }
}

impl IndicatorDevice for ConsoleIndicator {
    fn set_lit(&mut self, lit: bool) {
        if lit == self.lit {
            return;
        }
        self.lit = lit;
        self.toggles += 1;
        debug!("status light {}", if lit { "ON" } else { "off" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_level_changes() {
        let mut light = ConsoleIndicator::default();
        light.set_lit(false);
        light.set_lit(true);
        light.set_lit(true);
        light.set_lit(false);

        assert_eq!(light.toggles(), 2);
        assert!(!light.is_lit());
    }
}
