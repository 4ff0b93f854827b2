//! Chrono battery: the depleting/recharging resource gating time-slow
//!
//! Two-state machine. `Slowing` drains a fixed amount per tick, everything
//! else recharges. The transition check reads the charge from *before* this
//! tick's drain, which produces the oscillation at zero: holding the slow key
//! on an empty battery runs at normal speed for the recharge ticks, then slow
//! kicks back in as soon as charge is above zero.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    /// Charge in [0, BATTERY_MAX]
    pub charge: f32,
    /// True while time-slow is active this tick
    pub slowing: bool,
}

impl Default for BatteryState {
    fn default() -> Self {
        Self {
            charge: BATTERY_MAX,
            slowing: false,
        }
    }
}

impl BatteryState {
    /// Advance the state machine by one tick.
    ///
    /// Slowing requires both the held intent and a non-empty battery; every
    /// other combination recharges.
    pub fn update(&mut self, slow_requested: bool) {
        self.slowing = slow_requested && self.charge > 0.0;
        if self.slowing {
            self.charge = (self.charge - BATTERY_DRAIN).max(0.0);
        } else {
            self.charge = (self.charge + BATTERY_RECHARGE).min(BATTERY_MAX);
        }
    }

    /// World speed multiplier for the current tick
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        if self.slowing { TIME_SLOW_FACTOR } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_while_slowing() {
        let mut b = BatteryState::default();
        b.update(true);
        assert!(b.slowing);
        assert_eq!(b.charge, BATTERY_MAX - BATTERY_DRAIN);
        assert_eq!(b.speed_multiplier(), TIME_SLOW_FACTOR);
    }

    #[test]
    fn test_recharge_caps_at_max() {
        let mut b = BatteryState::default();
        b.update(false);
        assert!(!b.slowing);
        assert_eq!(b.charge, BATTERY_MAX);
        assert_eq!(b.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_drain_floors_at_zero() {
        let mut b = BatteryState {
            charge: 1.0,
            slowing: false,
        };
        b.update(true);
        assert!(b.slowing);
        assert_eq!(b.charge, 0.0);
    }

    #[test]
    fn test_oscillation_at_zero() {
        let mut b = BatteryState {
            charge: 0.0,
            slowing: true,
        };

        // Empty battery with the key held: back to normal speed, recharging
        b.update(true);
        assert!(!b.slowing);
        assert_eq!(b.speed_multiplier(), 1.0);
        assert_eq!(b.charge, BATTERY_RECHARGE);

        // Charge is above zero again: slow resumes immediately
        b.update(true);
        assert!(b.slowing);
        assert_eq!(b.speed_multiplier(), TIME_SLOW_FACTOR);
        assert_eq!(b.charge, 0.0);
    }

    #[test]
    fn test_full_drain_cycle_stays_in_bounds() {
        let mut b = BatteryState::default();
        for _ in 0..200 {
            b.update(true);
            assert!(b.charge >= 0.0 && b.charge <= BATTERY_MAX);
        }
        for _ in 0..500 {
            b.update(false);
            assert!(b.charge >= 0.0 && b.charge <= BATTERY_MAX);
        }
        assert_eq!(b.charge, BATTERY_MAX);
    }
}
