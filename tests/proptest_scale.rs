// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Property tests for unit/click conversion and code normalization.

mod common;

use axial::{ActuatorConfig, CalibrationPhase, Direction, TickFlags, TravelScale};
use common::rig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn position_round_trips_within_one_unit(
        units in 1u16..=u16::MAX,
        extra in 0u32..1_000_000,
        home in -200_000i32..200_000,
        frac in 0.0f64..=1.0,
    ) {
        let clicks = u32::from(units) + extra;
        let mut rig = rig(ActuatorConfig::default().with_travel(clicks, units));

        // Calibrate with the top switch already latched so home lands on `home`.
        let mut flags = TickFlags::new();
        rig.encoder.set(home);
        rig.switches.press_top();
        flags.top = true;
        flags.request_calibration();
        rig.actuator.tick(&mut flags, 0);
        prop_assert_eq!(rig.actuator.calibration_phase(), CalibrationPhase::Idle);

        let p = (f64::from(units) * frac) as u16;
        let back = rig.actuator.clicks_to_position(rig.actuator.position_to_clicks(p));
        prop_assert!((back - f32::from(p)).abs() <= 1.0, "p={} back={}", p, back);
    }

    #[test]
    fn units_to_clicks_is_monotonic(
        clicks in 1u32..2_000_000,
        units in 1u16..=u16::MAX,
        a in any::<u16>(),
        b in any::<u16>(),
    ) {
        let scale = TravelScale::new(clicks, units).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.units_to_clicks(lo) <= scale.units_to_clicks(hi));
    }

    #[test]
    fn invalid_direction_codes_stop(code in any::<i32>()) {
        prop_assume!(!(-1..=1).contains(&code));
        let d = Direction::from_code(code);
        prop_assert_eq!(d, Direction::Stopped);
        prop_assert_eq!(d.code(), -1);
    }

    #[test]
    fn unknown_phase_codes_abort(code in any::<i8>()) {
        prop_assume!(!(-2..=1).contains(&code));
        prop_assert_eq!(CalibrationPhase::from_code(code), CalibrationPhase::Aborted);
    }
}
