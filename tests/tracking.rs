// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Position tracking, deadband filtering and the slowdown policy through the public API.

mod common;

use axial::{ActuatorConfig, Direction, ReportedPosition, TickFlags};
use common::{default_rig, rig};

#[test]
fn midpoint_target_from_below_drives_ccw() {
    let mut rig = rig(ActuatorConfig::default().with_travel(10_000, 4095).with_tolerance(25));
    let mut flags = TickFlags::new();

    rig.encoder.set(4000);
    rig.actuator.tick(&mut flags, 2048);

    assert_eq!(rig.actuator.position_to_clicks(2048), 5001);
    assert_eq!(rig.actuator.direction(), Direction::Ccw);
    assert_eq!(rig.actuator.driver().last(), Some((255, 0)));
}

#[test]
fn target_below_position_drives_cw() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(8000);
    rig.actuator.tick(&mut flags, 1000);

    assert_eq!(rig.actuator.direction(), Direction::Cw);
}

#[test]
fn reaching_target_stops() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(4000);
    rig.actuator.tick(&mut flags, 2048);
    assert_eq!(rig.actuator.direction(), Direction::Ccw);

    rig.encoder.set(4990);
    rig.actuator.tick(&mut flags, 2048);
    assert_eq!(rig.actuator.direction(), Direction::Stopped);
    assert_eq!(rig.actuator.driver().last(), Some((1, 1)));
}

#[test]
fn small_encoder_jitter_is_ignored() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(1000);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.last_known_position(), 1000);

    rig.encoder.set(1025);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.last_known_position(), 1000);

    rig.encoder.set(975);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.last_known_position(), 1000);

    rig.encoder.set(1026);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.last_known_position(), 1026);
}

#[test]
fn tracking_is_relative_to_home() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    // Home at 7000.
    rig.encoder.set(7000);
    rig.switches.press_top();
    flags.top = true;
    flags.request_calibration();
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.home_offset(), 7000);
    rig.switches.release_top();

    assert_eq!(rig.actuator.position_to_clicks(0), 7000);
    assert_eq!(rig.actuator.position_to_clicks(4095), 17_000);

    rig.encoder.set(9500);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.direction(), Direction::Cw);
    // 1023.75 units
    assert_eq!(rig.actuator.report_position(), ReportedPosition::Value(1023));

    rig.encoder.set(6000);
    rig.actuator.tick(&mut flags, 0);
    assert_eq!(rig.actuator.direction(), Direction::Ccw);
    assert_eq!(rig.actuator.report_position(), ReportedPosition::NegativeComputed);
    assert_eq!(rig.actuator.report_position().code(), 2);
}

#[test]
fn uncalibrated_start_reports_negative() {
    let rig = default_rig();
    assert_eq!(rig.actuator.report_position(), ReportedPosition::NegativeComputed);
}

#[test]
fn slowdown_truth_table() {
    let mut rig = default_rig();

    rig.actuator.set_direction(Direction::Cw);
    assert!(rig.actuator.should_slow_down(true, false));
    assert!(!rig.actuator.should_slow_down(false, true));

    rig.actuator.set_direction(Direction::Ccw);
    assert!(rig.actuator.should_slow_down(false, true));
    assert!(!rig.actuator.should_slow_down(true, false));

    rig.actuator.set_direction(Direction::Stopped);
    assert!(!rig.actuator.should_slow_down(true, false));
    assert!(!rig.actuator.should_slow_down(false, true));
}

#[test]
fn enable_gate_is_separate_from_direction() {
    let mut rig = default_rig();
    assert!(!rig.actuator.is_drive_enabled());

    rig.actuator.set_drive_enabled(true);
    rig.actuator.set_direction(Direction::Ccw);
    assert!(rig.actuator.is_drive_enabled());

    rig.actuator.set_drive_enabled(false);
    assert_eq!(rig.actuator.direction(), Direction::Ccw);
    assert!(!rig.actuator.driver().enabled);
}

#[test]
fn small_offset_from_home_reports_truncated_units() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(38);
    rig.actuator.tick(&mut flags, 0);

    assert_eq!(rig.actuator.report_position(), ReportedPosition::Value(15));
}

#[test]
fn guarded_tick_never_drives_into_a_held_switch() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(8000);
    rig.switches.press_top();
    flags.top = true;
    let before = rig.actuator.driver().signals.len();
    rig.actuator.tick_guarded(&mut flags, 1000);

    assert_eq!(rig.actuator.direction(), Direction::Stopped);
    assert_eq!(&rig.actuator.driver().signals[before..], &[(1, 1)]);
    assert!(flags.top);

    // Once released, tracking drives toward the target again.
    rig.switches.release_top();
    rig.actuator.tick_guarded(&mut flags, 1000);
    assert!(!flags.top);
    assert_eq!(rig.actuator.direction(), Direction::Cw);
    assert_eq!(rig.actuator.driver().last(), Some((0, 255)));
}

#[test]
fn guarded_tick_drives_away_from_a_held_switch() {
    let mut rig = default_rig();
    let mut flags = TickFlags::new();

    rig.encoder.set(8000);
    rig.switches.press_bottom();
    flags.bottom = true;
    rig.actuator.tick_guarded(&mut flags, 1000);

    assert_eq!(rig.actuator.direction(), Direction::Cw);

    rig.encoder.set(0);
    rig.actuator.tick_guarded(&mut flags, 1000);
    assert_eq!(rig.actuator.direction(), Direction::Stopped);
}
