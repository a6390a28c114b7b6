// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Axial actuator: a DC motor on a dual-direction driver, a quadrature encoder and two proximity
//! switches bounding the travel.
//!
//! The actuator is driven by a polling loop that calls [`AxialActuator::tick`] once per cycle with
//! the latched switch/button flags and the requested position. Each cycle it filters the encoder
//! reading, advances calibration if one is running, and otherwise steers toward the target with a
//! simple deadband controller.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut actuator = AxialActuator::new(ActuatorConfig::default(), driver, encoder, switches)?;
//! actuator.set_drive_enabled(true);
//!
//! loop {
//!     top.latch_into(top_pin.is_high(), &mut flags.top);
//!     bottom.latch_into(bottom_pin.is_high(), &mut flags.bottom);
//!     actuator.tick(&mut flags, target);
//!     delay.delay_ms(10_u32);
//! }
//! ```

use crate::config::{ActuatorConfig, AxisPins, PinId};
use crate::control::{self, CalibrationPhase, TickFlags, TravelScale};
use crate::drivers::{DirectionLine, DriverPort, EncoderSource, ProximityInputs, Sensor};
use crate::error::ConfigResult;
use crate::motors::{Direction, ReportedPosition};

/// Last known position before the first encoder reading has been accepted.
pub const UNKNOWN_POSITION: i32 = -999;

/// Axial actuator state machine.
///
/// `D` drives the H-bridge, `E` supplies encoder counts and `P` reads the raw proximity switch
/// levels. The actuator owns all three for its lifetime.
pub struct AxialActuator<D, E, P> {
    driver: D,
    encoder: E,
    sensors: P,

    pins: AxisPins,
    scale: TravelScale,

    /// Deadband in clicks for both reading acceptance and "on target"
    tolerance: u32,

    direction: Direction,
    phase: CalibrationPhase,

    /// Encoder reading defined as position zero
    home_offset: i32,

    /// Most recent accepted encoder reading
    last_known_position: i32,
}

impl<D, E, P> AxialActuator<D, E, P>
where
    D: DriverPort,
    E: EncoderSource,
    P: ProximityInputs,
{
    /// Build an actuator and apply the configured initial direction to the driver.
    pub fn new(config: ActuatorConfig, driver: D, encoder: E, sensors: P) -> ConfigResult<Self> {
        let scale = config.validate()?;

        let mut actuator = Self {
            driver,
            encoder,
            sensors,
            pins: config.pins,
            scale,
            tolerance: config.tolerance,
            direction: Direction::Stopped,
            phase: CalibrationPhase::Idle,
            home_offset: 0,
            last_known_position: UNKNOWN_POSITION,
        };
        actuator.set_direction(config.initial_direction);

        info!(
            "axial actuator ready: {=u32} clicks / {=u16} units, tolerance {=u32}",
            scale.total_clicks(),
            scale.total_units(),
            config.tolerance
        );

        Ok(actuator)
    }

    /// Set the commanded direction and write the matching levels to the driver.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            debug!("direction {} -> {}", self.direction, direction);
        }
        self.direction = direction;

        let signals = direction.signals();
        self.driver.set_direction_signals(signals.cw, signals.ccw);
    }

    /// Whether the motor is heading into the switch that has just triggered.
    ///
    /// See [`control::should_slow_down`] for the full table.
    #[inline]
    pub fn should_slow_down(&self, top: bool, bottom: bool) -> bool {
        control::should_slow_down(self.direction, top, bottom)
    }

    /// Run one calibration step from `phase` and return the phase that follows.
    ///
    /// - `Start`: drive toward the top switch, next is `SeekTop`.
    /// - `SeekTop`: stop and record the current position as home, next is `Idle`.
    /// - anything else: `Aborted`, with no state changed.
    ///
    /// The actuator's own phase is not updated here; [`Self::tick`] does that.
    pub fn run_calibration(&mut self, phase: CalibrationPhase) -> CalibrationPhase {
        match phase {
            CalibrationPhase::Start => {
                info!("calibration: seeking top switch");
                self.set_direction(Direction::Cw);
                CalibrationPhase::SeekTop
            }
            CalibrationPhase::SeekTop => {
                self.set_direction(Direction::Stopped);
                self.home_offset = self.last_known_position;
                info!("calibration: home offset {=i32}", self.home_offset);
                CalibrationPhase::Idle
            }
            other => {
                warn!("calibration: cannot advance from {}", other);
                CalibrationPhase::Aborted
            }
        }
    }

    /// Run one control cycle.
    ///
    /// `flags` holds edge-latched inputs owned by the caller: `calibrate` is consumed here, and the
    /// switch flags are cleared once the corresponding switch reads released again. `target` is the
    /// requested position in logical units.
    ///
    /// A cycle that advanced calibration does not also steer toward the target.
    pub fn tick(&mut self, flags: &mut TickFlags, target: u16) {
        if self.advance(flags) {
            self.move_toward(target);
        }
    }

    /// Same as [`Self::tick`], except that tracking never drives into a switch whose flag is still
    /// latched: the motor is stopped instead, before any drive toward the switch is written.
    pub fn tick_guarded(&mut self, flags: &mut TickFlags, target: u16) {
        if !self.advance(flags) {
            return;
        }

        let direction = self.direction_toward(target);
        if control::should_slow_down(direction, flags.top, flags.bottom) {
            if self.direction != Direction::Stopped {
                warn!("limit switch held, not driving {}", direction);
            }
            self.set_direction(Direction::Stopped);
        } else {
            self.set_direction(direction);
        }
    }

    /// Encoder sampling, calibration and switch-flag housekeeping for one cycle. Returns whether
    /// the cycle may track the target.
    fn advance(&mut self, flags: &mut TickFlags) -> bool {
        self.sample_encoder();

        if flags.calibrate {
            flags.calibrate = false;
            self.phase = CalibrationPhase::Start;
        }

        let mut calibration_stepped = false;

        if self.phase == CalibrationPhase::Start {
            self.phase = self.run_calibration(CalibrationPhase::Start);
            calibration_stepped = true;
        }

        if self.phase == CalibrationPhase::SeekTop && flags.top {
            self.phase = self.run_calibration(CalibrationPhase::SeekTop);
            calibration_stepped = true;
        }

        if self.sensors.is_released(Sensor::Top) {
            flags.top = false;
        }
        if self.sensors.is_released(Sensor::Bottom) {
            flags.bottom = false;
        }

        self.phase == CalibrationPhase::Idle && !calibration_stepped
    }

    /// Accept a new encoder reading if it moved by more than the tolerance.
    fn sample_encoder(&mut self) {
        let raw = self.encoder.read();
        if raw.abs_diff(self.last_known_position) > self.tolerance {
            trace!("encoder {=i32} -> {=i32}", self.last_known_position, raw);
            self.last_known_position = raw;
        }
    }

    /// Steer toward `target` (logical units) and return the direction applied.
    pub fn move_toward(&mut self, target: u16) -> Direction {
        let direction = self.direction_toward(target);
        self.set_direction(direction);
        direction
    }

    fn direction_toward(&self, target: u16) -> Direction {
        let target_clicks = self.position_to_clicks(target) as i64;
        let delta = target_clicks - self.last_known_position as i64;

        if delta.unsigned_abs() <= self.tolerance as u64 {
            Direction::Stopped
        } else if delta < 0 {
            Direction::Cw
        } else {
            Direction::Ccw
        }
    }

    /// Absolute encoder clicks for a position in logical units.
    #[inline]
    pub fn position_to_clicks(&self, units: u16) -> i32 {
        self.home_offset.saturating_add(self.scale.units_to_clicks(units))
    }

    /// Logical units for an absolute encoder reading. Not rounded; negative below home.
    #[inline]
    pub fn clicks_to_position(&self, clicks: i32) -> f32 {
        self.scale.clicks_to_units(clicks.saturating_sub(self.home_offset))
    }

    /// Current position, or why there is none.
    pub fn report_position(&self) -> ReportedPosition {
        if self.phase != CalibrationPhase::Idle {
            return ReportedPosition::Calibrating;
        }

        let units = self.clicks_to_position(self.last_known_position);
        if units < 0.0 {
            ReportedPosition::NegativeComputed
        } else {
            // Truncated toward zero, matching the status line the host UI expects.
            ReportedPosition::Value(units as u16)
        }
    }

    /// Gate the driver on or off. Direction is left unchanged.
    pub fn set_drive_enabled(&mut self, on: bool) {
        debug!("drive enable {}", on);
        self.driver.set_enable(on);
    }

    #[inline]
    pub fn is_drive_enabled(&self) -> bool {
        self.driver.is_enabled()
    }

    /// Raw level of a proximity switch: true when released.
    #[inline]
    pub fn proximity_released(&mut self, sensor: Sensor) -> bool {
        self.sensors.is_released(sensor)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn calibration_phase(&self) -> CalibrationPhase {
        self.phase
    }

    /// Force the calibration phase, e.g. to start a run without going through the trigger flag.
    pub fn set_calibration_phase(&mut self, phase: CalibrationPhase) {
        self.phase = phase;
    }

    #[inline]
    pub fn home_offset(&self) -> i32 {
        self.home_offset
    }

    #[inline]
    pub fn last_known_position(&self) -> i32 {
        self.last_known_position
    }

    #[inline]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    #[inline]
    pub fn scale(&self) -> TravelScale {
        self.scale
    }

    /// Configured pin of a proximity switch.
    pub fn proximity_pin(&self, sensor: Sensor) -> PinId {
        match sensor {
            Sensor::Top => self.pins.top_sensor,
            Sensor::Bottom => self.pins.bottom_sensor,
        }
    }

    /// Configured pin of a driver direction line.
    pub fn direction_pin(&self, line: DirectionLine) -> PinId {
        match line {
            DirectionLine::Cw => self.pins.cw,
            DirectionLine::Ccw => self.pins.ccw,
        }
    }

    #[inline]
    pub fn drive_pin(&self) -> PinId {
        self.pins.enable
    }

    /// Access the driver, e.g. to inspect the last levels written.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
