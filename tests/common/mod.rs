// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Mock ports shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use axial::{
    ActuatorConfig, AxialActuator, DriverPort, EncoderSource, ProximityInputs, Sensor,
};

/// Records every write to the driver.
#[derive(Default)]
pub struct MockDriver {
    pub signals: Vec<(u8, u8)>,
    pub enabled: bool,
}

impl MockDriver {
    pub fn last(&self) -> Option<(u8, u8)> {
        self.signals.last().copied()
    }
}

impl DriverPort for MockDriver {
    fn set_direction_signals(&mut self, cw: u8, ccw: u8) {
        self.signals.push((cw, ccw));
    }

    fn set_enable(&mut self, on: bool) {
        self.enabled = on;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Encoder whose count the test can move from outside the actuator.
#[derive(Clone, Default)]
pub struct MockEncoder(pub Rc<Cell<i32>>);

impl MockEncoder {
    pub fn set(&self, clicks: i32) {
        self.0.set(clicks);
    }
}

impl EncoderSource for MockEncoder {
    fn read(&mut self) -> i32 {
        self.0.get()
    }
}

/// Switch levels the test can flip from outside the actuator. `true` = released.
#[derive(Clone)]
pub struct MockSwitches {
    pub top: Rc<Cell<bool>>,
    pub bottom: Rc<Cell<bool>>,
}

impl Default for MockSwitches {
    fn default() -> Self {
        Self {
            top: Rc::new(Cell::new(true)),
            bottom: Rc::new(Cell::new(true)),
        }
    }
}

impl MockSwitches {
    pub fn press_top(&self) {
        self.top.set(false);
    }

    pub fn release_top(&self) {
        self.top.set(true);
    }

    pub fn press_bottom(&self) {
        self.bottom.set(false);
    }

    pub fn release_bottom(&self) {
        self.bottom.set(true);
    }
}

impl ProximityInputs for MockSwitches {
    fn is_released(&mut self, sensor: Sensor) -> bool {
        match sensor {
            Sensor::Top => self.top.get(),
            Sensor::Bottom => self.bottom.get(),
        }
    }
}

pub type TestActuator = AxialActuator<MockDriver, MockEncoder, MockSwitches>;

pub struct Rig {
    pub actuator: TestActuator,
    pub encoder: MockEncoder,
    pub switches: MockSwitches,
}

pub fn rig(config: ActuatorConfig) -> Rig {
    let encoder = MockEncoder::default();
    let switches = MockSwitches::default();
    let actuator = AxialActuator::new(
        config,
        MockDriver::default(),
        encoder.clone(),
        switches.clone(),
    )
    .expect("valid config");
    Rig {
        actuator,
        encoder,
        switches,
    }
}

pub fn default_rig() -> Rig {
    rig(ActuatorConfig::default())
}
