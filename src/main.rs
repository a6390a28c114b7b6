#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    timer::{Channel1, Channel2},
};
use stm32f7xx_hal as hal;

use axial::{
    control::EdgeLatch,
    drivers::L298n,
    hw::{BoardPins, Encoder, ProximitySwitches, Usart},
    protocol::{Command, Parser},
    ActuatorConfig, AxialActuator, Sensor, TickFlags,
};

/// Control loop period.
const LOOP_PERIOD_MS: u32 = 10;

/// Print a status line every this many cycles (0.5 s).
const STATUS_EVERY: u32 = 50;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOE);

    // USART1 (commands in, status out)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);

    // TIM4 CH1/CH2 PWM on the driver inputs
    let channels = (Channel1::new(pins.motor.cw), Channel2::new(pins.motor.ccw));
    let (pwm_cw, pwm_ccw) = dp.TIM4.pwm_hz(channels, 20.kHz(), &clocks).split();
    let driver = L298n::new(pwm_cw, pwm_ccw, pins.motor.enable);

    let encoder = Encoder::tim2(dp.TIM2);
    let switches = ProximitySwitches::new(pins.switches.top, pins.switches.bottom);
    let button = pins.button.calibrate;

    let config = ActuatorConfig::default();
    let mut actuator = AxialActuator::new(config, driver, encoder, switches).unwrap();

    // SysTick delay
    let mut delay = Delay::new(cp.SYST, clocks.sysclk().raw());

    let mut parser = Parser::new();
    let mut flags = TickFlags::new();
    let mut top_latch = EdgeLatch::active_low();
    let mut bottom_latch = EdgeLatch::active_low();
    let mut button_latch = EdgeLatch::active_high();

    let mut target: u16 = 0;
    let mut cycle: u32 = 0;

    // Home is not kept across power cycles, so calibrate on boot.
    actuator.set_drive_enabled(true);
    flags.request_calibration();
    usart.println("axial: ready, calibrating");

    loop {
        while let Some(byte) = usart.read_byte() {
            match parser.push(byte) {
                Some(Command::SetTarget(units)) => {
                    target = units.min(actuator.scale().total_units());
                }
                Some(Command::Calibrate) => flags.request_calibration(),
                Some(Command::EnableDrive) => actuator.set_drive_enabled(true),
                Some(Command::DisableDrive) => actuator.set_drive_enabled(false),
                None => {}
            }
        }

        let top_high = actuator.proximity_released(Sensor::Top);
        let bottom_high = actuator.proximity_released(Sensor::Bottom);
        top_latch.latch_into(top_high, &mut flags.top);
        bottom_latch.latch_into(bottom_high, &mut flags.bottom);
        button_latch.latch_into(button.is_high(), &mut flags.calibrate);

        actuator.tick_guarded(&mut flags, target);

        cycle = cycle.wrapping_add(1);
        if cycle % STATUS_EVERY == 0 {
            usart.print_status(
                actuator.report_position(),
                actuator.last_known_position(),
                actuator.home_offset(),
                actuator.calibration_phase(),
                actuator.direction(),
            );
        }

        delay.delay_ms(LOOP_PERIOD_MS);
    }
}
