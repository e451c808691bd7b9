#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_semihosting as _;

use stm32g0xx_hal as hal;

use adc_uart::Config;

mod adc;
mod app;
mod platform;

pub const UART_BAUD: u32 = 115_200;

/// Three samples per burst, ten bursts, then a one second pause.
pub const CONFIG: Config = Config::new();
