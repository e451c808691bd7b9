use crate::hal::{
    self,
    prelude::*,
    rcc::{self, Enable, PllConfig},
    serial, stm32,
};

use adc_uart::{sequencer, Config, WaitForEvent};

use crate::adc::{self, BurstResults, BurstTrigger};

pub type Uart = hal::serial::Serial<stm32::USART1, serial::FullConfig>;
pub type AdcInput = hal::gpio::gpioa::PA2<hal::gpio::Analog>;

struct NoRx;
impl<T> serial::RxPin<T> for NoRx {
    fn setup(&self) {}
}

/// SysTick busy-wait; keeps the core running for the whole throttle pause.
pub type Delay = hal::timer::delay::Delay<stm32::SYST>;

/// Sleeps until the next event or interrupt.
pub struct Wfe;

impl WaitForEvent for Wfe {
    fn wait_for_event(&mut self) {
        cortex_m::asm::wfe();
    }
}

pub struct Platform {
    pub uart: Uart,
    pub trigger: BurstTrigger<AdcInput>,
    pub results: BurstResults,
    pub delay: Delay,
}

impl Platform {
    pub fn startup(core: cortex_m::Peripherals, dev: stm32::Peripherals, config: &Config) -> Self {
        config
            .validate(sequencer::SEQUENCE_RANKS)
            .expect("Unsupported acquisition config");

        // Configure system clocks
        let pll_cfg = PllConfig::with_hsi(2, 16, 2); // 64 MHz
        let rcc_cfg = rcc::Config::pll().pll_cfg(pll_cfg);
        let mut rcc = dev.RCC.freeze(rcc_cfg);

        // Remap PA11/PA9 as PA9
        stm32::SYSCFG::enable(&mut rcc);
        unsafe {
            dev.SYSCFG
                .cfgr1
                .modify(|r, w| w.bits(r.bits() | (0b_0_1_000)));
        }

        let mut delay = core.SYST.delay(&mut rcc);

        let gpioa = dev.GPIOA.split(&mut rcc);

        // Transmit-only UART, 8N1
        let uart = dev
            .USART1
            .usart(
                gpioa.pa9,
                NoRx,
                serial::FullConfig::default().baudrate(crate::UART_BAUD.bps()),
                &mut rcc,
            )
            .expect("Can't initialize UART");

        // Signal input on ADC_IN2
        let adc = dev.ADC.constrain(&mut rcc);
        let (trigger, results) =
            adc::split(adc, gpioa.pa2, config.burst_size.get(), &mut delay);

        Self {
            uart,
            trigger,
            results,
            delay,
        }
    }
}
