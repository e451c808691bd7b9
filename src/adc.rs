//! Interrupt-driven burst conversions on the STM32G0 ADC.
//!
//! The sequencer is switched to its fully configurable mode and loaded with one rank per
//! sample, all on the same input, so a single ADSTART produces a whole burst of
//! end-of-conversion interrupts.

use crate::hal::{
    analog::adc::Adc,
    hal::adc::Channel,
    hal::blocking::delay::DelayUs,
    stm32::{adc::RegisterBlock, ADC},
};

use adc_uart::sequencer;
use adc_uart::{AdcEvent, ConversionResults, ConversionTrigger};

const CR_ADEN: u32 = 1 << 0;
const CR_ADSTART: u32 = 1 << 2;
const CR_ADVREGEN: u32 = 1 << 28;

const ISR_ADRDY: u32 = 1 << 0;
const ISR_EOC: u32 = 1 << 2;
const ISR_EOS: u32 = 1 << 3;
const ISR_CCRDY: u32 = 1 << 13;

const IER_EOCIE: u32 = 1 << 2;

/// 12.5 ADC clock cycles.
const SMPR_SMP1: u32 = 0b011;

fn regs() -> &'static RegisterBlock {
    unsafe { &*ADC::ptr() }
}

/// Main-loop half of the ADC: owns the peripheral and the input pin.
pub struct BurstTrigger<PIN> {
    _adc: Adc,
    _pin: PIN,
}

/// Interrupt half of the ADC.
pub struct BurstResults;

pub fn split<PIN>(
    mut adc: Adc,
    pin: PIN,
    ranks: usize,
    delay: &mut impl DelayUs<u8>,
) -> (BurstTrigger<PIN>, BurstResults)
where
    PIN: Channel<Adc, ID = u8>,
{
    delay.delay_us(20); // Wait for ADC voltage regulator to stabilize
    adc.calibrate();

    let adc_regs = regs();
    unsafe {
        adc_regs
            .cfgr1
            .modify(|r, w| w.bits(sequencer::cfgr1(r.bits())));
        adc_regs
            .cfgr2
            .modify(|r, w| w.bits(sequencer::cfgr2(r.bits())));
        adc_regs.smpr.write(|w| w.bits(SMPR_SMP1));
        adc_regs
            .chselr
            .write(|w| w.bits(sequencer::chselr(PIN::channel(), ranks)));
    }
    while adc_regs.isr.read().bits() & ISR_CCRDY == 0 {}

    unsafe {
        adc_regs.isr.write(|w| w.bits(ISR_CCRDY | ISR_ADRDY));
        adc_regs.ier.write(|w| w.bits(IER_EOCIE));
        adc_regs
            .cr
            .modify(|r, w| w.bits((r.bits() & CR_ADVREGEN) | CR_ADEN));
    }
    while adc_regs.isr.read().bits() & ISR_ADRDY == 0 {}

    (BurstTrigger { _adc: adc, _pin: pin }, BurstResults)
}

impl<PIN> ConversionTrigger for BurstTrigger<PIN> {
    fn start_conversion(&mut self) {
        unsafe {
            regs()
                .cr
                .modify(|r, w| w.bits((r.bits() & CR_ADVREGEN) | CR_ADSTART));
        }
    }
}

impl ConversionResults for BurstResults {
    fn pending_event(&mut self) -> AdcEvent {
        let isr = regs().isr.read().bits();
        if isr & ISR_EOC != 0 {
            if isr & ISR_EOS != 0 {
                unsafe { regs().isr.write(|w| w.bits(ISR_EOS)) };
            }
            // EOC is cleared by reading the data register.
            AdcEvent::ResultLoaded
        } else {
            unsafe { regs().isr.write(|w| w.bits(isr)) };
            AdcEvent::Other
        }
    }

    fn latest_result(&mut self) -> u16 {
        regs().dr.read().bits() as u16
    }
}
