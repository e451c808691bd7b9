//! Main-loop side: trigger, wait, transmit, throttle.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Write;

use crate::config::Config;
use crate::handoff::BurstHandoff;
use crate::transmit::transmit_burst;

/// Starts a burst of conversions. Returns immediately; results arrive through the
/// interrupt handler.
pub trait ConversionTrigger {
    fn start_conversion(&mut self);
}

/// Low-power suspend used between checks of the ready flag.
pub trait WaitForEvent {
    fn wait_for_event(&mut self);
}

pub struct AcquisitionController<T, S, W, D> {
    trigger: T,
    idle: S,
    tx: W,
    delay: D,
    config: Config,
    bursts: u32,
}

impl<T, S, W, D> AcquisitionController<T, S, W, D>
where
    T: ConversionTrigger,
    S: WaitForEvent,
    W: Write<u8>,
    D: DelayMs<u32>,
{
    pub fn new(config: Config, trigger: T, idle: S, tx: W, delay: D) -> Self {
        Self {
            trigger,
            idle,
            tx,
            delay,
            config,
            bursts: 0,
        }
    }

    /// Bursts sent since the last throttle pause.
    pub fn burst_count(&self) -> u32 {
        self.bursts
    }

    /// One trigger/wait/transmit round.
    ///
    /// The throttle pause is taken at the top of the round, before the conversion, once
    /// `burst_threshold` bursts have gone out. A transmit error is returned after the
    /// burst has been counted.
    pub fn cycle(&mut self, handoff: &BurstHandoff) -> Result<(), W::Error> {
        if self.bursts >= self.config.burst_threshold {
            debug!("throttle pause after {=u32} bursts", self.bursts);
            self.delay.delay_ms(self.config.throttle_delay.ticks());
            self.bursts = 0;
        }

        self.trigger.start_conversion();

        while !handoff.is_ready() {
            self.idle.wait_for_event();
        }
        // Must be cleared before transmitting; the engine stays idle until the next trigger.
        handoff.clear();

        let burst = handoff.read(self.config.burst_size.get());
        let sent = transmit_burst(&mut self.tx, &burst);
        self.bursts += 1;
        sent
    }

    pub fn run_forever(&mut self, handoff: &BurstHandoff) -> ! {
        loop {
            if self.cycle(handoff).is_err() {
                warn!("burst transmission failed");
            }
        }
    }

    pub fn release(self) -> (T, S, W, D) {
        (self.trigger, self.idle, self.tx, self.delay)
    }
}
