//! Interrupt-side sample acquisition.

use crate::config::Config;
use crate::handoff::BurstHandoff;

/// What the ADC reports when its interrupt fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcEvent {
    /// A conversion finished and its result is waiting in the data register.
    ResultLoaded,
    Other,
}

/// The ADC as seen from its interrupt handler.
pub trait ConversionResults {
    fn pending_event(&mut self) -> AdcEvent;

    /// Latest conversion result. Only meaningful right after [`AdcEvent::ResultLoaded`].
    fn latest_result(&mut self) -> u16;
}

/// Collects one burst of samples per trigger.
///
/// Runs in interrupt context: it never blocks and only touches its own cursor and the
/// handoff.
pub struct SampleAcquisitionEngine {
    burst_size: usize,
    index: usize,
}

impl SampleAcquisitionEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            burst_size: config.burst_size.get(),
            index: 0,
        }
    }

    /// Samples captured so far in the current burst.
    pub fn sample_index(&self) -> usize {
        self.index
    }

    pub fn on_conversion_complete<R>(&mut self, results: &mut R, handoff: &BurstHandoff)
    where
        R: ConversionResults,
    {
        match results.pending_event() {
            AdcEvent::ResultLoaded => {
                handoff.store(self.index, results.latest_result());
                self.index += 1;
                if self.index >= self.burst_size {
                    self.index = 0;
                    handoff.publish();
                }
            }
            AdcEvent::Other => trace!("ignoring ADC event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BurstSize;

    struct Feed {
        events: Vec<(AdcEvent, u16)>,
        current: u16,
    }

    impl Feed {
        fn new(mut events: Vec<(AdcEvent, u16)>) -> Self {
            events.reverse();
            Self { events, current: 0 }
        }

        fn results(values: &[u16]) -> Self {
            Self::new(values.iter().map(|v| (AdcEvent::ResultLoaded, *v)).collect())
        }
    }

    impl ConversionResults for Feed {
        fn pending_event(&mut self) -> AdcEvent {
            let (event, value) = self.events.pop().expect("no more events");
            self.current = value;
            event
        }

        fn latest_result(&mut self) -> u16 {
            self.current
        }
    }

    #[test]
    fn fills_and_publishes_reference_burst() {
        let handoff = BurstHandoff::new();
        let mut engine = SampleAcquisitionEngine::new(&Config::default());
        let mut feed = Feed::results(&[0x1234, 0xABCD, 0x0001]);

        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 1);
        assert!(!handoff.is_ready());

        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 2);
        assert!(!handoff.is_ready());

        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 0);
        assert!(handoff.is_ready());
        assert_eq!(handoff.read(3).as_slice(), &[0x1234, 0xABCD, 0x0001]);
    }

    #[test]
    fn flag_rises_once_per_burst_for_every_size() {
        for n in 1..=crate::MAX_BURST_SIZE {
            let config = Config::default().burst_size(BurstSize::new(n).unwrap());
            let handoff = BurstHandoff::new();
            let mut engine = SampleAcquisitionEngine::new(&config);
            let values: Vec<u16> = (0..n as u16).collect();
            let mut feed = Feed::results(&values);

            let mut rises = 0;
            for i in 0..n {
                let before = handoff.is_ready();
                engine.on_conversion_complete(&mut feed, &handoff);
                if !before && handoff.is_ready() {
                    rises += 1;
                    assert_eq!(i, n - 1);
                }
            }
            assert_eq!(rises, 1, "burst size {n}");
            assert_eq!(engine.sample_index(), 0);
            assert_eq!(handoff.read(n).as_slice(), values.as_slice());
        }
    }

    #[test]
    fn unknown_events_are_ignored() {
        let handoff = BurstHandoff::new();
        let mut engine = SampleAcquisitionEngine::new(&Config::default());
        let mut feed = Feed::new(vec![
            (AdcEvent::Other, 0xffff),
            (AdcEvent::ResultLoaded, 4),
            (AdcEvent::Other, 0xffff),
            (AdcEvent::Other, 0xffff),
            (AdcEvent::ResultLoaded, 5),
        ]);

        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 0);
        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 1);
        engine.on_conversion_complete(&mut feed, &handoff);
        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 1);
        assert!(!handoff.is_ready());

        engine.on_conversion_complete(&mut feed, &handoff);
        assert_eq!(engine.sample_index(), 2);
        assert!(!handoff.is_ready());
        assert_eq!(handoff.read(2).as_slice(), &[4, 5]);
    }
}
