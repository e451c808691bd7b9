//! Burst sampling core for the ADC-to-UART streamer.
//!
//! The ADC interrupt feeds a [`SampleAcquisitionEngine`], which fills a [`BurstHandoff`] and
//! raises its ready flag once a burst is complete. The main loop runs an
//! [`AcquisitionController`] that triggers conversions, waits for the flag, writes the burst
//! to the serial port big-endian and pauses after every `burst_threshold` bursts.
//!
//! Everything here is hardware agnostic: the firmware binary supplies the ADC, UART, delay
//! and wait-for-event implementations.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod engine;
pub mod handoff;
pub mod sequencer;
pub mod transmit;

pub use config::{BurstSize, Config, ConfigError};
pub use controller::{AcquisitionController, ConversionTrigger, WaitForEvent};
pub use engine::{AdcEvent, ConversionResults, SampleAcquisitionEngine};
pub use handoff::{Burst, BurstHandoff, MAX_BURST_SIZE};
pub use transmit::transmit_burst;
