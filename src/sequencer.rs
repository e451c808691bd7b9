//! Register values for the STM32G0 ADC sequencer in burst mode.
//!
//! One rank per sample, all on the same input, so a single ADSTART converts a whole burst.
//! Kept free of peripheral access so the values can be checked on the host.

/// Ranks available in the sequencer's fully configurable mode.
pub const SEQUENCE_RANKS: usize = 8;

const SEQUENCE_END: u32 = 0xf;

const CFGR1_RES: u32 = 0b11 << 3;
const CFGR1_OVRMOD: u32 = 1 << 12;
const CFGR1_CONT: u32 = 1 << 13;
const CFGR1_WAIT: u32 = 1 << 14;
const CFGR1_DISCEN: u32 = 1 << 16;
const CFGR1_CHSELRMOD: u32 = 1 << 21;

const CFGR2_OVSE: u32 = 1 << 0;

/// CHSELR converting `channel` `ranks` times in a row.
pub fn chselr(channel: u8, ranks: usize) -> u32 {
    (0..SEQUENCE_RANKS).fold(0, |chselr, rank| {
        let slot = if rank < ranks {
            channel as u32
        } else {
            SEQUENCE_END
        };
        chselr | (slot << (4 * rank))
    })
}

/// CFGR1 for 12-bit single-sequence bursts.
///
/// WAIT holds the next conversion until the data register has been read, so a slow
/// interrupt can't overrun the burst and lose an end-of-conversion.
pub fn cfgr1(current: u32) -> u32 {
    (current & !(CFGR1_RES | CFGR1_OVRMOD | CFGR1_CONT | CFGR1_DISCEN))
        | CFGR1_CHSELRMOD
        | CFGR1_WAIT
}

/// CFGR2 with hardware oversampling off.
pub fn cfgr2(current: u32) -> u32 {
    current & !CFGR2_OVSE
}
