use embedded_hal::serial::Write;

/// Writes `samples` as big-endian 16-bit words, high byte first, with no framing.
///
/// Each byte write blocks until the transmitter takes it.
pub fn transmit_burst<W>(tx: &mut W, samples: &[u16]) -> Result<(), W::Error>
where
    W: Write<u8>,
{
    for sample in samples {
        let [high, low] = sample.to_be_bytes();
        nb::block!(tx.write(high))?;
        nb::block!(tx.write(low))?;
    }
    Ok(())
}
