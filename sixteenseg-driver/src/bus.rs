//! Chain registry and the bit-banged pin protocol engine

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use sixteenseg_core::marquee::Marquee;
use sixteenseg_core::{compose_frame, wire_bits, CLOCK_PULSE_US, DIGITS_PER_CHAIN};
use sixteenseg_core::{LAST_CHAR, MAX_CHAINS};

/// Hold time per diagnostic sweep step, in milliseconds
const DIGIT_TEST_STEP_MS: u32 = 1500;

/// Errors surfaced by the driver
///
/// Character-level problems never error: unsupported characters render
/// blank. Only registry misuse and pin faults are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The chain registry is already at `MAX_CHAINS`
    ChainsFull,
    /// No chain is registered at that index
    InvalidChain,
    /// A pin transition failed
    Pin(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Pin(err)
    }
}

/// One data+clock pin pair driving one module
struct Chain<P> {
    data: P,
    clock: P,
}

/// Driver for a left-to-right sequence of 16-segment display modules
///
/// The driver keeps no shadow of what is currently displayed; visual
/// state lives only on the modules' latches, and the only way anything
/// reaches them is a full 36-bit frame write.
pub struct SixteenSeg<P, D> {
    chains: Vec<Chain<P>, MAX_CHAINS>,
    delay: D,
}

impl<P, D> SixteenSeg<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver with no chains registered yet
    pub fn new(delay: D) -> Self {
        Self {
            chains: Vec::new(),
            delay,
        }
    }

    /// Register the next module chain, left to right
    ///
    /// Drives both pins low, the bus idle state, then appends the
    /// descriptor. The registry is fixed-capacity; a full registry is
    /// left untouched and reported as `Error::ChainsFull`.
    pub fn add_chain(&mut self, mut data: P, mut clock: P) -> Result<(), Error<P::Error>> {
        if self.chains.is_full() {
            return Err(Error::ChainsFull);
        }

        data.set_low()?;
        clock.set_low()?;

        // capacity was checked above
        let _ = self.chains.push(Chain { data, clock });
        Ok(())
    }

    /// Number of registered chains
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Digit positions across the whole registry
    pub fn digit_count(&self) -> usize {
        self.chains.len() * DIGITS_PER_CHAIN
    }

    /// Clock one bit out to a chain
    ///
    /// Sets the data line, then pulses the clock high for
    /// `CLOCK_PULSE_US`. The module samples data somewhere inside that
    /// pulse; nothing is read back.
    pub fn write_bit(&mut self, chain: usize, bit: bool) -> Result<(), Error<P::Error>> {
        let chain = self.chains.get_mut(chain).ok_or(Error::InvalidChain)?;

        if bit {
            chain.data.set_high()?;
        } else {
            chain.data.set_low()?;
        }

        chain.clock.set_high()?;
        self.delay.delay_us(CLOCK_PULSE_US);
        chain.clock.set_low()?;
        Ok(())
    }

    /// Send one full 36-bit update to a chain
    pub fn write_frame(&mut self, chain: usize, frame: u32) -> Result<(), Error<P::Error>> {
        for bit in wire_bits(frame) {
            self.write_bit(chain, bit)?;
        }
        Ok(())
    }

    /// Display a pair of characters on one module
    pub fn write_chars(
        &mut self,
        chain: usize,
        left: u8,
        right: u8,
    ) -> Result<(), Error<P::Error>> {
        self.write_frame(chain, compose_frame(left, right))
    }

    /// Scroll `message` across every registered module
    ///
    /// Blocks until the message has fully entered and left the display,
    /// waiting `frame_delay_ms` between animation frames. Within one
    /// frame, modules are written right to left; every write finishes
    /// before the frame delay, so the order is invisible on the glass.
    /// An empty message, or an empty registry, is a no-op.
    pub fn scroll(&mut self, message: &str, frame_delay_ms: u32) -> Result<(), Error<P::Error>> {
        if self.chains.is_empty() {
            return Ok(());
        }

        for frame in Marquee::new(message.as_bytes(), self.digit_count()) {
            for chain in (0..self.chains.len()).rev() {
                let (left, right) = frame.pair(chain);
                self.write_chars(chain, left, right)?;
            }
            self.delay.delay_ms(frame_delay_ms);
        }
        Ok(())
    }

    /// Step one module through the font for visual inspection
    ///
    /// Shows `(c, c + 1)` pairs from `start` through the end of the
    /// font, advancing by two and holding each pair for 1.5 seconds.
    /// On an odd-sized tail the final right digit falls past the font
    /// and renders blank.
    pub fn digit_test(&mut self, chain: usize, start: u8) -> Result<(), Error<P::Error>> {
        let mut c = start;
        while c <= LAST_CHAR {
            self.write_chars(chain, c, c + 1)?;
            self.delay.delay_ms(DIGIT_TEST_STEP_MS);
            c += 2;
        }
        Ok(())
    }
}
