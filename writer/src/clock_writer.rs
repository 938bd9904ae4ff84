use ledseg_abi::{PATTERN_0, PATTERN_SPACE};
use ledseg_lib::{ClockMode, WriterConfig};

use crate::{NumberWriter, PatternSink};

/// `hh:mm` on a clock module whose colon is wired to one cell's decimal
/// point (cell 1 on most 4-digit modules).
pub struct ClockWriter<S: PatternSink> {
    numbers: NumberWriter<S>,
    colon_digit: u8,
    mode: ClockMode,
}

impl<S: PatternSink> ClockWriter<S> {
    pub fn new(numbers: NumberWriter<S>, colon_digit: u8) -> Self {
        Self {
            numbers,
            colon_digit,
            mode: ClockMode::H24,
        }
    }

    /// Colon cell and hour format taken from `config`.
    pub fn with_config(numbers: NumberWriter<S>, config: &WriterConfig) -> Self {
        Self {
            numbers,
            colon_digit: config.colon_digit,
            mode: config.clock_mode,
        }
    }

    #[inline]
    pub fn colon_digit(&self) -> u8 {
        self.colon_digit
    }

    #[inline]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    #[inline]
    pub fn number_writer(&mut self) -> &mut NumberWriter<S> {
        &mut self.numbers
    }

    pub fn into_inner(self) -> NumberWriter<S> {
        self.numbers
    }

    /// Hour with a leading zero, then minute, then the colon.
    pub fn write_hour_minute24(&mut self, hour: u8, minute: u8) {
        self.numbers.write_dec2(hour, PATTERN_0);
        self.numbers.write_dec2(minute, PATTERN_0);
        self.write_colon(true);
    }

    /// Hour with a leading space, then minute, then the colon.
    pub fn write_hour_minute12(&mut self, hour: u8, minute: u8) {
        self.numbers.write_dec2(hour, PATTERN_SPACE);
        self.numbers.write_dec2(minute, PATTERN_0);
        self.write_colon(true);
    }

    /// Hour and minute in the configured format.
    pub fn write_hour_minute(&mut self, hour: u8, minute: u8) {
        match self.mode {
            ClockMode::H24 => self.write_hour_minute24(hour, minute),
            ClockMode::H12 => self.write_hour_minute12(hour, minute),
        }
    }

    pub fn write_colon(&mut self, state: bool) {
        self.numbers.set_decimal_point_at(self.colon_digit, state);
    }

    #[inline]
    pub fn home(&mut self) {
        self.numbers.home();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    #[inline]
    pub fn clear_to_end(&mut self) {
        self.numbers.clear_to_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternWriter;
    use ledseg_abi::{PATTERN_1, PATTERN_2, PATTERN_3, PATTERN_5, PATTERN_7, PATTERN_9};
    use ledseg_gfx::SegmentBuffer;
    use ledseg_lib::config;

    const DP: u8 = 0x80;

    #[test]
    fn twenty_four_hour() {
        let mut buf = SegmentBuffer::<4>::new();
        let mut clock = ClockWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)), 1);
        clock.write_hour_minute24(9, 5);
        assert_eq!(buf.patterns(), &[PATTERN_0, PATTERN_9 | DP, PATTERN_0, PATTERN_5]);
    }

    #[test]
    fn twelve_hour() {
        let mut buf = SegmentBuffer::<4>::new();
        let mut clock = ClockWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)), 1);
        clock.write_hour_minute12(9, 5);
        assert_eq!(buf.patterns(), &[PATTERN_SPACE, PATTERN_9 | DP, PATTERN_0, PATTERN_5]);
    }

    #[test]
    fn colon_toggles_without_touching_digits() {
        let mut buf = SegmentBuffer::<4>::new();
        let mut clock = ClockWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)), 1);
        clock.write_hour_minute24(12, 35);
        clock.write_colon(false);
        assert_eq!(buf.patterns(), &[PATTERN_1, PATTERN_2, PATTERN_3, PATTERN_5]);
    }

    #[test]
    fn configured_mode_and_colon() {
        let cfg = config::parse("ledseg.clock=12 ledseg.colon=2").unwrap();
        let mut buf = SegmentBuffer::<4>::new();
        let mut clock =
            ClockWriter::with_config(NumberWriter::new(PatternWriter::new(&mut buf)), &cfg);
        assert_eq!(clock.mode(), ClockMode::H12);
        assert_eq!(clock.colon_digit(), 2);
        clock.write_hour_minute(1, 30);
        assert_eq!(buf.patterns(), &[PATTERN_SPACE, PATTERN_1, PATTERN_3 | DP, PATTERN_0]);
    }

    #[test]
    fn out_of_range_fields_are_blank() {
        let mut buf = SegmentBuffer::from_patterns([0xFF; 4]);
        let mut clock = ClockWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)), 1);
        clock.write_hour_minute24(100, 7);
        clock.write_colon(false);
        assert_eq!(buf.patterns(), &[PATTERN_SPACE, PATTERN_SPACE, PATTERN_0, PATTERN_7]);
    }

    #[test]
    fn clear_homes_for_next_frame() {
        let mut buf = SegmentBuffer::<4>::new();
        let mut clock = ClockWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)), 1);
        clock.write_hour_minute24(23, 59);
        clock.clear();
        clock.write_hour_minute24(0, 0);
        assert_eq!(buf.patterns(), &[PATTERN_0, PATTERN_0 | DP, PATTERN_0, PATTERN_0]);
    }
}
