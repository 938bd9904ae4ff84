use ledseg_abi::{PATTERN_C, PATTERN_DEG, PATTERN_F};

use crate::{NumberWriter, PatternSink};

/// Whole-degree temperatures with optional `°`, `°C` or `°F` suffix.
///
/// The suffix glyphs count against `box_size`, so a box of 4 holds `-12°`
/// or ` 25°` and the number itself is justified in the remaining cells. A
/// box smaller than the suffix, or a negative box, leaves the number
/// unpadded.
pub struct TemperatureWriter<S: PatternSink> {
    numbers: NumberWriter<S>,
}

/// Box left for the number once `suffix` glyph cells are reserved.
#[inline]
fn number_box(box_size: i8, suffix: i8) -> i8 {
    if box_size >= suffix { box_size - suffix } else { 0 }
}

impl<S: PatternSink> TemperatureWriter<S> {
    pub fn new(numbers: NumberWriter<S>) -> Self {
        Self { numbers }
    }

    #[inline]
    pub fn number_writer(&mut self) -> &mut NumberWriter<S> {
        &mut self.numbers
    }

    pub fn into_inner(self) -> NumberWriter<S> {
        self.numbers
    }

    /// Bare number. Returns the cells consumed.
    pub fn write_temp(&mut self, temp: i16, box_size: i8) -> u8 {
        self.numbers.write_signed_decimal(temp, box_size)
    }

    pub fn write_temp_deg(&mut self, temp: i16, box_size: i8) -> u8 {
        self.write_with_suffix(temp, box_size, &[PATTERN_DEG])
    }

    pub fn write_temp_deg_c(&mut self, temp: i16, box_size: i8) -> u8 {
        self.write_with_suffix(temp, box_size, &[PATTERN_DEG, PATTERN_C])
    }

    pub fn write_temp_deg_f(&mut self, temp: i16, box_size: i8) -> u8 {
        self.write_with_suffix(temp, box_size, &[PATTERN_DEG, PATTERN_F])
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

    fn write_with_suffix(&mut self, temp: i16, box_size: i8, suffix: &[u8]) -> u8 {
        let glyphs = suffix.len() as u8;
        let written = self
            .numbers
            .write_signed_decimal(temp, number_box(box_size, glyphs as i8));
        // unlike write_patterns, keep counting past the end of the display
        let sink = self.numbers.sink_mut();
        for &pattern in suffix {
            sink.write_pattern(pattern);
        }
        written + glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternWriter;
    use ledseg_abi::{PATTERN_1, PATTERN_2, PATTERN_5, PATTERN_7, PATTERN_MINUS, PATTERN_SPACE};
    use ledseg_gfx::SegmentBuffer;

    type Writer<'a> = TemperatureWriter<PatternWriter<'a, SegmentBuffer<5>>>;

    fn render(f: impl FnOnce(&mut Writer<'_>) -> u8) -> (u8, [u8; 5]) {
        let mut buf = SegmentBuffer::<5>::new();
        let mut w = TemperatureWriter::new(NumberWriter::new(PatternWriter::new(&mut buf)));
        let written = f(&mut w);
        (written, *buf.patterns())
    }

    #[test]
    fn degree_suffix_fits_box() {
        let (written, cells) = render(|w| w.write_temp_deg(25, 4));
        assert_eq!(written, 4);
        assert_eq!(cells, [PATTERN_SPACE, PATTERN_2, PATTERN_5, PATTERN_DEG, PATTERN_SPACE]);

        let (written, cells) = render(|w| w.write_temp_deg(-12, 4));
        assert_eq!(written, 4);
        assert_eq!(cells, [PATTERN_MINUS, PATTERN_1, PATTERN_2, PATTERN_DEG, PATTERN_SPACE]);
    }

    #[test]
    fn unit_glyphs() {
        let (written, cells) = render(|w| w.write_temp_deg_c(5, 4));
        assert_eq!(written, 4);
        assert_eq!(cells, [PATTERN_SPACE, PATTERN_5, PATTERN_DEG, PATTERN_C, PATTERN_SPACE]);

        let (written, cells) = render(|w| w.write_temp_deg_f(-5, 0));
        assert_eq!(written, 4);
        assert_eq!(cells, [PATTERN_MINUS, PATTERN_5, PATTERN_DEG, PATTERN_F, PATTERN_SPACE]);
    }

    #[test]
    fn small_or_negative_box_means_no_padding() {
        let (written, cells) = render(|w| w.write_temp_deg_c(7, 1));
        assert_eq!(written, 3);
        assert_eq!(cells[..3], [PATTERN_7, PATTERN_DEG, PATTERN_C]);

        let (written, cells) = render(|w| w.write_temp_deg(7, -4));
        assert_eq!(written, 2);
        assert_eq!(cells[..2], [PATTERN_7, PATTERN_DEG]);
    }

    #[test]
    fn overflowing_temperature_still_counts_cells() {
        let (written, cells) = render(|w| w.write_temp_deg_c(-1234, 4));
        assert_eq!(written, 7);
        assert_eq!(cells[..3], [PATTERN_MINUS, PATTERN_1, PATTERN_2]);
    }

    #[test]
    fn bare_temperature() {
        let (written, cells) = render(|w| w.write_temp(-5, -3));
        assert_eq!(written, 3);
        assert_eq!(cells[..3], [PATTERN_MINUS, PATTERN_5, PATTERN_SPACE]);
    }
}
