//! Inter-frame delay derived from the reading speed and frame density.

/// Percentage of the base interval added per unit of density deviation.
pub const ADJUST_PERCENT_PER_UNIT: f32 = 15.0;
/// Bound on the density deviation, in either direction.
pub const MAX_DEVIATION: f32 = 5.0;

/// Delay between frames that yields `wpm` words per minute for frames of
/// `mean_words_per_frame` words, in milliseconds.
pub fn base_interval_ms(wpm: u16, mean_words_per_frame: f32) -> u32 {
    if wpm == 0 || !(mean_words_per_frame > 0.0) {
        return 0;
    }
    round_ms(mean_words_per_frame * 60_000.0 / f32::from(wpm))
}

/// Stretch or shrink `base_ms` by how far a frame's character density
/// departs from the mean.
///
/// The deviation is `visible_len / mean_words_per_frame - mean_word_length`,
/// clamped to `±MAX_DEVIATION`, each unit moving the delay by
/// `ADJUST_PERCENT_PER_UNIT` percent. The result stays within 25% and 175%
/// of `base_ms`.
pub fn adjusted_interval_ms(
    base_ms: u32,
    frame_visible_len: usize,
    mean_words_per_frame: f32,
    mean_word_length: f32,
) -> u32 {
    if !(mean_words_per_frame > 0.0) {
        return base_ms;
    }

    let deviation = (frame_visible_len as f32 / mean_words_per_frame - mean_word_length)
        .clamp(-MAX_DEVIATION, MAX_DEVIATION);
    let base = base_ms as f32;
    round_ms(base + base * ADJUST_PERCENT_PER_UNIT * deviation / 100.0)
}

fn round_ms(ms: f32) -> u32 {
    if ms <= 0.0 {
        0
    } else if ms >= u32::MAX as f32 {
        u32::MAX
    } else {
        (ms + 0.5) as u32
    }
}
