//! Five slot star indicator for a rating.

pub const STAR_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(self) -> char {
        match self {
            Star::Full => '★',
            Star::Half => '⯪',
            Star::Empty => '☆',
        }
    }
}

/// Integer part as full stars, one half star for any remainder, the rest empty.
pub fn stars(rating: f64) -> Vec<Star> {
    if rating.is_nan() {
        return vec![Star::Empty; STAR_SLOTS];
    }

    let rating = rating.clamp(0.0, STAR_SLOTS as f64);
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() != 0.0);
    let empty = STAR_SLOTS - rating.ceil() as usize;

    let mut slots = Vec::with_capacity(STAR_SLOTS);
    slots.extend(std::iter::repeat_n(Star::Full, full));
    slots.extend(std::iter::repeat_n(Star::Half, half));
    slots.extend(std::iter::repeat_n(Star::Empty, empty));
    slots
}

pub fn render_stars(rating: f64) -> String {
    stars(rating).into_iter().map(Star::glyph).collect()
}
