const VIEWPORT_AREA_PER_STAR: f64 = 10_000.0;
const METEOR_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: usize,
    /// Position as a percentage of the viewport.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {x:.2}%; top: {y:.2}%; opacity: {opacity:.2}; animation-duration: {duration:.2}s;",
            size = self.size,
            x = self.x,
            y = self.y,
            opacity = self.opacity,
            duration = self.duration,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meteor {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Meteor {
    pub fn style(&self) -> String {
        format!(
            "width: {width:.2}px; height: 2px; left: {x:.2}%; top: {y:.2}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s;",
            width = self.size * 50.0,
            x = self.x,
            y = self.y,
            delay = self.delay,
            duration = self.duration,
        )
    }
}

pub fn star_count(width: f64, height: f64) -> usize {
    ((width.max(0.0) * height.max(0.0)) / VIEWPORT_AREA_PER_STAR).floor() as usize
}

/// `random` must yield values in `[0, 1)`.
pub fn generate_stars(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..star_count(width, height))
        .map(|id| Star {
            id,
            x: random() * 100.0,
            y: random() * 100.0,
            size: random() * 3.0 + 1.0,
            opacity: random() * 0.5 + 0.5,
            duration: random() * 4.0 + 2.0,
        })
        .collect()
}

pub fn generate_meteors(mut random: impl FnMut() -> f64) -> Vec<Meteor> {
    (0..METEOR_COUNT)
        .map(|id| Meteor {
            id,
            x: random() * 100.0,
            y: random() * 20.0,
            size: random() * 2.0 + 1.0,
            delay: random() * 15.0,
            duration: random() * 3.0 + 3.0,
        })
        .collect()
}
