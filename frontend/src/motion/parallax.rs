/// Fraction of the remaining distance covered each frame.
const FOLLOW: f64 = 0.08;

/// Pointer-following offset for the hero artwork.
///
/// The target is the pointer position normalised to `[-0.5, 0.5]` on both
/// axes; the current value eases toward it once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parallax {
    target: (f64, f64),
    current: (f64, f64),
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aims at the pointer, given the hero's bounding box in client pixels.
    pub fn point_at(&mut self, client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = (client_x - left) / width - 0.5;
        let y = (client_y - top) / height - 0.5;
        self.target = (x.clamp(-0.5, 0.5), y.clamp(-0.5, 0.5));
    }

    /// Pointer left the hero: drift back to centre.
    pub fn release(&mut self) {
        self.target = (0.0, 0.0);
    }

    pub fn step(&mut self) -> (f64, f64) {
        self.current.0 += (self.target.0 - self.current.0) * FOLLOW;
        self.current.1 += (self.target.1 - self.current.1) * FOLLOW;
        self.current
    }
}
