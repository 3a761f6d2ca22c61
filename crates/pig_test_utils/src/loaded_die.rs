//! Scripted dice.

use pig_core::dice::RollSource;

/// A die that replays a fixed list of faces.
///
/// Once the script is exhausted it starts over from the first face, so a
/// short script can drive a whole game.
#[derive(Debug, Clone)]
pub struct LoadedDie {
    faces: Vec<u8>,
    next: usize,
    rolled: usize,
}

impl LoadedDie {
    /// Die replaying `faces` in order.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty or holds a value outside `1..=6`.
    pub fn new(faces: &[u8]) -> Self {
        assert!(!faces.is_empty(), "a loaded die needs at least one face");
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "faces must be in 1..=6: {faces:?}"
        );
        Self {
            faces: faces.to_vec(),
            next: 0,
            rolled: 0,
        }
    }

    /// Die that always shows `face`.
    pub fn always(face: u8) -> Self {
        Self::new(&[face])
    }

    /// Number of rolls made so far.
    pub fn rolls(&self) -> usize {
        self.rolled
    }
}

impl RollSource for LoadedDie {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        self.rolled += 1;
        face
    }
}
