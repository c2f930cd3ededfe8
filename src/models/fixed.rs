use super::{Model, Prob};

/// Static probability, never updated
#[derive(Clone, Copy)]
pub struct Fixed {
    p: Prob,
}

impl Fixed {
    pub fn new(p: Prob) -> Self {
        Self { p }
    }
}

impl Model for Fixed {
    fn predict(&self) -> Prob {
        self.p
    }

    fn update(&mut self, _bit: u8) {}
}
