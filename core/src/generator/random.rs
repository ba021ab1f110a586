use super::*;

/// Draws `(trigger, effect)` pairs uniformly, redrawing until the pair passes
/// the rule constructor.
#[derive(Clone, Debug)]
pub struct RandomMysteryGenerator {
    rng: rand::rngs::SmallRng,
}

impl RandomMysteryGenerator {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }
}

impl MysteryGenerator for RandomMysteryGenerator {
    fn generate(&mut self) -> MysteryRule {
        use rand::RngExt;

        loop {
            let trigger: Cell = self.rng.random_range(0..CELL_COUNT);
            let effect: Cell = self.rng.random_range(0..CELL_COUNT);
            match MysteryRule::new(trigger, effect) {
                Ok(rule) => return rule,
                Err(_) => log::trace!("rejected mystery pair ({}, {})", trigger, effect),
            }
        }
    }
}
