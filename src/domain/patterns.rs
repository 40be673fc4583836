use rand::Rng;

use super::{LifeError, LifeResult};

/// A named seed: declared board size plus the (row, col) cells that start alive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    key: String,
    name: String,
    description: String,
    height: usize,
    width: usize,
    coordinates: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a rectangular pattern, validating its size and every coordinate
    pub fn rect(
        key: impl Into<String>,
        name: impl Into<String>,
        height: usize,
        width: usize,
        coordinates: Vec<(usize, usize)>,
    ) -> LifeResult<Self> {
        let key = key.into();
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions { height, width });
        }
        if let Some(&(row, col)) = coordinates.iter().find(|&&(r, c)| r >= height || c >= width) {
            return Err(LifeError::InvalidPattern { pattern: key, row, col });
        }
        Ok(Self {
            key,
            name: name.into(),
            description: String::new(),
            height,
            width,
            coordinates,
        })
    }

    /// Square convenience constructor
    pub fn square(
        key: impl Into<String>,
        name: impl Into<String>,
        size: usize,
        coordinates: Vec<(usize, usize)>,
    ) -> LifeResult<Self> {
        Self::rect(key, name, size, size, coordinates)
    }

    /// Random soup where each cell is alive with probability `density`
    pub fn random<R: Rng>(
        key: impl Into<String>,
        height: usize,
        width: usize,
        density: f64,
        rng: &mut R,
    ) -> LifeResult<Self> {
        let key = key.into();
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let coordinates = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .filter(|_| rng.random_bool(density))
            .collect();
        let name = format!("Random {height}x{width}");
        Ok(Self::rect(key, name, height, width, coordinates)?
            .with_description(format!("{:.0}% soup", density * 100.0)))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Catalog lookup name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Initially-alive cells in declaration order
    pub fn coordinates(&self) -> &[(usize, usize)] {
        &self.coordinates
    }
}

/// Named, immutable seed patterns selectable by key
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Catalog with the built-in presets
    pub fn builtin() -> Self {
        Self {
            patterns: presets::all_patterns(),
        }
    }

    pub fn lookup(&self, name: &str) -> LifeResult<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.key == name)
            .ok_or_else(|| LifeError::unknown_pattern(name))
    }

    /// Add a pattern, replacing any existing one with the same key
    pub fn register(&mut self, pattern: Pattern) {
        match self.patterns.iter_mut().find(|p| p.key == pattern.key) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    /// Keys in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in patterns, each sized to the board it runs on
pub mod presets {
    use super::Pattern;

    /// Presets are literal data; tests check them against `Pattern::rect`'s rules.
    fn preset(
        key: &str,
        name: &str,
        description: &str,
        height: usize,
        width: usize,
        coordinates: &[(usize, usize)],
    ) -> Pattern {
        Pattern {
            key: key.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            height,
            width,
            coordinates: coordinates.to_vec(),
        }
    }

    /// Blinker - period 2 oscillator on a 5x5 board
    pub fn blinker() -> Pattern {
        preset(
            "blinker",
            "Blinker",
            "Oscillator (period 2)",
            5,
            5,
            &[(1, 2), (2, 2), (3, 2)],
        )
    }

    /// Pulsar - period 3 oscillator on a 17x17 board
    pub fn pulsar() -> Pattern {
        preset(
            "pulsar",
            "Pulsar",
            "Oscillator (period 3)",
            17,
            17,
            &[
                // Top
                (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
                // Upper middle
                (4, 2), (4, 7), (4, 9), (4, 14),
                (5, 2), (5, 7), (5, 9), (5, 14),
                (6, 2), (6, 7), (6, 9), (6, 14),
                // Center
                (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
                (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
                // Lower middle
                (10, 2), (10, 7), (10, 9), (10, 14),
                (11, 2), (11, 7), (11, 9), (11, 14),
                (12, 2), (12, 7), (12, 9), (12, 14),
                // Bottom
                (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
            ],
        )
    }

    /// Gosper Glider Gun with an eater in the lower right, on a 32x45 board
    pub fn glider_gun() -> Pattern {
        preset(
            "gliderGun",
            "Gosper's Glider Gun",
            "Emits gliders (period 30)",
            32,
            45,
            &[
                // Left block
                (5, 1), (6, 1), (5, 2), (6, 2),
                // Left queen bee
                (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
                (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
                (7, 17), (6, 18),
                // Right shuttle
                (3, 21), (4, 21), (5, 21), (3, 22), (4, 22), (5, 22), (2, 23),
                (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
                // Right block
                (3, 35), (4, 35), (3, 36), (4, 36),
                // Eater
                (22, 35), (23, 35), (25, 35), (22, 36), (23, 36), (25, 36),
                (26, 36), (27, 36), (28, 37), (22, 38), (23, 38), (25, 38),
                (26, 38), (27, 38), (23, 39), (25, 39), (23, 40), (25, 40),
                (24, 41),
            ],
        )
    }

    /// All built-in patterns in selector order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), pulsar(), glider_gun()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_builtin_keys_and_sizes() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["blinker", "pulsar", "gliderGun"]);

        let gun = catalog.lookup("gliderGun").unwrap();
        assert_eq!((gun.height(), gun.width()), (32, 45));
        assert_eq!(gun.name(), "Gosper's Glider Gun");
        assert_eq!(catalog.lookup("pulsar").unwrap().coordinates().len(), 48);
    }

    #[test]
    fn test_builtins_satisfy_pattern_invariants() {
        for p in presets::all_patterns() {
            let checked = Pattern::rect(p.key(), p.name(), p.height(), p.width(), p.coordinates().to_vec());
            assert!(checked.is_ok(), "{} is out of bounds", p.key());
        }
    }

    #[test]
    fn test_unknown_pattern() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(
            catalog.lookup("doesNotExist"),
            Err(LifeError::UnknownPattern("doesNotExist".to_owned()))
        );
        // Keys are case-sensitive
        assert!(catalog.lookup("Blinker").is_err());
    }

    #[test]
    fn test_rect_rejects_bad_input() {
        assert_eq!(
            Pattern::rect("bad", "Bad", 3, 3, vec![(1, 1), (3, 0)]),
            Err(LifeError::InvalidPattern { pattern: "bad".to_owned(), row: 3, col: 0 })
        );
        assert!(matches!(
            Pattern::square("empty", "Empty", 0, vec![]),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_register_replaces_same_key() {
        let mut catalog = PatternCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(Pattern::square("dot", "Dot", 3, vec![(1, 1)]).unwrap());
        catalog.register(Pattern::square("dot", "Dot", 4, vec![(0, 0)]).unwrap());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("dot").unwrap().height(), 4);
    }

    #[test]
    fn test_random_soup_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let soup = Pattern::random("soup", 20, 30, 0.3, &mut rng).unwrap();
        assert!(!soup.coordinates().is_empty());
        assert!(soup.coordinates().len() < 20 * 30);
        assert!(soup.coordinates().iter().all(|&(r, c)| r < 20 && c < 30));

        let empty = Pattern::random("none", 5, 5, 0.0, &mut rng).unwrap();
        assert!(empty.coordinates().is_empty());
    }
}
