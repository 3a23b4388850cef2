use crate::app::species::{Bear, Eagle, Handle, Monkey, Shark, UnknownAnimal, Whale};
use std::collections::HashMap;

/// Fixed species-name lookup, built once at startup.
pub struct Registry {
    animals: HashMap<&'static str, Handle>,
}

impl Registry {
    pub fn builtin() -> Self {
        let animals = HashMap::from([
            ("monkey", Handle::Monkey(Monkey)),
            ("shark", Handle::Shark(Shark)),
            ("eagle", Handle::Eagle(Eagle)),
            ("bear", Handle::Bear(Bear)),
            ("whale", Handle::Whale(Whale)),
        ]);
        Self { animals }
    }

    /// Keys are case-sensitive. A miss yields the unknown handle rather than an error.
    pub fn lookup(&self, key: &str) -> Handle {
        self.animals
            .get(key)
            .copied()
            .unwrap_or(Handle::Unknown(UnknownAnimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_to_their_species() {
        let registry = Registry::builtin();
        assert_eq!(registry.lookup("monkey"), Handle::Monkey(Monkey));
        assert_eq!(registry.lookup("whale"), Handle::Whale(Whale));
    }

    #[test]
    fn misses_fall_back_to_unknown() {
        let registry = Registry::builtin();
        for key in ["dog", "", "Monkey", "SHARK"] {
            assert_eq!(registry.lookup(key), Handle::Unknown(UnknownAnimal), "{key:?}");
        }
    }
}
