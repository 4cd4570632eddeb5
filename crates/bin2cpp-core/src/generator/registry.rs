//! Name-keyed lookup of generator variants.

use super::{ArrayGenerator, GeneratedModule, Generator, SegmentGenerator, StringGenerator};
use crate::error::{Error, Result};
use crate::request::GenerationRequest;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the generator used when none is requested
pub const DEFAULT_GENERATOR: &str = "array";

/// Registry of generator variants, keyed by [`Generator::name`]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in variants
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ArrayGenerator);
        registry.register(StringGenerator);
        registry.register(SegmentGenerator);
        registry
    }

    /// Adds a variant, returning the one previously registered under its name
    pub fn register(&mut self, generator: impl Generator + 'static) -> Option<Box<dyn Generator>> {
        self.generators
            .insert(generator.name().to_string(), Box::new(generator))
    }

    /// Looks up a variant by name
    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(|g| g.as_ref())
    }

    /// Registered names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Runs the named variant on `request`
    pub fn generate(&self, name: &str, request: &GenerationRequest) -> Result<GeneratedModule> {
        let generator = self.get(name).ok_or_else(|| {
            Error::invalid_configuration(format!(
                "unknown generator '{}' (available: {})",
                name,
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })?;
        generator.generate(request)
    }
}
