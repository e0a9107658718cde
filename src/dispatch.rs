// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Dispatch** - *Family name to handler*
//!
//! The [`Dispatcher`] is an ordinary value built once at startup and passed to
//! whoever needs it. Every [`FunctionFamily`] is a [`Handler`] through the blanket
//! implementation, so registering a family is a single call.

use std::collections::BTreeMap;

use crate::dataset::{assemble, Output};
use crate::errors::ReferenceError;
use crate::families::{
    Beta, BetaIncomplete, Binomial, Erf, Frexp, FunctionFamily, Gamma, GammaDerivative,
    GammaIncomplete, GammaRatio, Normal, Polygamma, Zeta,
};
use crate::oracle::HighPrecisionOracle;

/// Object-safe face of a family.
pub trait Handler {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Generates the family's complete output document.
    fn generate(&self, oracle: &dyn HighPrecisionOracle) -> Result<Output, ReferenceError>;
}

impl<F: FunctionFamily> Handler for F {
    #[inline]
    fn name(&self) -> &'static str {
        F::NAME
    }

    #[inline]
    fn description(&self) -> &'static str {
        FunctionFamily::description(self)
    }

    fn generate(&self, oracle: &dyn HighPrecisionOracle) -> Result<Output, ReferenceError> {
        assemble(self, oracle)
    }
}

/// Table from family names (and aliases) to handlers.
#[derive(Default)]
pub struct Dispatcher {
    handlers: BTreeMap<&'static str, Box<dyn Handler>>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl Dispatcher {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every family this crate provides, plus `normal` as an alias of `norm`.
    pub fn standard() -> Self {
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register(Binomial)
            .register(Normal)
            .register(Beta)
            .register(BetaIncomplete)
            .register(Erf)
            .register(Gamma)
            .register(GammaDerivative)
            .register(GammaIncomplete)
            .register(GammaRatio)
            .register(Polygamma)
            .register(Zeta)
            .register(Frexp)
            .alias("normal", Normal::NAME);
        dispatcher
    }

    /// Adds `handler` under its own name, replacing any handler of that name.
    pub fn register<H: Handler + 'static>(&mut self, handler: H) -> &mut Self {
        self.handlers.insert(handler.name(), Box::new(handler));
        self
    }

    /// Makes `alias` resolve to the handler registered as `target`.
    pub fn alias(&mut self, alias: &'static str, target: &'static str) -> &mut Self {
        self.aliases.insert(alias, target);
        self
    }

    /// Handler for `name`, looking through aliases. `None` if unknown.
    pub fn resolve(&self, name: &str) -> Option<&dyn Handler> {
        let canonical = self.aliases.get(name).copied().unwrap_or(name);
        self.handlers.get(canonical).map(|h| h.as_ref())
    }

    /// Registered family names, sorted. Aliases are not included.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Registered handlers in name order.
    pub fn handlers(&self) -> impl Iterator<Item = &dyn Handler> + '_ {
        self.handlers.values().map(|h| h.as_ref())
    }
}
