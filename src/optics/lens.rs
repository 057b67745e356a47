//! Lenses for focusing on fields of immutable structures.
//!
//! A lens pairs a getter with a setter. The setter never mutates: it consumes
//! the source and returns a new one with the focused field replaced. Lenses
//! compose, so a chain of lenses reaches arbitrarily deep into nested data.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(s.clone(), lens.get(&s).clone()) == s`
//! 2. **PutGet**: `lens.get(&lens.set(s, a.clone())) == &a`
//! 3. **PutPut**: `lens.set(lens.set(s, a1), a2) == lens.set(s, a2)`
//!
//! # Examples
//!
//! ```
//! use functional_core::lens;
//! use functional_core::optics::{Lens, over, set, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct ZipCode { code: String, location: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, zip: ZipCode }
//!
//! let zip_lens = lens!(Address, zip).compose(lens!(ZipCode, code));
//! let address = Address {
//!     street: "Alexander St".to_string(),
//!     zip: ZipCode { code: "08544".to_string(), location: "1234".to_string() },
//! };
//!
//! assert_eq!(view(&zip_lens, &address), "08544");
//!
//! let moved = set(&zip_lens, "90210".to_string(), address.clone());
//! assert_eq!(moved.zip.code, "90210");
//! assert_eq!(address.zip.code, "08544");
//!
//! let shouted = over(&lens!(Address, street), |street| street.to_uppercase(), address);
//! assert_eq!(shouted.street, "ALEXANDER ST");
//! ```

use std::marker::PhantomData;

/// A getter/setter pair focusing on an `A` inside an `S`.
pub trait Lens<S, A> {
    /// Borrows the focused value.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a copy of `source` with the focused value replaced.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused value with `function` applied to it.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`modify`](Lens::modify), but the function borrows the current value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let replacement = function(self.get(&source));
        self.set(source, replacement)
    }

    /// Focuses further into the focused value.
    ///
    /// `outer.compose(inner)` reads with `inner.get(outer.get(s))` and writes
    /// with `outer.set(s, inner.set(outer.get(s), a))`.
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens built from a getter and a setter closure.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from a getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses chained outer-to-inner. Created by [`Lens::compose`].
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `outer` and `inner`.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let focus = self.outer.get(&source).clone();
        let updated = self.inner.set(focus, value);
        self.outer.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Builds a lens from a getter and a setter.
///
/// ```rust
/// use functional_core::optics::{lens, view};
///
/// #[derive(Clone)]
/// struct Person { last: String }
///
/// let last = lens(|p: &Person| &p.last, |p: Person, last| Person { last, ..p });
/// assert_eq!(view(&last, &Person { last: "Church".into() }), "Church");
/// ```
pub const fn lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Reads the focused value.
pub fn view<'a, S, A, L>(lens: &L, source: &'a S) -> &'a A
where
    L: Lens<S, A>,
{
    lens.get(source)
}

/// Returns a copy of `source` with the focused value replaced by `value`.
pub fn set<S, A, L>(lens: &L, value: A, source: S) -> S
where
    L: Lens<S, A>,
{
    lens.set(source, value)
}

/// Returns a copy of `source` with `function` applied to the focused value.
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
    A: Clone,
{
    lens.modify(source, function)
}

/// Creates a [`FunctionLens`] for a named struct field.
///
/// ```rust
/// use functional_core::lens;
/// use functional_core::optics::Lens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Coordinate { lat: f64, long: f64 }
///
/// let lat = lens!(Coordinate, lat);
/// let moved = lat.set(Coordinate { lat: 40.0, long: -74.0 }, 41.0);
/// assert_eq!(moved, Coordinate { lat: 41.0, long: -74.0 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |source: $struct_type<$($generic),+>, value| $struct_type { $field: value, ..source },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
