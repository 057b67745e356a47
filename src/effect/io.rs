//! IO Monad - deferred, re-runnable side effects.
//!
//! An `IO<A>` describes a computation that produces an `A` and may perform
//! side effects. Building and transforming an `IO` never runs anything; only
//! [`IO::run`] does. An `IO` is a description, not a result: every call to
//! `run` executes the whole chain again, and nothing is cached between runs.
//!
//! # Examples
//!
//! ```rust
//! use functional_core::effect::IO;
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .chain(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use functional_core::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! });
//!
//! // Not executed yet
//! assert_eq!(runs.get(), 0);
//!
//! // Every run executes the effect again
//! assert_eq!(io.run(), 1);
//! assert_eq!(io.run(), 2);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

/// A monad representing deferred, repeatable side effects.
///
/// `IO<A>` shares its thunk between clones, so cloning is cheap and both
/// copies describe the same effect.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
///
/// # Monad Laws
///
/// Compared by running both sides:
///
/// 1. **Left Identity**: `IO::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(IO::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub struct IO<A> {
    thunk: Rc<dyn Fn() -> A>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure is not executed until [`run`](IO::run) is called, and it
    /// is executed again on every run.
    ///
    /// # Arguments
    ///
    /// * `action` - A closure that produces a value of type `A`.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            thunk: Rc::new(action),
        }
    }

    /// Alias for [`IO::new`].
    pub fn from_fn<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(action)
    }

    /// Wraps a pure value. Each run yields a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::effect::IO;
    ///
    /// let io = IO::of("pure".to_string());
    /// assert_eq!(io.run(), "pure");
    /// assert_eq!(io.run(), "pure");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Alias for [`IO::of`].
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(value)
    }

    /// Executes the described effects and returns the result.
    ///
    /// This is the only place effects happen. The IO is not consumed and can
    /// be run again.
    pub fn run(&self) -> A {
        tracing::trace!("running IO action");
        (self.thunk)()
    }

    /// Transforms the result of the action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::effect::IO;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }

    /// Alias for [`IO::map`].
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    /// Chains IO actions, passing the result of this one to a function that
    /// builds the next.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::effect::IO;
    ///
    /// let io = IO::of(10).chain(|x| IO::of(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn chain<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()).run())
    }

    /// Alias for [`IO::chain`].
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action still runs for its side effects.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        IO::new(move || {
            self.run();
            next.run()
        })
    }

    /// Runs both actions in order and combines their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::effect::IO;
    ///
    /// let io = IO::of(10).map2(IO::of(20), |a, b| a + b);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run();
            function(first, other.run())
        })
    }

    /// Runs both actions in order and pairs their results.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Converts a panic raised while running `io` into a recovery value.
    ///
    /// `handler` receives the panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::effect::IO;
    ///
    /// let panicking: IO<String> = IO::new(|| panic!("oops"));
    /// let recovered = IO::catch(panicking, |message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run(), "recovered from oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        IO::new(move || match catch_unwind(AssertUnwindSafe(|| io.run())) {
            Ok(value) => value,
            Err(panic_info) => {
                let message = if let Some(text) = panic_info.downcast_ref::<&str>() {
                    (*text).to_string()
                } else if let Some(text) = panic_info.downcast_ref::<String>() {
                    text.clone()
                } else {
                    "Unknown panic".to_string()
                };
                tracing::debug!(%message, "IO action panicked; recovering");
                handler(message)
            }
        })
    }
}

impl IO<()> {
    /// Creates an IO action that prints a line to standard output when run.
    ///
    /// ```rust,no_run
    /// use functional_core::effect::IO;
    ///
    /// let io = IO::print_line("Hello, World!");
    /// io.run();
    /// io.run(); // prints again
    /// ```
    pub fn print_line<S: std::fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || {
            println!("{message}");
        })
    }
}
