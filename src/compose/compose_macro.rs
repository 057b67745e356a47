//! The `compose!` and `pipe!` macros.

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. The result is a closure that can be
/// called repeatedly.
///
/// # Examples
///
/// ```rust
/// use functional_core::compose;
///
/// let trim = |text: String| text.trim().to_string();
/// let strip_dashes = |text: String| text.replace('-', "");
/// let clean_input = compose!(strip_dashes, trim);
///
/// assert_eq!(clean_input(" 444-44-4444 ".to_string()), "444444444");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose2($outer, $crate::compose!($($rest),+))
    };
}

/// Threads a value through functions left to right.
///
/// `pipe!(x, f, g, h) == h(g(f(x)))`.
///
/// # Examples
///
/// ```rust
/// use functional_core::pipe;
///
/// let words = |text: &str| text.split(' ').count();
/// let double = |n: usize| n * 2;
/// assert_eq!(pipe!("Haskell Curry", words, double), 4);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $function:expr)* $(,)?) => {{
        let value = $value;
        $(let value = ($function)(value);)*
        value
    }};
}
