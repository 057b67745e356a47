//! The `partial!` macro for two- and three-argument functions.
//!
//! Arguments written as `__` stay open and become parameters of the returned
//! closure; every other argument is fixed. Fixed arguments are cloned on each
//! call, so the result can be called repeatedly.

/// Fixes some arguments of a function, leaving `__` positions open.
///
/// Do not import `__`; the macro matches it as a literal token.
///
/// # Examples
///
/// ```rust
/// use functional_core::partial;
///
/// let format_address = |street: &str, city: &str, zip: &str| format!("{street}, {city} {zip}");
///
/// let in_princeton = partial!(format_address, __, "Princeton", __);
/// assert_eq!(in_princeton("Nassau St", "08544"), "Nassau St, Princeton 08544");
///
/// let divide = |a: f64, b: f64| a / b;
/// let halve = partial!(divide, __, 2.0);
/// assert_eq!(halve(9.0), 4.5);
/// ```
#[macro_export]
macro_rules! partial {
    // three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let (function, third) = ($function, $third);
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let (function, second) = ($function, $second);
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let (function, first) = ($function, $first);
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let (function, second, third) = ($function, $second, $third);
        move |first| {
            function(
                first,
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let (function, first, third) = ($function, $first, $third);
        move |second| {
            function(
                ::std::clone::Clone::clone(&first),
                second,
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let (function, first, second) = ($function, $first, $second);
        move |third| {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                third,
            )
        }
    }};

    // two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let (function, second) = ($function, $second);
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let (function, first) = ($function, $first);
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn fixes_first_of_two() {
        let subtract = |a: i32, b: i32| a - b;
        let from_ten = partial!(subtract, 10, __);
        assert_eq!(from_ten(3), 7);
        assert_eq!(from_ten(4), 6);
    }

    #[rstest]
    fn fixes_second_of_two() {
        let subtract = |a: i32, b: i32| a - b;
        let minus_ten = partial!(subtract, __, 10);
        assert_eq!(minus_ten(3), -7);
    }

    #[rstest]
    fn fixes_middle_of_three() {
        let join = |a: String, separator: String, b: String| format!("{a}{separator}{b}");
        let with_comma = partial!(join, __, ",".to_string(), __);
        assert_eq!(with_comma("a".to_string(), "b".to_string()), "a,b");
    }

    #[rstest]
    fn fixes_two_of_three() {
        let clamp = |low: i32, high: i32, value: i32| value.clamp(low, high);
        let percentage = partial!(clamp, 0, 100, __);
        assert_eq!(percentage(150), 100);
        assert_eq!(percentage(-5), 0);
    }
}
