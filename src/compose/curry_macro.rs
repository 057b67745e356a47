//! The `curry2!` to `curry4!` macros.
//!
//! Each macro turns an `n`-ary function into a chain of single-argument
//! closures. The function is shared through `Rc`, and arguments captured by
//! an intermediate closure are cloned on each call, so every partial
//! application can be reused. Captured arguments must implement `Clone`.

/// Curries a two-argument function.
///
/// # Examples
///
/// ```rust
/// use functional_core::curry2;
///
/// let join = |separator: &str, name: String| format!("{separator}{name}");
/// let greet = curry2!(join)("Hi, ");
/// assert_eq!(greet("Alonzo".to_string()), "Hi, Alonzo");
/// assert_eq!(greet("Haskell".to_string()), "Hi, Haskell");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// # Examples
///
/// ```rust
/// use functional_core::curry3;
///
/// let volume = |x: u32, y: u32, z: u32| x * y * z;
/// assert_eq!(curry3!(volume)(2)(3)(4), 24);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
