//! Predicate combinators.

/// A boolean-valued function over borrowed values.
///
/// This is a trait alias: every `Fn(&T) -> bool` is a `Predicate<T>`.
pub trait Predicate<T: ?Sized>: Fn(&T) -> bool {}

impl<T: ?Sized, F> Predicate<T> for F where F: Fn(&T) -> bool {}

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use perhaps::predicate::not;
///
/// let is_empty = |text: &str| text.is_empty();
/// let has_text = not(is_empty);
/// assert!(has_text("hello"));
/// assert!(!has_text(""));
/// ```
#[inline]
pub fn not<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

/// Passes when both predicates pass. `second` is not called when `first` fails.
#[inline]
pub fn and<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| first(value) && second(value)
}

/// Passes when either predicate passes. `second` is not called when `first` passes.
#[inline]
pub fn or<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| first(value) || second(value)
}

/// Passes when every predicate passes. An empty set always passes.
///
/// # Examples
///
/// ```rust
/// use perhaps::predicate::all;
///
/// let checks: Vec<Box<dyn Fn(&i32) -> bool>> = vec![
///     Box::new(|value| *value > 0),
///     Box::new(|value| *value < 10),
/// ];
/// let in_range = all(checks);
/// assert!(in_range(&5));
/// assert!(!in_range(&12));
/// ```
pub fn all<T: ?Sized, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value: &T| predicates.iter().all(|predicate| predicate(value))
}

/// Passes when at least one predicate passes. An empty set never passes.
pub fn any<T: ?Sized, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value: &T| predicates.iter().any(|predicate| predicate(value))
}
