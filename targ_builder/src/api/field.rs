use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;
use crate::model::Nargs;
use crate::prelude::Collectable;

/// A parameter that takes a single value (precisely 1).
///
/// As an option it claims the flag plus the following token; as a positional it claims one token.
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> CliOption for Scalar<'a, T> {}
impl<'a, T> CliArgument for Scalar<'a, T> {}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar parameter.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        *self.variable = T::from_str(token).map_err(|_| InvalidConversion::of::<T>(token))?;
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::One
    }
}

/// An option parameter that takes no values (a boolean switch).
///
/// The variable is set to `true` each time the switch is matched.
pub struct Switch<'a> {
    variable: &'a mut bool,
}

impl<'a> CliOption for Switch<'a> {}

impl<'a> Switch<'a> {
    /// Create a switch parameter.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> GenericCapturable<'a, bool> for Switch<'a> {
    fn matched(&mut self) {
        *self.variable = true;
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidConversion> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn nargs(&self) -> Nargs {
        Nargs::Zero
    }
}

/// An option parameter that maps down to [`Option`], taking zero or one value.
///
/// Matching the flag resets the variable to `None`; a following value then fills it.
pub struct Optional<'a, T> {
    variable: &'a mut Option<T>,
}

impl<'a, T> CliOption for Optional<'a, T> {}

impl<'a, T> Optional<'a, T> {
    /// Create an optional parameter.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Optional<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self) {
        self.variable.take();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        let value = T::from_str(token).map_err(|_| InvalidConversion::of::<T>(token))?;
        self.variable.replace(value);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::ZeroOrOne
    }
}

/// A parameter that takes multiple values, appending each to a [`Collectable`].
///
/// As an option it claims every following token up to the next option-shaped one.
/// As a positional it claims one token each time it is reached.
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> CliOption for Collection<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> CliArgument for Collection<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection parameter.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable,
            _phantom: PhantomData,
        }
    }
}

impl<'a, C, T> GenericCapturable<'a, T> for Collection<'a, C, T>
where
    T: FromStr,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        let value = T::from_str(token).map_err(|_| InvalidConversion::of::<T>(token))?;
        self.variable.add(value);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Any
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec() {
        let mut collection: Vec<u32> = Vec::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, vec![1, 0]);
    }

    #[test]
    fn hash_set() {
        let mut collection: HashSet<u32> = HashSet::default();
        collection.add(1);
        collection.add(0);
        collection.add(1);
        assert_eq!(collection, HashSet::from([1, 0]));
    }

    #[test]
    fn scalar_capture() {
        let mut variable: u32 = u32::default();
        let mut scalar = Scalar::new(&mut variable);
        scalar.matched();
        scalar.capture("5").unwrap();
        assert_eq!(variable, 5);

        let mut variable: String = "a.out".to_string();
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture("out.bin").unwrap();
        assert_eq!(variable, "out.bin");
    }

    #[test]
    fn scalar_capture_invalid() {
        let mut variable: u32 = 7;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(
            scalar.capture("seven").unwrap_err(),
            InvalidConversion {
                token: "seven".to_string(),
                type_name: "u32",
            }
        );
        assert_eq!(variable, 7);
    }

    #[test]
    fn switch_matched() {
        let mut variable = false;
        let mut switch = Switch::new(&mut variable);
        switch.matched();
        switch.matched();
        assert!(variable);
    }

    #[test]
    #[should_panic]
    fn switch_capture() {
        let mut variable = false;
        let mut switch = Switch::new(&mut variable);
        let _ = switch.capture("true");
    }

    #[test]
    fn optional_capture() {
        let mut variable: Option<u32> = None;
        let mut optional = Optional::new(&mut variable);
        optional.matched();
        optional.capture("1").unwrap();
        assert_eq!(variable, Some(1));
    }

    #[test]
    fn optional_matched_resets() {
        let mut variable: Option<u32> = Some(3);
        let mut optional = Optional::new(&mut variable);
        optional.matched();
        assert_eq!(variable, None);
    }

    #[test]
    fn collection_capture() {
        let mut variable: Vec<u32> = Vec::default();
        let mut collection = Collection::new(&mut variable);
        collection.matched();
        collection.capture("1").unwrap();
        collection.capture("0").unwrap();
        assert_eq!(variable, vec![1, 0]);

        let mut variable: HashSet<u32> = HashSet::default();
        let mut collection = Collection::new(&mut variable);
        collection.capture("1").unwrap();
        collection.capture("0").unwrap();
        collection.capture("0").unwrap();
        assert_eq!(variable, HashSet::from([0, 1]));
    }

    #[test]
    fn collection_extends_initial() {
        let mut variable: Vec<String> = vec!["a".to_string()];
        let mut collection = Collection::new(&mut variable);
        collection.capture("b").unwrap();
        assert_eq!(variable, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_nargs() {
        let mut variable: u32 = u32::default();
        assert_eq!(Scalar::new(&mut variable).nargs(), Nargs::One);

        let mut variable = false;
        assert_eq!(Switch::new(&mut variable).nargs(), Nargs::Zero);

        let mut variable: Option<u32> = None;
        assert_eq!(Optional::new(&mut variable).nargs(), Nargs::ZeroOrOne);

        let mut variable: Vec<u32> = Vec::default();
        assert_eq!(Collection::new(&mut variable).nargs(), Nargs::Any);
    }
}
