//! Reducer trait for pure state transitions

use crate::error::BoxError;

/// A pure function computing the next state from the current state and an
/// action.
///
/// `state` is `None` exactly once per store, when [`Store::new`] asks the
/// reducer for the starting state with the init action; every later call
/// passes `Some` of the committed state.
///
/// Reducers must not observe or mutate anything outside their arguments:
/// the store assumes `reduce` on the same inputs always yields the same
/// output.
///
/// [`Store::new`]: crate::Store::new
pub trait Reducer<S, A>: Send {
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, BoxError>;
}

/// Every infallible closure of the right shape is a reducer.
impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<&S>, &A) -> S + Send,
{
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, BoxError> {
        Ok(self(state, action))
    }
}

/// Adapter wrapping a fallible closure as a [`Reducer`].
///
/// Built with [`try_reducer_fn`].
pub struct TryReducerFn<F>(F);

/// Wrap a closure returning `Result` as a [`Reducer`].
///
/// A failure from the closure surfaces as
/// [`Error::Reducer`](crate::Error::Reducer) from the dispatch that hit it,
/// leaving the store's state untouched.
pub fn try_reducer_fn<F>(f: F) -> TryReducerFn<F> {
    TryReducerFn(f)
}

impl<S, A, F> Reducer<S, A> for TryReducerFn<F>
where
    F: Fn(Option<&S>, &A) -> Result<S, BoxError> + Send,
{
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, BoxError> {
        (self.0)(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_reducer() {
        let double = |state: Option<&i64>, step: &i64| state.copied().unwrap_or(0) + step * 2;

        assert_eq!(double.reduce(None, &3).unwrap(), 6);
        assert_eq!(double.reduce(Some(&10), &3).unwrap(), 16);
    }

    #[test]
    fn test_try_reducer_fn_propagates_failure() {
        let checked = try_reducer_fn(|state: Option<&u8>, step: &u8| {
            state
                .copied()
                .unwrap_or(0)
                .checked_add(*step)
                .ok_or_else(|| BoxError::from("overflow"))
        });

        assert_eq!(checked.reduce(Some(&1), &2).unwrap(), 3);
        assert!(checked.reduce(Some(&255), &1).is_err());
    }
}
