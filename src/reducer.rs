use std::rc::Rc;

/// Using the [reduce()](Reducer::reduce()) method, implementors of
/// this trait take an `Action` submitted to a store via
/// [Store::dispatch()](crate::Store::dispatch()) and produce the next
/// `State` for the store from the previous one.
///
/// A reducer must be pure: the result depends only on the previous
/// state and the action, and producing it has no observable side
/// effect. It must also be total: an `Action` which the reducer does
/// not handle returns the previous state unchanged (the same [Rc]).
///
/// Any closure `Fn(&Rc<State>, &Action) -> Rc<State>` is a reducer,
/// provided `State` implements [Default], which is then used as the
/// reducer's [default_state()](Reducer::default_state()).
pub trait Reducer<State, Action> {
    /// The state a [Store](crate::Store) starts with when it is
    /// created with [Store::new()](crate::Store::new()).
    fn default_state(&self) -> State;

    /// Take an `Action` submitted to a store via
    /// [Store::dispatch()](crate::Store::dispatch()) and produce a new
    /// `State` from `prev_state`.
    ///
    /// `prev_state` is never modified. Return a freshly built state
    /// for a change, or `prev_state.clone()` when the action does not
    /// apply.
    fn reduce(&self, prev_state: &Rc<State>, action: &Action) -> Rc<State>;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&Rc<State>, &Action) -> Rc<State>,
    State: Default,
{
    fn default_state(&self) -> State {
        State::default()
    }

    fn reduce(&self, prev_state: &Rc<State>, action: &Action) -> Rc<State> {
        (self)(prev_state, action)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reducer;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    struct TestState {
        counter: i32,
    }

    enum TestAction {
        Increment,
        Decrement,
        Reset,
        Unknown,
    }

    struct TestReducer {
        start: i32,
    }

    impl Reducer<TestState, TestAction> for TestReducer {
        fn default_state(&self) -> TestState {
            TestState {
                counter: self.start,
            }
        }

        fn reduce(&self, prev_state: &Rc<TestState>, action: &TestAction) -> Rc<TestState> {
            match action {
                TestAction::Increment => Rc::new(TestState {
                    counter: prev_state.counter + 1,
                }),
                TestAction::Decrement => Rc::new(TestState {
                    counter: prev_state.counter - 1,
                }),
                TestAction::Reset => Rc::new(self.default_state()),
                TestAction::Unknown => prev_state.clone(),
            }
        }
    }

    #[test]
    fn reduce_is_deterministic() {
        let reducer = TestReducer { start: 3 };
        let state = Rc::new(reducer.default_state());

        for action in &[TestAction::Increment, TestAction::Decrement, TestAction::Reset] {
            let first = reducer.reduce(&state, action);
            let second = reducer.reduce(&state, action);
            assert_eq!(first, second);
        }
        assert_eq!(TestState { counter: 3 }, *state);
    }

    #[test]
    fn unknown_action_returns_same_state() {
        let reducer = TestReducer { start: 0 };
        let state = Rc::new(TestState { counter: 7 });

        let next = reducer.reduce(&state, &TestAction::Unknown);
        assert!(Rc::ptr_eq(&state, &next));
    }

    fn push_reducer() -> impl Reducer<Vec<i32>, i32> {
        |state: &Rc<Vec<i32>>, value: &i32| -> Rc<Vec<i32>> {
            if *value < 0 {
                return state.clone();
            }
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend(state.iter().copied());
            next.push(*value);
            Rc::new(next)
        }
    }

    #[test]
    fn closure_reducer_defaults_state() {
        let reducer = push_reducer();

        let state = Rc::new(reducer.default_state());
        assert!(state.is_empty());

        let state = reducer.reduce(&state, &4);
        let unchanged = reducer.reduce(&state, &-1);
        assert!(Rc::ptr_eq(&state, &unchanged));

        let next = reducer.reduce(&state, &5);
        assert_eq!(vec![4], *state);
        assert_eq!(vec![4, 5], *next);
    }
}
