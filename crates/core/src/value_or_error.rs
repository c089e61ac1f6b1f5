//! [`ValueOrError`]: an outcome that is empty, an error, or a value, and that
//! refuses to let an error be dropped unseen.
//!
//! # Acknowledgement
//!
//! Every container tracks whether its outcome was looked at. Calling
//! [`ValueOrError::is_ok`], [`ValueOrError::error`], comparing against a
//! domain enumerator, or rendering an error with `Display` acknowledges it.
//! The flag lives in a `Cell` so that these read-only calls can record the
//! fact; it is part of the type's contract and is not exposed.
//!
//! When a container holding an unacknowledged error is dropped, the
//! unobserved-error policy fires: the hook attached with
//! [`ValueOrError::with_unobserved_hook`] if there is one, otherwise the
//! process aborts. [`ValueOrError::has_value`] is a pure query and does not
//! acknowledge anything.
//!
//! # Moves
//!
//! Moving a container by value is an ordinary Rust move: the source is gone
//! and cannot be dropped twice. [`ValueOrError::take`] moves the outcome out
//! of a place that must stay valid; the place is left empty and acknowledged.

use std::cell::Cell;
use std::fmt;
use std::mem;
use std::sync::Arc;

use tracing::{error, warn};

use crate::code::ErrorCode;
use crate::domain::{ContainerError, ErrorDomain};
use crate::error::LogicFault;
use crate::render::{EMPTY_MARKER, Render, VALUE_PLACEHOLDER};

/// Callback run when a container is dropped with an unacknowledged error.
pub type UnobservedHook = Arc<dyn Fn(&ErrorCode) + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) enum State<T> {
    Empty,
    Error(ErrorCode),
    Value(T),
}

/// The outcome of a fallible operation.
#[must_use = "a ValueOrError holding an error aborts the process if dropped without being checked"]
pub struct ValueOrError<T> {
    state: State<T>,
    acknowledged: Cell<bool>,
    on_unobserved: Option<UnobservedHook>,
}

impl<T> ValueOrError<T> {
    /// A container with no outcome yet.
    pub const fn empty() -> Self {
        Self {
            state: State::Empty,
            acknowledged: Cell::new(false),
            on_unobserved: None,
        }
    }

    pub fn from_value(value: impl Into<T>) -> Self {
        Self::from_state(State::Value(value.into()))
    }

    pub fn from_error(error: impl Into<ErrorCode>) -> Self {
        Self::from_state(State::Error(error.into()))
    }

    const fn from_state(state: State<T>) -> Self {
        Self {
            state,
            acknowledged: Cell::new(false),
            on_unobserved: None,
        }
    }

    pub(crate) fn from_parts(
        state: State<T>,
        acknowledged: bool,
        on_unobserved: Option<UnobservedHook>,
    ) -> Self {
        Self {
            state,
            acknowledged: Cell::new(acknowledged),
            on_unobserved,
        }
    }

    /// Dismantle the container. What is left behind is empty and
    /// acknowledged, so its drop is a no-op.
    pub(crate) fn into_parts(mut self) -> (State<T>, bool, Option<UnobservedHook>) {
        let state = mem::replace(&mut self.state, State::Empty);
        let acknowledged = self.acknowledged.replace(true);
        (state, acknowledged, self.on_unobserved.take())
    }

    /// Replace the default abort with `hook` for this instance.
    ///
    /// The hook runs at most once, from `Drop`, and only if the container
    /// still holds an unacknowledged error at that point.
    pub fn with_unobserved_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ErrorCode) + Send + Sync + 'static,
    {
        self.on_unobserved = Some(Arc::new(hook));
        self
    }

    /// Store a value, discarding whatever was there.
    ///
    /// The acknowledgement flag is left as it is.
    pub fn emplace(&mut self, value: impl Into<T>) {
        if let State::Error(code) = &self.state {
            if !self.acknowledged.get() {
                warn!(
                    category = code.category().name(),
                    code = code.value(),
                    error = %code,
                    "emplace discards an unacknowledged error"
                );
            }
        }
        self.state = State::Value(value.into());
    }

    /// `true` unless an error is stored. Acknowledges the outcome.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.acknowledged.set(true);
        !matches!(self.state, State::Error(_))
    }

    /// `true` if an error is stored. Acknowledges the outcome.
    #[must_use]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The stored error, or [`ErrorCode::none`]. Acknowledges the outcome.
    #[must_use]
    pub fn error(&self) -> ErrorCode {
        self.acknowledged.set(true);
        match &self.state {
            State::Error(code) => *code,
            State::Empty | State::Value(_) => ErrorCode::none(),
        }
    }

    /// `true` if a value is stored. Does not acknowledge.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// `true` if neither a value nor an error is stored. Does not acknowledge.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Borrow the value.
    ///
    /// # Errors
    ///
    /// [`LogicFault::ErrorStored`] if an error is stored (the error counts as
    /// acknowledged, since the fault carries it), or
    /// [`LogicFault::ValueNotStored`] if the container is empty.
    pub fn value(&self) -> Result<&T, LogicFault> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Error(_) | State::Empty => Err(self.fault()),
        }
    }

    /// Mutably borrow the value.
    ///
    /// # Errors
    ///
    /// Same as [`ValueOrError::value`].
    pub fn value_mut(&mut self) -> Result<&mut T, LogicFault> {
        if !self.has_value() {
            return Err(self.fault());
        }
        match &mut self.state {
            State::Value(value) => Ok(value),
            State::Error(_) | State::Empty => Err(LogicFault::ValueNotStored),
        }
    }

    /// Move the value out, leaving the container empty.
    ///
    /// # Errors
    ///
    /// Same as [`ValueOrError::value`]; a second extraction reports
    /// [`LogicFault::ValueNotStored`].
    pub fn extract(&mut self) -> Result<T, LogicFault> {
        if !self.has_value() {
            return Err(self.fault());
        }
        match mem::replace(&mut self.state, State::Empty) {
            State::Value(value) => Ok(value),
            State::Error(_) | State::Empty => Err(LogicFault::ValueNotStored),
        }
    }

    /// The misuse fault for a container without a value. A stored error
    /// counts as acknowledged, since the fault carries it.
    fn fault(&self) -> LogicFault {
        match &self.state {
            State::Error(code) => {
                self.acknowledged.set(true);
                LogicFault::ErrorStored { error: *code }
            }
            State::Value(_) | State::Empty => LogicFault::ValueNotStored,
        }
    }

    /// Mark the outcome as handled without inspecting it.
    pub fn ignore(&self) -> &Self {
        self.acknowledged.set(true);
        self
    }

    /// Re-arm the obligation to handle the outcome.
    pub fn unignore(&self) -> &Self {
        self.acknowledged.set(false);
        self
    }

    /// Move the outcome, its acknowledgement and its hook into a new
    /// container, leaving `self` empty and acknowledged.
    pub fn take(&mut self) -> Self {
        let state = mem::replace(&mut self.state, State::Empty);
        let acknowledged = self.acknowledged.replace(true);
        Self::from_parts(state, acknowledged, self.on_unobserved.take())
    }

    /// Convert the value with `From`, keeping error or empty state as is.
    pub fn convert<U>(self) -> ValueOrError<U>
    where
        U: From<T>,
    {
        self.map(U::from)
    }

    /// Convert the value with an explicit function, keeping error or empty
    /// state, acknowledgement, and hook as they are.
    pub fn map<U, F>(self, f: F) -> ValueOrError<U>
    where
        F: FnOnce(T) -> U,
    {
        let (state, acknowledged, on_unobserved) = self.into_parts();
        let state = match state {
            State::Value(value) => State::Value(f(value)),
            State::Error(code) => State::Error(code),
            State::Empty => State::Empty,
        };
        ValueOrError::from_parts(state, acknowledged, on_unobserved)
    }

    /// Hand the outcome over to a standard `Result`.
    ///
    /// An empty container becomes [`ContainerError::EmptyResult`]. The
    /// container counts as acknowledged; the returned `Result` is
    /// `#[must_use]` and carries the obligation from here on.
    ///
    /// # Errors
    ///
    /// The stored error, or `EmptyResult` for an empty container.
    pub fn into_result(self) -> Result<T, ErrorCode> {
        match self.into_parts().0 {
            State::Value(value) => Ok(value),
            State::Error(code) => Err(code),
            State::Empty => Err(ContainerError::EmptyResult.make_error_code()),
        }
    }

    /// The value, or `None` after logging the stored error.
    #[must_use]
    pub fn into_option_logged(self) -> Option<T> {
        match self.into_parts().0 {
            State::Value(value) => Some(value),
            State::Error(code) => {
                error!(
                    category = code.category().name(),
                    code = code.value(),
                    "Operation failed: {code}"
                );
                None
            }
            State::Empty => None,
        }
    }
}

impl<T> Default for ValueOrError<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for ValueOrError<T> {
    fn drop(&mut self) {
        let State::Error(code) = &self.state else {
            return;
        };
        if self.acknowledged.get() {
            return;
        }
        match self.on_unobserved.take() {
            Some(hook) => {
                warn!(
                    category = code.category().name(),
                    code = code.value(),
                    error = %code,
                    "unobserved error handed to hook"
                );
                hook(code);
            }
            None => {
                error!(
                    category = code.category().name(),
                    code = code.value(),
                    error = %code,
                    "unobserved error dropped, aborting"
                );
                std::process::abort();
            }
        }
    }
}

/// A clone owes its own acknowledgement: it starts unacknowledged whatever
/// the state of the source, and shares the source's hook.
impl<T: Clone> Clone for ValueOrError<T> {
    fn clone(&self) -> Self {
        Self::from_parts(self.state.clone(), false, self.on_unobserved.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueOrError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueOrError")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: Render> fmt::Display for ValueOrError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Error(code) => {
                self.acknowledged.set(true);
                f.write_str(&code.message())
            }
            State::Empty => f.write_str(EMPTY_MARKER),
            State::Value(value) if T::RENDERABLE => value.render(f),
            State::Value(_) => f.write_str(VALUE_PLACEHOLDER),
        }
    }
}

impl<T: Render> Render for ValueOrError<T> {
    const RENDERABLE: bool = true;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// `outcome == DbError::NoOpenDb` compares the stored error with the
/// enumerator's canonical code, acknowledging the outcome.
impl<T, D: ErrorDomain> PartialEq<D> for ValueOrError<T> {
    fn eq(&self, other: &D) -> bool {
        self.error() == other.make_error_code()
    }
}

impl<T> From<ErrorCode> for ValueOrError<T> {
    fn from(error: ErrorCode) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<std::io::Error> for ValueOrError<T> {
    fn from(error: std::io::Error) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::Errno;

    const DEFAULT_VALUE: i32 = 10;

    /// Counts its own drops so tests can see ownership moving.
    #[derive(Debug)]
    struct Tracked {
        data: i32,
        drops: Rc<RefCell<usize>>,
    }

    impl Tracked {
        fn new(data: i32, drops: &Rc<RefCell<usize>>) -> Self {
            Self {
                data,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            *self.drops.borrow_mut() += 1;
        }
    }

    fn counting_hook() -> (Arc<AtomicUsize>, impl Fn(&ErrorCode) + Send + Sync + 'static) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        (fired, move |_: &ErrorCode| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn get_int_data(value: i32, make_error: bool) -> ValueOrError<i32> {
        if make_error {
            return Errno::NoSuchFileOrDirectory.into();
        }
        ValueOrError::from_value(value)
    }

    #[test]
    fn test_create_with_error() {
        let result = ValueOrError::<Tracked>::from_error(Errno::NoSuchFileOrDirectory);
        assert!(!result.is_ok());
        assert!(!result.has_value());
        assert!(result.error() == Errno::NoSuchFileOrDirectory);
    }

    #[test]
    fn test_compare_with_enumerator() {
        let result = ValueOrError::<i32>::from_error(Errno::NoSuchFileOrDirectory);
        assert!(result != Errno::InvalidArgument);
        assert!(result == Errno::NoSuchFileOrDirectory);
    }

    #[test]
    fn test_create_with_value() {
        let drops = Rc::new(RefCell::new(0));
        {
            let result = ValueOrError::<Tracked>::from_value(Tracked::new(DEFAULT_VALUE, &drops));
            assert!(result.is_ok());
            assert!(!result.error().is_error());
            assert!(result.has_value());
            assert_eq!(result.value().unwrap().data, DEFAULT_VALUE);
        }
        assert_eq!(*drops.borrow(), 1);
    }

    #[test]
    fn test_emplace_into_empty() {
        let mut result = ValueOrError::<String>::empty();
        assert!(result.is_ok());
        assert!(!result.error().is_error());
        assert!(!result.has_value());
        assert!(result.is_empty());

        result.emplace("DATA");
        assert!(result.has_value());
        assert_eq!(result.value().unwrap(), "DATA");
    }

    #[test]
    fn test_emplace_replaces_error_and_keeps_flag() {
        let (fired, hook) = counting_hook();
        {
            let mut result = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            result.emplace(3);
            assert!(result.has_value());
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_implicit_create() {
        let value1 = get_int_data(DEFAULT_VALUE, false);
        assert!(value1.is_ok());
        assert!(value1.has_value());
        assert!(!value1.error().is_error());
        assert_eq!(*value1.value().unwrap(), DEFAULT_VALUE);

        let value2 = get_int_data(DEFAULT_VALUE, true);
        assert!(!value2.is_ok());
        assert!(!value2.has_value());
        assert!(value2.error().is_error());
    }

    #[test]
    fn test_assign_over_empty() {
        let mut result = ValueOrError::<String>::default();
        assert!(result.is_empty());
        result = ValueOrError::from_value("DATA");
        assert!(result.has_value());
        assert_eq!(result.value().unwrap(), "DATA");
    }

    #[test]
    fn test_boxed_values() {
        let drops = Rc::new(RefCell::new(0));
        {
            let foos: Vec<Box<Tracked>> = (0..10)
                .map(|_| Box::new(Tracked::new(DEFAULT_VALUE, &drops)))
                .collect();
            let result = ValueOrError::<Vec<Box<Tracked>>>::from_value(foos);
            assert!(result.is_ok());
            assert!(result.value().unwrap().iter().all(|f| f.data == DEFAULT_VALUE));
        }
        assert_eq!(*drops.borrow(), 10);
    }

    #[test]
    fn test_extract_moves_ownership_out() {
        let drops = Rc::new(RefCell::new(0));
        {
            let tracked = Box::new(Tracked::new(DEFAULT_VALUE, &drops));
            let mut result = ValueOrError::<Box<Tracked>>::from_value(tracked);
            assert!(result.is_ok());
            let another = result.extract().unwrap();
            assert!(!result.has_value());
            assert!(result.is_empty());
            assert_eq!(another.data, DEFAULT_VALUE);
            assert_eq!(*drops.borrow(), 0);
        }
        assert_eq!(*drops.borrow(), 1);
    }

    #[test]
    fn test_extract_shared_value() {
        let drops = Rc::new(RefCell::new(0));
        {
            let shared = Rc::new(Tracked::new(DEFAULT_VALUE, &drops));
            let mut result = ValueOrError::<Rc<Tracked>>::from_value(shared);
            let another = result.extract().unwrap();
            assert!(!result.has_value());
            assert_eq!(another.data, DEFAULT_VALUE);
        }
        assert_eq!(*drops.borrow(), 1);
    }

    #[test]
    fn test_double_extract_is_a_logic_fault() {
        let mut result = ValueOrError::<i32>::from_value(DEFAULT_VALUE);
        assert_eq!(result.extract(), Ok(DEFAULT_VALUE));
        assert_eq!(result.extract(), Err(LogicFault::ValueNotStored));
    }

    #[test]
    fn test_value_of_error_is_a_logic_fault_and_acknowledges() {
        let (fired, hook) = counting_hook();
        {
            let mut result = ValueOrError::<i32>::from_error(Errno::NoSuchFileOrDirectory)
                .with_unobserved_hook(hook);
            let fault = result.value().unwrap_err();
            assert!(matches!(fault, LogicFault::ErrorStored { .. }));
            assert!(fault.stored_error().unwrap() == Errno::NoSuchFileOrDirectory);
            assert!(matches!(result.extract(), Err(LogicFault::ErrorStored { .. })));
            // the error is still stored after a failed extraction
            assert!(result.is_err());
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_each_accessor_alone_acknowledges_error() {
        let (fired, hook) = counting_hook();
        let hook = Arc::new(hook);
        let armed = || {
            let hook = Arc::clone(&hook);
            ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(move |e| hook(e))
        };
        {
            let by_ref = armed();
            let mut by_mut = armed();
            let mut by_move = armed();
            let faults = [
                by_ref.value().map(|_| ()),
                by_mut.value_mut().map(|_| ()),
                by_move.extract().map(|_| ()),
            ];
            for fault in faults {
                let stored = fault.unwrap_err().stored_error();
                assert_eq!(stored, Some(Errno::Io.make_error_code()));
            }
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_value_of_empty_is_a_logic_fault() {
        let mut result = ValueOrError::<i32>::empty();
        assert_eq!(result.value(), Err(LogicFault::ValueNotStored));
        assert_eq!(result.value_mut(), Err(LogicFault::ValueNotStored));
        assert_eq!(result.extract(), Err(LogicFault::ValueNotStored));
    }

    #[test]
    fn test_value_mut_edits_in_place() {
        let mut result = ValueOrError::<i32>::from_value(1);
        *result.value_mut().unwrap() += 41;
        assert_eq!(result.value(), Ok(&42));
    }

    #[test]
    fn test_bool_outcome() {
        let value = ValueOrError::<bool>::from_error(ErrorCode::none());
        assert!(!value.has_value());
        assert!(!value.is_ok());
        assert!(!value.error().is_error());

        let value2 = ValueOrError::<bool>::from_value(true);
        assert!(value2.has_value());
        assert!(value2.is_ok());
        assert_eq!(value2.value(), Ok(&true));
    }

    #[test]
    fn test_move_with_value() {
        let value = ValueOrError::<Box<i32>>::from_value(Box::new(DEFAULT_VALUE));
        let moved = value;
        assert!(moved.has_value());
        assert!(moved.is_ok());
        assert_eq!(**moved.value().unwrap(), DEFAULT_VALUE);
    }

    #[test]
    fn test_take_transfers_state_once() {
        let (fired, hook) = counting_hook();
        {
            let mut source = ValueOrError::<i32>::from_error(Errno::NoSuchFileOrDirectory)
                .with_unobserved_hook(hook);
            let moved = source.take();
            assert!(!source.has_value());
            assert!(source.is_empty());
            drop(source);
            assert_eq!(fired.load(Ordering::SeqCst), 0);
            // the destination inherited the unacknowledged error and the hook
            drop(moved);
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_take_keeps_acknowledgement() {
        let mut source = ValueOrError::<i32>::from_error(Errno::Io);
        assert!(source.is_err());
        let moved = source.take();
        assert!(!moved.has_value());
    }

    #[test]
    fn test_unobserved_hook_fires_exactly_once() {
        let (fired, hook) = counting_hook();
        {
            let _result =
                ValueOrError::<i32>::from_error(Errno::TimedOut).with_unobserved_hook(hook);
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_acknowledged_error_does_not_fire() {
        let (fired, hook) = counting_hook();
        {
            let result = ValueOrError::<i32>::from_error(Errno::NoSuchFileOrDirectory)
                .with_unobserved_hook(hook);
            if !result.is_ok() {
                assert!(result.error() == Errno::NoSuchFileOrDirectory);
            }
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_ignore_and_unignore() {
        let (fired, hook) = counting_hook();
        {
            let result = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            assert!(result.is_err());
            result.unignore();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        let (fired, hook) = counting_hook();
        {
            let result = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            result.ignore();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_has_value_does_not_acknowledge() {
        let (fired, hook) = counting_hook();
        {
            let result = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            assert!(!result.has_value());
            assert!(!result.is_empty());
            let _ = format!("{result:?}");
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_owes_its_own_acknowledgement() {
        let (fired, hook) = counting_hook();
        {
            let original = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            assert!(original.is_err());
            let copy = original.clone();
            assert!(copy == Errno::Io);
            let _unchecked = original.clone();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_convert_and_map() {
        let small = ValueOrError::<u8>::from_value(7_u8);
        let wide: ValueOrError<u64> = small.convert();
        assert_eq!(wide.value(), Ok(&7_u64));

        let text = ValueOrError::<i32>::from_value(5).map(|n| format!("#{n}"));
        assert_eq!(text.value().map(String::as_str), Ok("#5"));

        let failed: ValueOrError<u64> = ValueOrError::<u8>::from_error(Errno::Io).convert();
        assert!(failed == Errno::Io);

        let empty: ValueOrError<u64> = ValueOrError::<u8>::empty().convert();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValueOrError::<i32>::from_value(3).into_result(), Ok(3));
        let err = ValueOrError::<i32>::from_error(Errno::Io).into_result().unwrap_err();
        assert!(err == Errno::Io);
        let empty = ValueOrError::<i32>::empty().into_result().unwrap_err();
        assert!(empty == ContainerError::EmptyResult);
    }

    #[test]
    fn test_into_option_logged() {
        assert_eq!(ValueOrError::<i32>::from_value(3).into_option_logged(), Some(3));
        assert_eq!(ValueOrError::<i32>::from_error(Errno::Io).into_option_logged(), None);
        assert_eq!(ValueOrError::<i32>::empty().into_option_logged(), None);
    }

    #[test]
    fn test_io_error_construction() {
        let err = std::io::Error::new(std::io::ErrorKind::ResourceBusy, "busy");
        let result: ValueOrError<()> = err.into();
        assert!(result == Errno::DeviceOrResourceBusy);
    }

    #[test]
    fn test_to_string() {
        let mut value1 = ValueOrError::<String>::empty();
        assert_eq!(value1.to_string(), EMPTY_MARKER);

        value1 = ValueOrError::from_value("DATA");
        assert_eq!(value1.to_string(), "DATA");

        struct Opaque;
        impl Render for Opaque {}
        let value2 = ValueOrError::<Opaque>::from_value(Opaque);
        assert_eq!(value2.to_string(), VALUE_PLACEHOLDER);

        let value3 = ValueOrError::<Opaque>::from_error(Errno::NoSuchFileOrDirectory);
        assert_eq!(value3.ignore().to_string(), "No such file or directory");
    }

    #[test]
    fn test_rendering_an_error_acknowledges_it() {
        let (fired, hook) = counting_hook();
        {
            let result = ValueOrError::<i32>::from_error(Errno::Io).with_unobserved_hook(hook);
            assert_eq!(result.to_string(), "Input/output error");
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
