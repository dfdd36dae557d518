use crate::Reflect;

/// A enumeration of all error outcomes that might happen when running [`Reflect::assign`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignError {
    #[error("attempted to assign `{from_type}` to `{to_type}`")]
    /// Attempted to assign the wrong type to a value.
    MismatchedTypes {
        from_type: &'static str,
        to_type: &'static str,
    },
}

/// Moves `value` into `target` if it holds a `T`.
///
/// The shared body of every [`Reflect::assign`] implementation.
pub fn assign_boxed<T: Reflect>(target: &mut T, value: Box<dyn Reflect>) -> Result<(), AssignError> {
    let from_type = value.reflect_type_name();
    match value.into_any().downcast::<T>() {
        Ok(value) => {
            *target = *value;
            Ok(())
        }
        Err(_) => Err(AssignError::MismatchedTypes {
            from_type,
            to_type: core::any::type_name::<T>(),
        }),
    }
}

// -----------------------------------------------------------------------------
// Tests
