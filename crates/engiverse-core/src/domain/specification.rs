//! Specification pattern for composable filter rules
//!
//! A specification is a predicate object. Discovery filters are built from
//! small specifications combined with AND / OR.

use std::sync::Arc;

/// Core specification trait for filter rules
pub trait Specification<T>: Send + Sync {
    /// Check if the entity satisfies this specification
    fn is_satisfied_by(&self, entity: &T) -> bool;

    /// Combine with another specification using AND
    fn and<S: Specification<T> + 'static>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
    {
        AndSpecification::new(Arc::new(self), Arc::new(other))
    }

    /// Combine with another specification using OR
    fn or<S: Specification<T> + 'static>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
    {
        OrSpecification {
            left: Arc::new(self),
            right: Arc::new(other),
        }
    }
}

/// AND composite specification
pub struct AndSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    /// Combine two already type-erased specifications
    pub fn new(left: Arc<dyn Specification<T>>, right: Arc<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for AndSpecification<T>
where
    T: Send + Sync,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.left.is_satisfied_by(entity) && self.right.is_satisfied_by(entity)
    }
}

/// OR composite specification
pub struct OrSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> Specification<T> for OrSpecification<T>
where
    T: Send + Sync,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.left.is_satisfied_by(entity) || self.right.is_satisfied_by(entity)
    }
}

/// Always true specification (identity for AND)
pub struct TrueSpec<T>(std::marker::PhantomData<T>);

impl<T> TrueSpec<T> {
    pub fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T> Default for TrueSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Specification<T> for TrueSpec<T> {
    fn is_satisfied_by(&self, _entity: &T) -> bool {
        true
    }
}
