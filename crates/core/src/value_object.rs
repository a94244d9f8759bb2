//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are the same value. `Money` is the canonical example in this workspace;
/// a `LineItem` is not (it is keyed by name, see [`crate::Entity`]).
///
/// ```ignore
/// let a = Money::new(Decimal::new(150, 2))?;
/// let b: Money = "1.5".parse()?;
/// assert_eq!(a, b);  // equal by value, scale does not matter
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
