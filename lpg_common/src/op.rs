//! Operator-impl boilerplate for transparent single-field newtypes.

/// Implements the standard arithmetic traits for a newtype wrapping an integer.
///
/// * `binary` - `Add`, `Sub` and friends (`Self op Self -> Self`)
/// * `inplace` - `SubAssign` and friends (`Self op= Self`)
/// * `unary` - `Neg` and friends (`op Self -> Self`)
#[macro_export]
macro_rules! op {
    (binary $type:ty, $trait:ident, $method:ident) => {
        impl core::ops::$trait for $type {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(core::ops::$trait::$method(self.0, rhs.0))
            }
        }
    };
    (inplace $type:ty, $trait:ident, $method:ident) => {
        impl core::ops::$trait for $type {
            fn $method(&mut self, rhs: Self) {
                core::ops::$trait::$method(&mut self.0, rhs.0);
            }
        }
    };
    (unary $type:ty, $trait:ident, $method:ident) => {
        impl core::ops::$trait for $type {
            type Output = Self;

            fn $method(self) -> Self::Output {
                Self(core::ops::$trait::$method(self.0))
            }
        }
    };
}
