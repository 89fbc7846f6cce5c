/// Arithmetic shared by every single-value quantity.
///
/// Sums and differences stay in the quantity, scaling by `f64` works from
/// either side, and dividing two quantities yields a plain ratio.
macro_rules! scalar_quantity {
    ($name:ident) => {
        impl $name {
            pub fn min(self, other: Self) -> Self {
                if self.0 <= other.0 { self } else { other }
            }

            pub fn max(self, other: Self) -> Self {
                if self.0 >= other.0 { self } else { other }
            }

            /// Square root of the value in base units
            pub fn sqrt(&self) -> f64 {
                self.0.sqrt()
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl std::ops::Div for $name {
            type Output = f64;

            fn div(self, rhs: $name) -> f64 {
                self.0 / rhs.0
            }
        }
    };
}

pub(crate) use scalar_quantity;
