/// Asserts that two floats are within $d of each other
#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        let (x, y, d) = ($x, $y, $d);
        assert!(
            (x - y).abs() <= d,
            "assert_delta failed: |{} - {}| <= {}",
            x,
            y,
            d
        );
    };
}

mod mass_matrix;
mod material;
mod matrix3;
mod plane;
mod sphere;
mod v2;
mod v3;

#[cfg(test)]
mod tests;

pub use mass_matrix::*;
pub use material::*;
pub use matrix3::*;
pub use plane::*;
pub use sphere::*;
pub use v2::*;
pub use v3::*;
