use num_traits::{Num, NumAssignOps, NumCast, real::Real};
use std::fmt;
use std::ops::{Add, Div, Mul};

/// A 3D vector generic over any numeric type.
///
/// This struct represents a point or displacement in the simulator's local
/// cartesian frame (meters, x east, y up, z south) and provides the common
/// mathematical operations needed to scale and combine such displacements.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Vec3D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
    /// The z-component of the vector.
    z: T,
}

impl<T> Vec3D<T>
where
    T: Real + NumCast + NumAssignOps,
{
    /// Computes the magnitude (absolute value) of the vector.
    ///
    /// # Returns
    /// The magnitude of the vector as a scalar of type `T`.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another vector (`other`).
    ///
    /// # Arguments
    /// * `other` - The target vector.
    ///
    /// # Returns
    /// A new vector representing the direction from `self` to `other`.
    pub fn to(&self, other: &Vec3D<T>) -> Vec3D<T> {
        Vec3D::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    ///
    /// # Returns
    /// A normalized vector.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() {
            self
        } else {
            Self::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
        }
    }
}

impl<T: Copy> Vec3D<T> {
    /// Creates a new vector with the given x, y and z components.
    ///
    /// # Arguments
    /// * `x` - The x-component of the vector.
    /// * `y` - The y-component of the vector.
    /// * `z` - The z-component of the vector.
    ///
    /// # Returns
    /// A new `Vec3D` object.
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    /// Returns the x-component of the vector.
    ///
    /// # Returns
    /// The `x` value of type `T`.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    ///
    /// # Returns
    /// The `y` value of type `T`.
    pub const fn y(&self) -> T { self.y }

    /// Returns the z-component of the vector.
    ///
    /// # Returns
    /// The `z` value of type `T`.
    pub const fn z(&self) -> T { self.z }
}

impl<T: Num + NumCast + Copy> Vec3D<T> {
    /// Creates a zero vector (x = 0, y = 0, z = 0).
    ///
    /// # Returns
    /// A zero-initialized `Vec3D` with member type `T`.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero()) }

    /// Converts the component type to another numeric type `D`.
    pub fn cast<D: NumCast>(self) -> Vec3D<D> {
        Vec3D {
            x: D::from(self.x).unwrap(),
            y: D::from(self.y).unwrap(),
            z: D::from(self.z).unwrap(),
        }
    }
}

impl<T, TAdd> Add<Vec3D<TAdd>> for Vec3D<T>
where
    T: Num + NumCast,
    TAdd: Num + NumCast,
{
    type Output = Vec3D<T>;

    /// Implements the `+` operator for two `Vec3D` objects.
    ///
    /// # Arguments
    /// * `rhs` - The vector to add.
    ///
    /// # Returns
    /// A new `Vec3D` representing the sum of the vectors.
    fn add(self, rhs: Vec3D<TAdd>) -> Self::Output {
        Self::Output {
            x: self.x + T::from(rhs.x).unwrap(),
            y: self.y + T::from(rhs.y).unwrap(),
            z: self.z + T::from(rhs.z).unwrap(),
        }
    }
}

impl<T, TMul> Mul<TMul> for Vec3D<T>
where
    T: Num + NumCast,
    TMul: Num + NumCast + Copy,
{
    type Output = Vec3D<T>;

    /// Implements the `*` operator for a `Vec3D` and a scalar.
    ///
    /// # Arguments
    /// * `rhs` - The scalar value to multiply by.
    ///
    /// # Returns
    /// A new scaled vector.
    fn mul(self, rhs: TMul) -> Self::Output {
        Self::Output {
            x: self.x * T::from(rhs).unwrap(),
            y: self.y * T::from(rhs).unwrap(),
            z: self.z * T::from(rhs).unwrap(),
        }
    }
}

impl<T, TDiv> Div<TDiv> for Vec3D<T>
where
    T: Num + NumCast,
    TDiv: Num + NumCast + Copy,
{
    type Output = Vec3D<T>;

    /// Implements the `/` operator for a `Vec3D` and a scalar.
    ///
    /// # Arguments
    /// * `rhs` - The scalar value to divide by.
    ///
    /// # Returns
    /// A new scaled vector.
    fn div(self, rhs: TDiv) -> Self::Output {
        Self::Output {
            x: self.x / T::from(rhs).unwrap(),
            y: self.y / T::from(rhs).unwrap(),
            z: self.z / T::from(rhs).unwrap(),
        }
    }
}

impl<T: Num + NumCast> From<(T, T, T)> for Vec3D<T> {
    /// Creates a `Vec3D` from a tuple of (x, y, z) values.
    ///
    /// # Arguments
    /// * `tuple` - A tuple representing the x, y and z values.
    ///
    /// # Returns
    /// A new `Vec3D` created from the tuple.
    fn from(tuple: (T, T, T)) -> Self {
        Vec3D {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vec3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
