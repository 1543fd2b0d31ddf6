use crate::{config::ToleranceConfig, Result, VectorError};
use log::debug;
use ndarray::{Array1, Ix1};
use std::fmt;
use std::ops::{Index, Neg};

/// Fixed-length sequence of `f64`. Operations never mutate their operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(data: Array1<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(data))
    }

    pub fn zeros(dimension: usize) -> Self {
        Self::new(Array1::zeros(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn iter(&self) -> ndarray::iter::Iter<'_, f64, Ix1> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    fn ensure_same_dimension(&self, other: &Vector, operation: &str) -> Result<()> {
        if self.dimension() != other.dimension() {
            debug!(
                "{} rejected: dimensions {} and {} differ",
                operation,
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Compares `self` and `other` componentwise under the tolerance `eps`.
    ///
    /// Vectors of different dimension are simply unequal. A component pair
    /// whose difference is NaN never falls within the tolerance.
    pub fn equal(&self, other: &Vector, eps: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn approx_eq(&self, other: &Vector, config: &ToleranceConfig) -> bool {
        self.equal(other, config.epsilon)
    }

    pub fn negate(&self) -> Vector {
        Self::new(self.data.mapv(|x| -x))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, "add")?;
        Ok(Self::new(&self.data + &other.data))
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.add(&other.negate())
    }

    pub fn hadamard_product(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, "hadamard product")?;
        Ok(Self::new(&self.data * &other.data))
    }

    // Left fold from 0.0; `Array1::sum` reorders the additions.
    pub fn sum(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, &x| acc + x)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        Ok(self.hadamard_product(other)?.sum())
    }

    pub fn length(&self) -> f64 {
        // Same arithmetic as `self.dot(self)`, minus the dimension check.
        Self::new(&self.data * &self.data).sum().sqrt()
    }

    /// Angle between `self` and `other` in radians, in `[0, pi]`.
    ///
    /// Fails with `ZeroVector` when either operand has zero length. Operands
    /// of different dimension fail inside the dot product.
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        let (m, n) = (self.length(), other.length());
        if m == 0.0 || n == 0.0 {
            debug!("angle rejected: operand lengths are {} and {}", m, n);
            return Err(VectorError::ZeroVector);
        }
        Ok((self.dot(other)? / (m * n)).acos())
    }

    /// 3D cross product. Fails with `NotThreeDimensional` unless both
    /// operands have exactly three components.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.dimension() != 3 || other.dimension() != 3 {
            debug!(
                "cross rejected: dimensions {} and {} are not both 3",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::NotThreeDimensional {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
