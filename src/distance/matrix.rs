//! Dense distance matrix.

use crate::error::LoadError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by address id, with address 0 reserved for the depot. The tour
/// search assumes the matrix is symmetric; [`DistanceMatrix::from_lower_triangle`]
/// guarantees that by mirroring the raw triangular input.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_lower_triangle(&[
///     vec![0.0],
///     vec![2.0, 0.0],
///     vec![4.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 2), 4.0);
/// assert_eq!(dm.get(2, 0), 4.0);
/// assert!(dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Builds a symmetric matrix from the lower triangle of a distance table.
    ///
    /// Row `i` must hold at least `i + 1` entries; entries past the diagonal
    /// are ignored. Every kept distance must be finite and non-negative.
    pub fn from_lower_triangle(rows: &[Vec<f64>]) -> Result<Self, LoadError> {
        let n = rows.len();
        let mut dm = Self::new(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() <= i {
                return Err(LoadError::InvalidMatrix {
                    row: i,
                    col: row.len(),
                    reason: "row is shorter than the lower triangle",
                });
            }
            for (j, &d) in row.iter().take(i + 1).enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(LoadError::InvalidMatrix {
                        row: i,
                        col: j,
                        reason: "distance must be finite and non-negative",
                    });
                }
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from address `from` to address `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from address `from` to address `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of addresses in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Restricts the matrix to the given addresses, in the given order.
    ///
    /// Entry `(a, b)` of the result is the distance between `addresses[a]`
    /// and `addresses[b]`.
    pub fn submatrix(&self, addresses: &[usize]) -> Result<Self, LoadError> {
        if let Some(&address) = addresses.iter().find(|&&a| a >= self.size) {
            return Err(LoadError::UnknownAddress {
                address,
                size: self.size,
            });
        }
        let n = addresses.len();
        let mut sub = Self::new(n);
        for (a, &from) in addresses.iter().enumerate() {
            for (b, &to) in addresses.iter().enumerate() {
                sub.set(a, b, self.get(from, to));
            }
        }
        Ok(sub)
    }
}
