use ndarray::{Array2, ArrayBase, Data, Ix1};

/// Build coordinate matrices from two coordinate vectors.
///
/// Mirrors `numpy.meshgrid` with the default `xy` indexing: both outputs have
/// shape `(y.len(), x.len())`, every row of `X` is a copy of `x` and every
/// column of `Y` is a copy of `y`.
///
/// ```
/// use mplot_core::math::{arange, meshgrid};
///
/// let x = arange(-2.0, 2.01, 0.1).unwrap();
/// let y = arange(-3.0, 3.01, 0.1).unwrap();
/// let (xx, yy) = meshgrid(&x, &y);
/// assert_eq!(xx.dim(), (y.len(), x.len()));
/// assert_eq!(yy.dim(), (y.len(), x.len()));
/// ```
pub fn meshgrid<T, S1, S2>(x: &ArrayBase<S1, Ix1>, y: &ArrayBase<S2, Ix1>) -> (Array2<T>, Array2<T>)
where
    T: Clone,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let shape = (y.len(), x.len());
    log::trace!("meshgrid: broadcasting to shape {:?}", shape);

    let xx = Array2::from_shape_fn(shape, |(_, col)| x[col].clone());
    let yy = Array2::from_shape_fn(shape, |(row, _)| y[row].clone());
    (xx, yy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_meshgrid_accepts_views() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        let y = array![5.0, 6.0];
        let (xx, yy) = meshgrid(&x.slice(ndarray::s![1..3]), &y.view());
        assert_eq!(xx, array![[2.0, 3.0], [2.0, 3.0]]);
        assert_eq!(yy, array![[5.0, 5.0], [6.0, 6.0]]);
    }

    #[test]
    fn test_meshgrid_both_empty() {
        let empty: Array1<i32> = Array1::from_vec(vec![]);
        let (xx, yy) = meshgrid(&empty, &empty);
        assert_eq!(xx.dim(), (0, 0));
        assert_eq!(yy.dim(), (0, 0));
    }
}
