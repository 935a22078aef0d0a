use thiserror::Error;

use super::model::Spectrum;

/// Arithmetic faults of the absorptivity conversion.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error(
        "cannot normalise by concentration {concentration} M x path length {path_length} cm \
         (product is {product})"
    )]
    InvalidDenominator {
        concentration: f64,
        path_length: f64,
        product: f64,
    },
}

/// Molar absorptivity of a single absorbance reading:
/// `absorbance / (concentration * path_length)`.
pub fn molar_absorptivity(absorbance: f64, concentration: f64, path_length: f64) -> f64 {
    absorbance / (concentration * path_length)
}

/// Populate `molar_absorptivity` on every record of `spectrum`.
///
/// A zero or non-finite `concentration * path_length` is rejected up front
/// instead of filling the table with inf/NaN.
pub fn apply_absorptivity(
    spectrum: &mut Spectrum,
    concentration: f64,
    path_length: f64,
) -> Result<(), TransformError> {
    let product = concentration * path_length;
    if product == 0.0 || !product.is_finite() {
        return Err(TransformError::InvalidDenominator {
            concentration,
            path_length,
            product,
        });
    }

    for record in &mut spectrum.records {
        record.molar_absorptivity = Some(molar_absorptivity(
            record.absorbance,
            concentration,
            path_length,
        ));
    }
    Ok(())
}
