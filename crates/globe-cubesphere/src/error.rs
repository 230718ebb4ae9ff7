//! Mesher error types.

/// Smallest resolution that still yields at least one quad per face.
pub const MIN_RESOLUTION: u32 = 2;

/// Largest resolution whose merged six-face buffer is addressable with `u32` indices.
pub const MAX_RESOLUTION: u32 = 26_754;

/// Errors returned by cube-sphere generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The requested resolution cannot produce a valid mesh.
    #[error("invalid resolution {resolution}: {reason}")]
    InvalidArgument {
        /// The rejected resolution.
        resolution: u32,
        /// Human-readable explanation.
        reason: &'static str,
    },
}

/// Check that `resolution` lies in `MIN_RESOLUTION..=MAX_RESOLUTION`.
pub(crate) fn check_resolution(resolution: u32) -> Result<(), MeshError> {
    if resolution < MIN_RESOLUTION {
        return Err(MeshError::InvalidArgument {
            resolution,
            reason: "at least 2 samples per side are needed to form triangles",
        });
    }
    if resolution > MAX_RESOLUTION {
        return Err(MeshError::InvalidArgument {
            resolution,
            reason: "merged vertex count would overflow u32 indices",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(check_resolution(0).is_err());
        assert!(check_resolution(1).is_err());
        assert!(check_resolution(MIN_RESOLUTION).is_ok());
        assert!(check_resolution(MAX_RESOLUTION).is_ok());
        assert!(check_resolution(MAX_RESOLUTION + 1).is_err());
    }

    #[test]
    fn test_max_resolution_fits_u32() {
        let n = MAX_RESOLUTION as u64;
        assert!(6 * n * n <= u32::MAX as u64);
        assert!(6 * (n + 1) * (n + 1) > u32::MAX as u64);
    }

    #[test]
    fn test_error_message_names_resolution() {
        let err = check_resolution(1).unwrap_err();
        assert!(err.to_string().starts_with("invalid resolution 1:"));
    }
}
