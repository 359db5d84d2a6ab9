use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::warn;

use super::error::EmbeddingError;

/// Selects the compute device based on enabled features, CPU as the
/// fallback. GPU probing failures are logged, never fatal.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            debug!("Using Metal device");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable, falling back"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            debug!("Using CUDA device");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable, falling back"),
    }

    debug!("Using CPU device");
    Ok(Device::Cpu)
}
