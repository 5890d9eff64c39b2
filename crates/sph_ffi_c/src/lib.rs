//! C-facing adapter for `sph_core`.
//!
//! Marshalling only: every entry point forwards to the core conversion and
//! maps [`HarmonicError`] onto [`SphStatus`]. The optional `python` feature
//! adds a pyo3 module exposing the same function.

use std::ffi::c_char;
use std::ptr;

use sph_core::{
    HarmonicError, LegendreBackend, LegendreConfig, LegendreError, ProviderError,
    real_spherical_harmonic,
};

#[cfg(feature = "python")]
mod python;

/// ABI version for downstream bindings.
pub const SPH_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphStatus {
    Ok = 0,
    InvalidOrder = 1,
    ProviderDomain = 2,
    ProviderOverflow = 3,
    InvalidConfig = 4,
    NullPointer = 7,
    Internal = 255,
}

impl SphStatus {
    /// Static NUL-terminated description of the status.
    pub const fn message(self) -> &'static std::ffi::CStr {
        match self {
            Self::Ok => c"ok",
            Self::InvalidOrder => c"order magnitude exceeds degree",
            Self::ProviderDomain => c"argument outside the provider domain",
            Self::ProviderOverflow => c"provider value not representable",
            Self::InvalidConfig => c"invalid backend configuration",
            Self::NullPointer => c"null pointer argument",
            Self::Internal => c"internal error",
        }
    }

    const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::InvalidOrder),
            2 => Some(Self::ProviderDomain),
            3 => Some(Self::ProviderOverflow),
            4 => Some(Self::InvalidConfig),
            7 => Some(Self::NullPointer),
            255 => Some(Self::Internal),
            _ => None,
        }
    }
}

impl From<&HarmonicError> for SphStatus {
    fn from(value: &HarmonicError) -> Self {
        match value {
            HarmonicError::InvalidOrder { .. } => Self::InvalidOrder,
            HarmonicError::Provider(ProviderError::Domain(_)) => Self::ProviderDomain,
            HarmonicError::Provider(ProviderError::Overflow(_)) => Self::ProviderOverflow,
            _ => Self::Internal,
        }
    }
}

impl From<&LegendreError> for SphStatus {
    fn from(value: &LegendreError) -> Self {
        match value {
            LegendreError::InvalidConfig(_) => Self::InvalidConfig,
            _ => Self::Internal,
        }
    }
}

/// C-compatible backend configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphBackendConfig {
    pub max_degree: u32,
}

impl Default for SphBackendConfig {
    fn default() -> Self {
        Self {
            max_degree: LegendreConfig::DEFAULT.max_degree,
        }
    }
}

impl From<SphBackendConfig> for LegendreConfig {
    fn from(value: SphBackendConfig) -> Self {
        LegendreConfig::with_max_degree(value.max_degree)
    }
}

/// Opaque backend handle type for ABI consumers.
pub type SphBackendHandle = LegendreBackend;

/// Evaluate with the default backend using C-compatible status mapping.
pub fn sph_harm_internal(l: u32, m: i32, theta: f64, phi: f64) -> Result<f64, SphStatus> {
    sph_core::sph_harm(l, m, theta, phi).map_err(|err| SphStatus::from(&err))
}

/// Build a backend from C-compatible config.
pub fn sph_backend_new_internal(config: SphBackendConfig) -> Result<LegendreBackend, SphStatus> {
    LegendreBackend::new(config.into()).map_err(|err| SphStatus::from(&err))
}

/// Evaluate against an existing backend.
pub fn sph_backend_eval_internal(
    backend: &LegendreBackend,
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
) -> Result<f64, SphStatus> {
    real_spherical_harmonic(backend, l, m, theta, phi).map_err(|err| SphStatus::from(&err))
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn sph_api_version() -> u32 {
    SPH_API_VERSION
}

/// Describe a status code. Unknown codes map to the `Internal` message.
///
/// The returned pointer refers to static storage and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn sph_status_message(status: i32) -> *const c_char {
    SphStatus::from_code(status)
        .unwrap_or(SphStatus::Internal)
        .message()
        .as_ptr()
}

/// Real spherical harmonic `Y_l^m(theta, phi)` with the default backend.
///
/// # Safety
/// `out_value` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sph_harm(
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
    out_value: *mut f64,
) -> SphStatus {
    ffi_boundary(|| {
        if out_value.is_null() {
            return SphStatus::NullPointer;
        }

        match sph_harm_internal(l, m, theta, phi) {
            Ok(value) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_value = value };
                SphStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Create a backend handle.
///
/// # Safety
/// `config` and `out_backend` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sph_backend_new(
    config: *const SphBackendConfig,
    out_backend: *mut *mut SphBackendHandle,
) -> SphStatus {
    ffi_boundary(|| {
        if config.is_null() || out_backend.is_null() {
            return SphStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and copied by value.
        let config_value = unsafe { *config };
        // SAFETY: Pointer is checked for null and we only write a single pointer value.
        let out_backend_ref = unsafe { &mut *out_backend };

        match sph_backend_new_internal(config_value) {
            Ok(backend) => {
                *out_backend_ref = Box::into_raw(Box::new(backend));
                SphStatus::Ok
            }
            Err(status) => {
                *out_backend_ref = ptr::null_mut();
                status
            }
        }
    })
}

/// Evaluate `Y_l^m(theta, phi)` against a backend handle.
///
/// # Safety
/// `backend` and `out_value` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sph_backend_eval(
    backend: *const SphBackendHandle,
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
    out_value: *mut f64,
) -> SphStatus {
    ffi_boundary(|| {
        if backend.is_null() || out_value.is_null() {
            return SphStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let backend_ref = unsafe { &*backend };

        match sph_backend_eval_internal(backend_ref, l, m, theta, phi) {
            Ok(value) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_value = value };
                SphStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Destroy a backend handle allocated by [`sph_backend_new`].
///
/// # Safety
/// `backend` must be either null or a pointer returned by `sph_backend_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sph_backend_free(backend: *mut SphBackendHandle) -> SphStatus {
    ffi_boundary(|| {
        if backend.is_null() {
            return SphStatus::Ok;
        }

        // SAFETY: Ownership is transferred back from a pointer created by Box::into_raw.
        unsafe { drop(Box::from_raw(backend)) };
        SphStatus::Ok
    })
}

fn ffi_boundary(f: impl FnOnce() -> SphStatus) -> SphStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => SphStatus::Internal,
    }
}
