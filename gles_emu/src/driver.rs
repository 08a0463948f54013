/// Driver - process-wide entry point of the GLES emulation layer
///
/// Holds the two things that are genuinely process-wide: the backend device
/// shared by every context, and the logger. Everything that the emulated API
/// calls "current" (bound objects, current framebuffer, pending error) lives
/// in a `Context` instead, so independent contexts never share GL state.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::context::{Context, ContextConfig};
use crate::device::Device;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global driver state storage
static DRIVER_STATE: OnceLock<DriverState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct DriverState {
    /// Backend device shared by all contexts
    device: RwLock<Option<Arc<Mutex<dyn Device>>>>,
}

impl DriverState {
    fn new() -> Self {
        Self {
            device: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Driver singleton manager
///
/// # Example
///
/// ```ignore
/// use gles_emu::gles::{Driver, ContextConfig};
/// use gles_emu_vulkan::{VulkanDevice, VulkanDeviceConfig};
///
/// Driver::initialize()?;
/// Driver::create_device(VulkanDevice::new(VulkanDeviceConfig::default())?)?;
///
/// let mut context = Driver::create_context(ContextConfig::default())?;
/// let mut names = [0u32; 1];
/// context.gen_renderbuffers(1, Some(&mut names));
///
/// Driver::shutdown();
/// # Ok::<(), gles_emu::gles::Error>(())
/// ```
pub struct Driver;

impl Driver {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::driver_error!("gles::Driver", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::driver_error!("gles::Driver", "Backend error: {}", msg);
            }
            _ => {
                crate::driver_error!("gles::Driver", "Driver error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static DriverState> {
        DRIVER_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Driver not initialized. Call Driver::initialize() first.".to_string())
        ))
    }

    /// Initialize the driver
    ///
    /// Must be called once before registering a device. Calling it again is harmless.
    pub fn initialize() -> Result<()> {
        DRIVER_STATE.get_or_init(DriverState::new);
        Ok(())
    }

    /// Release the registered device
    ///
    /// Contexts created earlier keep their own reference to the device and stay valid.
    pub fn shutdown() {
        if let Some(state) = DRIVER_STATE.get() {
            if let Ok(mut device) = state.device.write() {
                if device.take().is_some() {
                    crate::driver_info!("gles::Driver", "Driver shut down, device released");
                }
            }
        }
    }

    // ===== DEVICE API =====

    /// Register the backend device singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized, a device already
    /// exists, or the device lock is poisoned.
    pub fn create_device<D: Device + 'static>(device: D) -> Result<()> {
        let arc_device: Arc<Mutex<dyn Device>> = Arc::new(Mutex::new(device));
        Self::register_device(arc_device)?;

        crate::driver_info!("gles::Driver", "Device singleton created successfully");
        Ok(())
    }

    pub(crate) fn register_device(device: Arc<Mutex<dyn Device>>) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.device.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Device lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Device already exists. Call Driver::destroy_device() first.".to_string())
            ));
        }

        *lock = Some(device);
        Ok(())
    }

    /// Get the registered device
    pub fn device() -> Result<Arc<Mutex<dyn Device>>> {
        let state = Self::state()?;

        let lock = state.device.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Device lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Device not created. Call Driver::create_device() first.".to_string())
            ))
    }

    /// Unregister the device singleton, allowing a new one to be created
    pub fn destroy_device() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.device.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Device lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::driver_info!("gles::Driver", "Device singleton destroyed");
        Ok(())
    }

    /// Create a context rendering through the registered device
    pub fn create_context(config: ContextConfig) -> Result<Context> {
        let device = Self::device()?;
        Context::new(device, config)
    }

    /// Clear the device slot between tests
    ///
    /// DRIVER_STATE is a OnceLock and cannot be uninitialized; this only
    /// drops the registered device.
    #[doc(hidden)]
    pub fn reset_for_testing() {
        if let Some(state) = DRIVER_STATE.get() {
            if let Ok(mut device) = state.device.write() {
                *device = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the logger (file logger, capture logger in tests, ...)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the DefaultLogger
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without location (used by driver_trace! .. driver_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by driver_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
