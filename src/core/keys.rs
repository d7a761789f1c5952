//! Machine-bound key derivation.
//!
//! The history key is never stored. It is recomputed on every start from the
//! machine's durable identifier combined with the target OS and architecture:
//!
//! ```text
//! protected = hex(HMAC-SHA256(key = machine_id, msg = APP_ID))
//! key       = SHA-256("{protected}-{os}-{arch}")
//! ```
//!
//! If the machine identifier changes (reinstall, hardware swap), previously
//! written history can no longer be decrypted. This is accepted: it surfaces
//! as a load failure, and the store never resets itself to hide it.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::KEY_LEN;
use crate::core::constants;
use crate::error::{KeyError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Source of a durable machine identifier.
pub trait MachineSource {
    /// Raw machine identifier, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::MachineIdUnavailable` if the platform exposes none.
    fn machine_id(&self) -> Result<String>;
}

/// The running host.
///
/// Honors `PANO_MACHINE_ID` before asking the platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostMachine;

impl MachineSource for HostMachine {
    fn machine_id(&self) -> Result<String> {
        if let Ok(id) = std::env::var(constants::MACHINE_ID_ENV) {
            let id = id.trim().to_string();
            if !id.is_empty() {
                debug!("using machine id from {}", constants::MACHINE_ID_ENV);
                return Ok(id);
            }
        }
        platform_machine_id()
    }
}

/// A fixed identifier.
#[derive(Debug, Clone)]
pub struct FixedMachine(pub String);

impl MachineSource for FixedMachine {
    fn machine_id(&self) -> Result<String> {
        let id = self.0.trim();
        if id.is_empty() {
            return Err(KeyError::MachineIdUnavailable("empty machine id".to_string()).into());
        }
        Ok(id.to_string())
    }
}

#[cfg(target_os = "linux")]
fn platform_machine_id() -> Result<String> {
    for path in ["/var/lib/dbus/machine-id", "/etc/machine-id"] {
        if let Ok(contents) = std::fs::read_to_string(path) {
            let id = contents.trim();
            if !id.is_empty() {
                debug!(path, "machine id found");
                return Ok(id.to_string());
            }
        }
    }
    Err(KeyError::MachineIdUnavailable(
        "no /var/lib/dbus/machine-id or /etc/machine-id".to_string(),
    )
    .into())
}

#[cfg(target_os = "macos")]
fn platform_machine_id() -> Result<String> {
    let out = run("ioreg", &["-rd1", "-c", "IOPlatformExpertDevice"])?;
    out.lines()
        .find(|l| l.contains("IOPlatformUUID"))
        .and_then(|l| l.split('=').nth(1))
        .map(|v| v.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| KeyError::MachineIdUnavailable("IOPlatformUUID not found".to_string()).into())
}

#[cfg(target_os = "windows")]
fn platform_machine_id() -> Result<String> {
    let out = run(
        "reg",
        &[
            "query",
            r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Cryptography",
            "/v",
            "MachineGuid",
        ],
    )?;
    out.lines()
        .find(|l| l.contains("MachineGuid"))
        .and_then(|l| l.split_whitespace().last())
        .map(str::to_string)
        .ok_or_else(|| KeyError::MachineIdUnavailable("MachineGuid not found".to_string()).into())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_machine_id() -> Result<String> {
    Err(KeyError::MachineIdUnavailable(format!(
        "unsupported platform {}; set {}",
        std::env::consts::OS,
        constants::MACHINE_ID_ENV
    ))
    .into())
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn run(program: &str, args: &[&str]) -> Result<String> {
    let output = std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| KeyError::MachineIdUnavailable(format!("{}: {}", program, e)))?;
    if !output.status.success() {
        return Err(KeyError::MachineIdUnavailable(format!(
            "{} exited with {}",
            program, output.status
        ))
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// A derived 32-byte key, wiped on drop.
#[derive(Clone)]
pub struct MachineKey(Zeroizing<[u8; KEY_LEN]>);

impl MachineKey {
    /// Derive the key for `source`.
    ///
    /// Deterministic: the same machine id on the same platform always yields
    /// the same key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::MachineIdUnavailable` if the source has no id.
    pub fn derive(source: &dyn MachineSource) -> Result<Self> {
        let machine_id = Zeroizing::new(source.machine_id()?);
        let protected = Zeroizing::new(protected_id(&machine_id, constants::APP_ID)?);
        let combined = Zeroizing::new(format!(
            "{}-{}-{}",
            protected.as_str(),
            std::env::consts::OS,
            std::env::consts::ARCH
        ));

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&Sha256::digest(combined.as_bytes()));

        let derived = Self(key);
        debug!(fingerprint = %derived.fingerprint(), "machine key derived");
        Ok(derived)
    }

    /// Derive the key for the running host.
    pub fn for_host() -> Result<Self> {
        Self::derive(&HostMachine)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// First 4 key bytes as hex, for diagnostics.
    pub fn fingerprint(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl std::fmt::Debug for MachineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MachineKey").field(&self.fingerprint()).finish()
    }
}

/// App-scoped hash of the machine id, so the raw id never feeds the key directly.
fn protected_id(machine_id: &str, app_id: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(machine_id.as_bytes())
        .map_err(|e| KeyError::MachineIdUnavailable(e.to_string()))?;
    mac.update(app_id.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
