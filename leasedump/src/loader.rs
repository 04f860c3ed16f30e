use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a lease file in full while holding an exclusive advisory lock.
///
/// dhcpd rewrites the file in place during lease cleanup; the lock keeps
/// the snapshot consistent. It is released before returning, so the
/// parser only ever sees a private buffer.
pub fn read_locked(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open {} for read", path.display()))?;
    file.lock()
        .with_context(|| format!("cannot lock {}", path.display()))?;

    let mut text = String::new();
    let read = file.read_to_string(&mut text);
    file.unlock()
        .with_context(|| format!("cannot unlock {}", path.display()))?;
    read.with_context(|| format!("failed to read {}", path.display()))?;

    Ok(text)
}
