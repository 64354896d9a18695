//! Code-swap transaction
//!
//! Wraps the host's swap step between a capture and a restore. The snapshot
//! crosses the boundary as bytes, the same way a host loading a fresh
//! dynamic library would hand it over.

use crate::{
    config::PlayerConfig,
    error::{Result, SessionError},
    render::ResourceLoader,
    session::Session,
    snapshot::SessionSnapshot,
};
use reloop_playback::AudioBackend;
use std::fmt::Display;
use tracing::{error, info};

/// Capture `session`, run `swap`, then restore it in place
///
/// The session is restored even when `swap` fails, so the host always keeps
/// a live session; the swap error is returned afterwards. If restoring fails
/// (fonts or icons cannot be loaded), the session stays captured and that
/// error is returned instead.
pub fn reload<F, E>(
    session: &mut Session,
    config: PlayerConfig,
    audio: &mut dyn AudioBackend,
    loader: &mut dyn ResourceLoader,
    swap: F,
) -> Result<()>
where
    F: FnOnce() -> std::result::Result<(), E>,
    E: Display,
{
    let bytes = session.capture().to_bytes()?;
    info!(bytes = bytes.len(), "Captured session, swapping code");

    let swapped = swap();
    if let Err(e) = &swapped {
        error!(error = %e, "Code swap failed, restoring previous session");
    }

    let snapshot = SessionSnapshot::from_bytes(&bytes)?;
    *session = Session::restore(snapshot, config, audio, loader)?;

    swapped.map_err(|e| SessionError::Swap(e.to_string()))
}
