/// Commands the bridge issues to the emulation runtime.
///
/// The runtime is opaque: calls are fire-and-forget and assumed to
/// succeed. A load failure inside the runtime has no feedback channel.
pub trait Runtime {
    /// Stages a ROM by its null-terminated encoded path.
    fn load_rom(&mut self, encoded_path: &[u8], ticks_per_sec: u32);

    /// Begins executing the staged ROM.
    fn start(&mut self);

    /// Best-effort halt; not awaited.
    fn stop(&mut self);
}

/// Notifications the runtime pushes back to the bridge.
#[derive(Debug)]
pub enum RuntimeEvent {
    /// One-shot: module initialization finished. Valid before any other
    /// runtime traffic.
    Ready,
    /// Free-form status line, arbitrary timing and content.
    Progress(String),
    /// Unrecoverable environment fault (lost graphics context, uncaught
    /// runtime exception). Terminal for the bridge.
    Fault(String),
}
