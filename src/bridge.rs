use crate::event::{UiEvent, UiEventSource};
use crate::progress::ProgressTranslator;
use crate::rom::{CatalogError, CatalogSelection, RomSelection};
use crate::runtime::{Runtime, RuntimeEvent};
use crate::update::{RunLabel, UiUpdate};
use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use std::time::Instant;

/// Where the bridge is in the staged-execution lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Runtime module not initialized yet.
    Uninitialized,
    /// Runtime initialized, no ROM committed.
    Ready,
    /// ROM bytes handed to the runtime, not executing.
    Loaded,
    /// Runtime actively executing.
    Running,
}

/// Links the UI to the emulation runtime.
///
/// Owns the lifecycle state and the current ROM selection; every command
/// the runtime receives goes through here. UI intents arrive through the
/// injected [`UiEventSource`], runtime notifications through a channel,
/// and computed presentation updates leave through the receiver handed
/// back by [`Bridge::new`]. Everything runs on the caller's thread; no
/// call blocks.
pub struct Bridge<E: UiEventSource, R: Runtime> {
    events: E,
    runtime: R,
    runtime_rx: Receiver<RuntimeEvent>,
    update_tx: Sender<UiUpdate>,

    state: LifecycleState,
    selection: Option<RomSelection>,
    progress: ProgressTranslator,
    failed: bool,
}

impl<E: UiEventSource, R: Runtime> Bridge<E, R> {
    /// Creates the bridge and its presentation-update outbox.
    ///
    /// The start control begins disabled; selecting a ROM enables it.
    pub fn new(events: E, runtime: R, runtime_rx: Receiver<RuntimeEvent>) -> (Self, Receiver<UiUpdate>) {
        let (update_tx, update_rx) = crossbeam_channel::unbounded();
        let mut bridge = Self {
            events,
            runtime,
            runtime_rx,
            update_tx,
            state: LifecycleState::Uninitialized,
            selection: None,
            progress: ProgressTranslator::new(),
            failed: false,
        };
        bridge.send_update(UiUpdate::SetStartEnabled(false));
        bridge.on_runtime_progress("Downloading...");
        (bridge, update_rx)
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn selection(&self) -> Option<&RomSelection> {
        self.selection.as_ref()
    }

    /// True once a fault has been reported; the bridge is inert after.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Drains pending UI intents, then runtime notifications.
    pub fn pump(&mut self) {
        self.handle_ui_events();
        self.handle_runtime_events();
    }

    /// Records and stages the selection carried by `raw`.
    ///
    /// The placeholder value is a pure no-op. Anything else is parsed as
    /// a catalog entry, staged via `load_rom`, and the start control is
    /// enabled. Selecting never begins execution; if the runtime was
    /// running the old ROM it is stopped before the new bytes go in.
    pub fn select_rom(&mut self, raw: &str) -> Result<(), CatalogError> {
        if self.state == LifecycleState::Uninitialized {
            log::debug!("selection before runtime ready, ignoring");
            return Ok(());
        }
        let entry = match CatalogSelection::parse(raw)? {
            CatalogSelection::None => return Ok(()),
            CatalogSelection::Entry(entry) => entry,
        };

        if self.state == LifecycleState::Running {
            self.runtime.stop();
            self.send_update(UiUpdate::SetRunLabel(RunLabel::Start));
        }

        let selection = RomSelection::new(&entry);
        log::info!(
            "staging ROM '{}' at {} ticks/sec",
            selection.name(),
            selection.ticks_per_sec()
        );
        self.send_update(UiUpdate::SetStartEnabled(true));
        self.runtime
            .load_rom(selection.encoded_path(), selection.ticks_per_sec());
        self.selection = Some(selection);
        self.state = LifecycleState::Loaded;
        Ok(())
    }

    /// Flips between executing and staged.
    ///
    /// Starting re-issues `load_rom` first: a runtime that resets its
    /// registers between runs gets fresh bytes either way. The caller is
    /// expected to keep the triggering control disabled until a ROM has
    /// been selected.
    pub fn toggle_run_state(&mut self) {
        match self.state {
            LifecycleState::Running => {
                self.runtime.stop();
                self.state = LifecycleState::Loaded;
                self.send_update(UiUpdate::SetRunLabel(RunLabel::Start));
            }
            LifecycleState::Loaded => {
                let Some(selection) = self.selection.as_ref() else {
                    log::warn!("start/stop toggled with no ROM staged");
                    return;
                };
                self.runtime
                    .load_rom(selection.encoded_path(), selection.ticks_per_sec());
                self.runtime.start();
                self.state = LifecycleState::Running;
                self.send_update(UiUpdate::SetRunLabel(RunLabel::Stop));
            }
            LifecycleState::Uninitialized | LifecycleState::Ready => {
                log::warn!("start/stop toggled with no ROM staged");
            }
        }
    }

    fn handle_ui_events(&mut self) {
        while let Some(event) = self.events.poll_event() {
            if self.failed {
                continue;
            }
            if let Err(e) = self.handle_ui_event(event) {
                self.fail(format!("{e:#}"));
            }
        }
    }

    fn handle_ui_event(&mut self, event: UiEvent) -> anyhow::Result<()> {
        match event {
            UiEvent::RomSelected(raw) => self
                .select_rom(&raw)
                .context("catalog entry parsing failed"),
            UiEvent::ToggleRunStop => {
                self.toggle_run_state();
                Ok(())
            }
        }
    }

    fn handle_runtime_events(&mut self) {
        while let Ok(event) = self.runtime_rx.try_recv() {
            if self.failed {
                continue;
            }
            match event {
                RuntimeEvent::Ready => self.on_runtime_ready(),
                RuntimeEvent::Progress(text) => self.on_runtime_progress(&text),
                RuntimeEvent::Fault(message) => self.fail(message),
            }
        }
    }

    /// One-shot runtime-initialized signal. Stages whatever the selection
    /// control currently shows, which may be the placeholder.
    fn on_runtime_ready(&mut self) {
        if self.state != LifecycleState::Uninitialized {
            log::warn!("duplicate runtime ready signal, ignoring");
            return;
        }
        log::info!("runtime ready");
        self.state = LifecycleState::Ready;

        let raw = self.events.selected_value();
        if let Err(e) = self
            .select_rom(&raw)
            .context("catalog entry parsing failed")
        {
            self.fail(format!("{e:#}"));
        }
    }

    fn on_runtime_progress(&mut self, text: &str) {
        if let Some(event) = self.progress.translate(text, Instant::now()) {
            self.send_update(UiUpdate::Progress(event));
        }
    }

    /// Reported once, globally; the bridge transitions no further.
    fn fail(&mut self, message: String) {
        if self.failed {
            return;
        }
        log::error!("runtime fault: {message}");
        self.failed = true;
        self.send_update(UiUpdate::Fatal(message));
    }

    fn send_update(&self, update: UiUpdate) {
        // A presentation layer that went away is not our problem.
        let _ = self.update_tx.send(update);
    }
}
