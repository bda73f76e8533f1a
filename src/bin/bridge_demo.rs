//! Drives the bridge end to end against a stub runtime and prints every
//! presentation update. Run with RUST_LOG=debug for the bridge's own logs.

use chip8_host::{Bridge, Runtime, RuntimeEvent, UiEvent, UiEventSource, UiUpdate};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

struct StubRuntime;

impl Runtime for StubRuntime {
    fn load_rom(&mut self, encoded_path: &[u8], ticks_per_sec: u32) {
        log::info!(
            "runtime: load_rom({} path bytes, {} ticks/sec)",
            encoded_path.len(),
            ticks_per_sec
        );
    }

    fn start(&mut self) {
        log::info!("runtime: start");
    }

    fn stop(&mut self) {
        log::info!("runtime: stop");
    }
}

#[derive(Clone)]
struct ScriptedUi {
    queue: Rc<RefCell<VecDeque<UiEvent>>>,
}

impl ScriptedUi {
    fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    fn push(&self, event: UiEvent) {
        self.queue.borrow_mut().push_back(event);
    }
}

impl UiEventSource for ScriptedUi {
    fn poll_event(&mut self) -> Option<UiEvent> {
        self.queue.borrow_mut().pop_front()
    }

    fn selected_value(&self) -> String {
        r#"{"name":"pong","ticksPerSec":10}"#.to_string()
    }
}

fn print_updates(label: &str, updates: &crossbeam_channel::Receiver<UiUpdate>) {
    while let Ok(update) = updates.try_recv() {
        println!("[{label}] {update:?}");
    }
}

fn main() {
    env_logger::init();

    let ui = ScriptedUi::new();
    let (runtime_tx, runtime_rx) = crossbeam_channel::unbounded();
    let (mut bridge, updates) = Bridge::new(ui.clone(), StubRuntime, runtime_rx);
    print_updates("boot", &updates);

    // Module comes up and stages the presented selection.
    runtime_tx.send(RuntimeEvent::Ready).expect("bridge alive");
    runtime_tx
        .send(RuntimeEvent::Progress("Loading (3/10)".to_string()))
        .expect("bridge alive");
    bridge.pump();
    print_updates("ready", &updates);

    // User starts, then stops.
    ui.push(UiEvent::ToggleRunStop);
    bridge.pump();
    print_updates("start", &updates);

    ui.push(UiEvent::ToggleRunStop);
    bridge.pump();
    print_updates("stop", &updates);

    println!("final state: {:?}", bridge.state());
}
